use thiserror::Error;

use tc_catalogue::CatalogueError;
use tc_render::RenderError;
use tc_router::RouterError;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("road distance from {from:?} names unknown stop {to:?}")]
    MalformedDistanceSpec { from: String, to: String },

    #[error("document has route requests but no routing_settings")]
    MissingRoutingSettings,

    #[error("document has map requests but no render_settings")]
    MissingRenderSettings,

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("ingestion failed: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error("routing failed: {0}")]
    Router(#[from] RouterError),

    #[error("map rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

impl RequestError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        RequestError::Parse { line, reason: reason.into() }
    }
}

pub type RequestResult<T> = Result<T, RequestError>;
