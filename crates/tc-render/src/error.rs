use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render setting `{field}`: {reason}")]
    InvalidSettings { field: &'static str, reason: String },

    #[error("render settings need at least one palette colour")]
    EmptyPalette,
}

pub type RenderResult<T> = Result<T, RenderError>;
