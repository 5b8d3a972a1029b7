//! Routing-subsystem error type.

use thiserror::Error;

use tc_catalogue::CatalogueError;
use tc_core::{StopId, TcError};

/// Errors produced by `tc-router`.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: StopId, to: StopId },

    #[error("graph construction failed: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    Core(#[from] TcError),
}

pub type RouterResult<T> = Result<T, RouterError>;
