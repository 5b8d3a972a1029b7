//! Catalogue error type.

use thiserror::Error;

use tc_core::{StopId, TcError};

/// Errors produced by `tc-catalogue`.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("stop {0:?} not found")]
    UnknownStop(String),

    #[error("bus {0:?} not found")]
    UnknownBus(String),

    #[error("stop {0:?} already exists")]
    DuplicateStop(String),

    #[error("bus {0:?} already exists")]
    DuplicateBus(String),

    #[error("bus {0:?} has no stops")]
    EmptyRoute(String),

    #[error("no road distance between {from} and {to}")]
    MissingDistance { from: StopId, to: StopId },

    #[error(transparent)]
    Core(#[from] TcError),
}

impl CatalogueError {
    /// `true` for lookups of a name that was never ingested.  Query layers
    /// turn these into "not found" answers instead of failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogueError::UnknownStop(_) | CatalogueError::UnknownBus(_))
    }
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
