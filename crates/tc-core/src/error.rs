//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `TcError` as one
//! variant, so low-level validation failures keep a single spelling across
//! the workspace.

use thiserror::Error;

use crate::StopId;

/// The top-level error type for `tc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TcError {
    #[error("stop {0} not found")]
    StopNotFound(StopId),

    #[error("invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `tc-*` crates.
pub type TcResult<T> = Result<T, TcError>;
