//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::LocationId;

/// Errors shared by every `sc-*` crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    #[error("too many {what}: {count} exceeds the id space")]
    IdOverflow { what: &'static str, count: usize },
}

pub type CoreResult<T> = Result<T, CoreError>;
