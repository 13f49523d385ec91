//! Network-subsystem error type.

use thiserror::Error;

use sc_core::CoreError;

/// Errors produced while assembling a [`RouteGraph`](crate::RouteGraph).
///
/// Routing itself never fails: an unreachable or unknown endpoint is reported
/// as [`RouteOutcome::NotFound`](crate::RouteOutcome::NotFound).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("connection references unknown location {0:?}")]
    UnknownLocation(String),

    #[error("duplicate location key {0:?}")]
    DuplicateLocation(String),

    /// The sum of every connection's hardship must stay below
    /// `Hardship::MAX`, which routers use as "unreached".
    #[error("total hardship {total} exceeds the hardship range")]
    HardshipOverflow { total: u64 },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
