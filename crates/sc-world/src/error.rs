use thiserror::Error;

use sc_network::NetworkError;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("world table parse error: {0}")]
    Parse(String),

    #[error("alias {alias:?} points at unknown location {key:?}")]
    UnknownAliasTarget { alias: String, key: String },

    #[error("invalid world graph: {0}")]
    Network(#[from] NetworkError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
