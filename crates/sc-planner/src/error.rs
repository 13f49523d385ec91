use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("planner configuration error: {0}")]
    Config(String),

    #[error("world map has no locations")]
    EmptyWorld,

    #[error("invalid analysis request: {0}")]
    InvalidRequest(&'static str),

    #[error("analytics source unavailable: {0}")]
    Analytics(String),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
