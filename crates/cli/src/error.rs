use memberscope_api::ModelError;
use memberscope_core::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("Unknown type: {0}")]
    UnknownType(String),
    #[error("Unknown flag: {0}")]
    InvalidFlag(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
