use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Query execution failed: {0}")]
    Execution(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
