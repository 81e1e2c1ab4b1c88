use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("movie {id} not found")]
    NotFound { id: i64 },

    /// A `{id}` path segment that is not an integer.
    #[error("{0:?} is not a movie id")]
    InvalidId(String),

    #[error("invalid movie data: {0}")]
    InvalidInput(String),

    /// `max(id) + 1` no longer fits in an `i64`.
    #[error("no movie id left to assign")]
    IdSpaceExhausted,

    #[error("backing file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize movies: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::NotFound { .. } | StoreError::InvalidId(_) => StatusCode::NOT_FOUND,
            StoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message: String = match self {
            StoreError::NotFound { .. } | StoreError::InvalidId(_) => "movie not found".into(),
            StoreError::InvalidInput(_) => "invalid movie data".into(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}
