use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failures seen by the calendar view. None of them are fatal: a load
/// failure leaves the cached records in place, and save or validation
/// failures keep the editor open.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("could not load habits: {0}")]
    LoadFailure(String),

    #[error("could not save habits: {0}")]
    SaveFailure(String),

    #[error("invalid entry: {0}")]
    ValidationFailure(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("APP_START_DATE must be YYYY-MM-DD, got {0:?}")]
    InvalidStartDate(String),
}

/// The habits file exists but cannot be used as-is. Starting with an empty
/// map here would overwrite it on the next save.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read data file: {0}")]
    Read(#[from] std::io::Error),

    #[error("data file is not a JSON object of days: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("data file has an unreadable record for {date}: {source}")]
    InvalidRecord {
        date: String,
        source: serde_json::Error,
    },
}
