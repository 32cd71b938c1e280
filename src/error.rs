use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("a message with id={0} not found")]
    MessageNotFound(String),
    #[error("couldn't update a message with id={0}. message not found")]
    UpdateNotFound(String),
    #[error("couldn't delete a message with id={0}. message not found.")]
    DeleteNotFound(String),
    #[error("message record of {size} bytes exceeds the {limit} byte limit")]
    RecordTooLarge { size: usize, limit: usize },
    #[error("Storage error: {0}")]
    Storage(#[from] sled::Error),
    #[error("Record encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MessageNotFound(_) | Self::UpdateNotFound(_) | Self::DeleteNotFound(_) => {
                tracing::debug!(error = %self, "Message not found");
                (StatusCode::NOT_FOUND, self.to_string())
            }
            Self::RecordTooLarge { .. } => {
                tracing::debug!(error = %self, "Record too large");
                (StatusCode::PAYLOAD_TOO_LARGE, self.to_string())
            }
            Self::Storage(ref e) => {
                tracing::error!(error = %e, "Storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            Self::Encoding(ref e) => {
                tracing::error!(error = %e, "Record encoding error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
