use crate::api::AppState;
use crate::api::schemas::messages::{MessagePayloadRequest, MessageResponse};
use crate::error::Result;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Lists every message on the board.
///
/// # Errors
/// Returns `AppError::Storage` if the store cannot be read.
pub async fn list_messages(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let messages = state.message_service.list()?;
    let body: Vec<MessageResponse> = messages.into_iter().map(MessageResponse::from).collect();
    Ok(Json(body))
}

/// Fetches a single message by id.
///
/// # Errors
/// Returns `AppError::MessageNotFound` if no message has that id.
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let message = state.message_service.get(&id)?;
    Ok(Json(MessageResponse::from(message)))
}

/// Creates a new message from the supplied payload.
///
/// # Errors
/// Returns `AppError::RecordTooLarge` if the encoded record exceeds the
/// configured limit.
pub async fn create_message(
    State(state): State<AppState>,
    Json(payload): Json<MessagePayloadRequest>,
) -> Result<impl IntoResponse> {
    let message = state.message_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}

/// Overwrites the payload fields of an existing message.
///
/// # Errors
/// Returns `AppError::UpdateNotFound` if no message has that id.
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MessagePayloadRequest>,
) -> Result<impl IntoResponse> {
    let message = state.message_service.update(&id, payload.into()).await?;
    Ok(Json(MessageResponse::from(message)))
}

/// Removes a message, returning its last stored state.
///
/// # Errors
/// Returns `AppError::DeleteNotFound` if no message has that id.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let message = state.message_service.delete(&id).await?;
    Ok(Json(MessageResponse::from(message)))
}
