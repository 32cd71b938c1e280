use crate::domain::message::{Message, MessagePayload};
use serde::{Deserialize, Serialize};

/// Caller-supplied fields, shared by create and update requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePayloadRequest {
    pub title: String,
    pub body: String,
    #[serde(rename = "attachmentURL")]
    pub attachment_url: String,
}

impl From<MessagePayloadRequest> for MessagePayload {
    fn from(request: MessagePayloadRequest) -> Self {
        Self {
            title: request.title,
            body: request.body,
            attachment_url: request.attachment_url,
        }
    }
}

/// Wire shape of a stored message. `updatedAt` is omitted until the first
/// update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(rename = "attachmentURL")]
    pub attachment_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<i64>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            title: message.title,
            body: message.body,
            attachment_url: message.attachment_url,
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}
