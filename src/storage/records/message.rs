use serde::{Deserialize, Serialize};

/// Persisted shape of a message, as encoded into the sled tree.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Message {
    pub id: String,
    pub title: String,
    pub body: String,
    pub attachment_url: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

impl From<&crate::domain::message::Message> for Message {
    fn from(message: &crate::domain::message::Message) -> Self {
        Self {
            id: message.id.clone(),
            title: message.title.clone(),
            body: message.body.clone(),
            attachment_url: message.attachment_url.clone(),
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}

impl From<Message> for crate::domain::message::Message {
    fn from(record: Message) -> Self {
        Self {
            id: record.id,
            title: record.title,
            body: record.body,
            attachment_url: record.attachment_url,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
