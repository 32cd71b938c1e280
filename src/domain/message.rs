/// A single entry on the board.
///
/// Timestamps are unix-epoch nanoseconds from the host clock. `created_at`
/// is set once at creation; `updated_at` stays unset until the first update
/// and is re-stamped on every subsequent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub title: String,
    pub body: String,
    pub attachment_url: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

/// The caller-supplied subset of message fields, shared by create and update.
#[derive(Debug, Clone)]
pub struct MessagePayload {
    pub title: String,
    pub body: String,
    pub attachment_url: String,
}

impl Message {
    #[must_use]
    pub fn create(id: String, payload: MessagePayload, created_at: i64) -> Self {
        Self {
            id,
            title: payload.title,
            body: payload.body,
            attachment_url: payload.attachment_url,
            created_at,
            updated_at: None,
        }
    }

    /// Builds the replacement record for an update: identity fields kept,
    /// content fields taken from the payload, `updated_at` stamped.
    #[must_use]
    pub fn apply(self, payload: MessagePayload, now: i64) -> Self {
        Self {
            title: payload.title,
            body: payload.body,
            attachment_url: payload.attachment_url,
            // wall clocks can step backwards; updated_at never precedes created_at
            updated_at: Some(now.max(self.created_at)),
            ..self
        }
    }
}
