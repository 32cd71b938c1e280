use crate::config::BoardConfig;
use crate::domain::message::{Message, MessagePayload};
use crate::error::{AppError, Result};
use crate::storage::message_repo::MessageRepository;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct MessageService {
    repo: MessageRepository,
    config: BoardConfig,
    // Serializes the read-modify-write sequences in create/update/delete;
    // a lookup must not interleave with another writer on the same key.
    write_lock: Arc<Mutex<()>>,
}

impl MessageService {
    #[must_use]
    pub fn new(repo: MessageRepository, config: BoardConfig) -> Self {
        Self { repo, config, write_lock: Arc::new(Mutex::new(())) }
    }

    /// Returns every message on the board in store key order.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the store cannot be read.
    pub fn list(&self) -> Result<Vec<Message>> {
        self.repo.list()
    }

    /// Looks up a single message by id.
    ///
    /// # Errors
    /// Returns `AppError::MessageNotFound` if no message has that id.
    pub fn get(&self, id: &str) -> Result<Message> {
        self.repo.get(id)?.ok_or_else(|| AppError::MessageNotFound(id.to_string()))
    }

    /// Creates a message with a fresh id, `created_at` set to now and
    /// `updated_at` unset.
    ///
    /// # Errors
    /// Returns `AppError::RecordTooLarge` if the encoded record exceeds the
    /// configured limit; the store is left unchanged.
    #[tracing::instrument(err(level = "warn"), skip(self, payload))]
    pub async fn create(&self, payload: MessagePayload) -> Result<Message> {
        let _guard = self.write_lock.lock().await;

        let id = self.fresh_id()?;
        let message = Message::create(id, payload, now_nanos());
        self.check_size(&message)?;
        self.repo.insert(&message)?;

        tracing::debug!(id = %message.id, "message created");
        Ok(message)
    }

    /// Replaces the payload fields of an existing message and stamps
    /// `updated_at`; id and `created_at` are preserved.
    ///
    /// # Errors
    /// Returns `AppError::UpdateNotFound` if no message has that id, and
    /// `AppError::RecordTooLarge` if the replacement record exceeds the
    /// configured limit. Either way the store is left unchanged.
    #[tracing::instrument(err(level = "warn"), skip(self, payload))]
    pub async fn update(&self, id: &str, payload: MessagePayload) -> Result<Message> {
        let _guard = self.write_lock.lock().await;

        let current = self.repo.get(id)?.ok_or_else(|| AppError::UpdateNotFound(id.to_string()))?;
        let message = current.apply(payload, now_nanos());
        self.check_size(&message)?;
        self.repo.insert(&message)?;

        tracing::debug!(id = %message.id, "message updated");
        Ok(message)
    }

    /// Removes a message, returning its last stored state.
    ///
    /// # Errors
    /// Returns `AppError::DeleteNotFound` if no message has that id.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn delete(&self, id: &str) -> Result<Message> {
        let _guard = self.write_lock.lock().await;

        let removed = self.repo.remove(id)?.ok_or_else(|| AppError::DeleteNotFound(id.to_string()))?;

        tracing::debug!(id = %removed.id, "message deleted");
        Ok(removed)
    }

    // A v4 collision is not expected in practice; the retry loop makes the
    // id-uniqueness invariant hold by construction rather than by odds.
    fn fresh_id(&self) -> Result<String> {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.repo.contains(&id)? {
                return Ok(id);
            }
        }
    }

    fn check_size(&self, message: &Message) -> Result<()> {
        let size = MessageRepository::encoded_len(message)?;
        let limit = self.config.max_record_bytes;
        if size > limit {
            return Err(AppError::RecordTooLarge { size, limit });
        }
        Ok(())
    }
}

fn now_nanos() -> i64 {
    // saturates in 2262, which outlives this board
    i64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos()).unwrap_or(i64::MAX)
}
