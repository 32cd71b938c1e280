use crate::domain::message::Message;
use crate::error::Result;
use crate::storage::records;

/// The id -> message table. Keys are the canonical id strings, so iteration
/// order is the tree's byte order over ids.
#[derive(Clone, Debug)]
pub struct MessageRepository {
    tree: sled::Tree,
}

impl MessageRepository {
    #[must_use]
    pub fn new(tree: sled::Tree) -> Self {
        Self { tree }
    }

    /// Returns every stored message in key order.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the tree cannot be read.
    pub fn list(&self) -> Result<Vec<Message>> {
        let mut messages = Vec::new();
        for entry in self.tree.iter() {
            let (_, value) = entry?;
            let record: records::message::Message = serde_json::from_slice(&value)?;
            messages.push(record.into());
        }
        Ok(messages)
    }

    /// Looks up the record keyed by `id`.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the tree cannot be read.
    pub fn get(&self, id: &str) -> Result<Option<Message>> {
        let Some(value) = self.tree.get(id.as_bytes())? else {
            return Ok(None);
        };
        let record: records::message::Message = serde_json::from_slice(&value)?;
        Ok(Some(record.into()))
    }

    /// # Errors
    /// Returns `AppError::Storage` if the tree cannot be read.
    pub fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.tree.contains_key(id.as_bytes())?)
    }

    /// Inserts or replaces the record keyed by the message's id.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the write fails.
    pub fn insert(&self, message: &Message) -> Result<()> {
        let encoded = Self::encode(message)?;
        self.tree.insert(message.id.as_bytes(), encoded)?;
        Ok(())
    }

    /// Removes the record keyed by `id`, returning its last stored state.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the write fails.
    pub fn remove(&self, id: &str) -> Result<Option<Message>> {
        let Some(value) = self.tree.remove(id.as_bytes())? else {
            return Ok(None);
        };
        let record: records::message::Message = serde_json::from_slice(&value)?;
        Ok(Some(record.into()))
    }

    /// Size of the record as it would be stored, for limit enforcement.
    ///
    /// # Errors
    /// Returns `AppError::Encoding` if the record cannot be serialized.
    pub fn encoded_len(message: &Message) -> Result<usize> {
        Ok(Self::encode(message)?.len())
    }

    fn encode(message: &Message) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&records::message::Message::from(message))?)
    }
}
