use crate::config::HealthConfig;
use std::time::Duration;
use tokio::time::timeout;

#[derive(Clone, Debug)]
pub struct HealthService {
    db: sled::Db,
    config: HealthConfig,
}

impl HealthService {
    #[must_use]
    pub fn new(db: sled::Db, config: HealthConfig) -> Self {
        Self { db, config }
    }

    /// Checks that the message store accepts a flush.
    ///
    /// # Errors
    /// Returns a string describing the failure if the store is unreachable.
    pub async fn check_storage(&self) -> Result<(), String> {
        let storage_timeout = Duration::from_millis(self.config.storage_timeout_ms);
        let db = self.db.clone();

        match timeout(storage_timeout, tokio::task::spawn_blocking(move || db.flush())).await {
            Ok(Ok(Ok(_))) => Ok(()),
            Ok(Ok(Err(e))) => Err(format!("Storage flush failed: {e:?}")),
            Ok(Err(e)) => Err(format!("Storage check task failed: {e:?}")),
            Err(_) => Err("Storage check timed out".to_string()),
        }
    }
}
