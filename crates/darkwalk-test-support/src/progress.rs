//! Test progress repositories.

use std::sync::Mutex;

use async_trait::async_trait;
use darkwalk_core::error::DomainError;
use darkwalk_core::progress::{ProgressRecord, ProgressRepository};

/// A progress repository backed by an in-memory list.
///
/// `latest_for_user` returns the last record saved for the user, matching
/// the "most recent by timestamp" contract for appends made through a
/// monotonic clock.
#[derive(Debug, Default)]
pub struct InMemoryProgressRepository {
    records: Mutex<Vec<ProgressRecord>>,
}

impl InMemoryProgressRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every saved record, in save order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn records(&self) -> Vec<ProgressRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn save(&self, record: &ProgressRecord) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn latest_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<ProgressRecord>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|record| record.user_id == user_id)
            .cloned())
    }
}

/// A progress repository that always returns an infrastructure error.
/// Useful for verifying that sink failures never affect engine state.
#[derive(Debug, Default)]
pub struct FailingProgressRepository;

#[async_trait]
impl ProgressRepository for FailingProgressRepository {
    async fn save(&self, _record: &ProgressRecord) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn latest_for_user(
        &self,
        _user_id: &str,
    ) -> Result<Option<ProgressRecord>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
