//! Progress persistence abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::role::Role;

/// A snapshot of a player's narrative position, written on every advance.
///
/// Progress is a fire-and-forget snapshot, not an event stream: the latest
/// record for a user is the whole truth of where they are.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// Opaque identifier of the player.
    pub user_id: String,
    /// The role the player is tracking.
    pub role: Role,
    /// Index of the segment the player has reached.
    pub story_segment: i64,
    /// The most recent branch choice, if any.
    pub selected_choice: Option<String>,
    /// When the snapshot was taken.
    pub recorded_at: DateTime<Utc>,
}

/// Repository trait for saving and loading progress snapshots.
///
/// Implementations own transport and retry; callers never await delivery
/// guarantees beyond the returned result, and the engine itself never
/// retries.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Persists one progress snapshot.
    async fn save(&self, record: &ProgressRecord) -> Result<(), DomainError>;

    /// Returns the most recent snapshot for a user, or `None` if the user
    /// has never advanced.
    async fn latest_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<ProgressRecord>, DomainError>;
}
