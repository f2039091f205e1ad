//! Story content storage abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use darkwalk_core::error::DomainError;
use darkwalk_core::role::Role;

use crate::types::Segment;

/// One role's authored segment sequence as stored and transported.
///
/// Story content records are keyed by `(story_id, role)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDocument {
    /// Identifier of the story this sequence belongs to.
    pub story_id: String,
    /// Display title of the story.
    pub title: String,
    /// The role this sequence is authored for.
    pub role: Role,
    /// The ordered segment sequence.
    pub segments: Vec<Segment>,
}

/// Repository trait for fetching and inserting story content.
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Returns the document for `(story_id, role)`, or `None` when absent.
    async fn fetch(
        &self,
        story_id: &str,
        role: Role,
    ) -> Result<Option<StoryDocument>, DomainError>;

    /// Inserts a story document, replacing any existing `(story_id, role)`
    /// record.
    async fn insert(&self, document: &StoryDocument) -> Result<(), DomainError>;
}
