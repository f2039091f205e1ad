//! Test story repository.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use darkwalk_core::error::DomainError;
use darkwalk_core::role::Role;
use darkwalk_story::{StoryDocument, StoryRepository};

/// A story repository backed by an in-memory map keyed `(story_id, role)`.
#[derive(Debug, Default)]
pub struct InMemoryStoryRepository {
    documents: Mutex<HashMap<(String, Role), StoryDocument>>,
}

impl InMemoryStoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with the given documents.
    #[must_use]
    pub fn seeded(documents: Vec<StoryDocument>) -> Self {
        let repository = Self::new();
        {
            let mut map = repository.documents.lock().unwrap();
            for document in documents {
                map.insert((document.story_id.clone(), document.role), document);
            }
        }
        repository
    }
}

#[async_trait]
impl StoryRepository for InMemoryStoryRepository {
    async fn fetch(
        &self,
        story_id: &str,
        role: Role,
    ) -> Result<Option<StoryDocument>, DomainError> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .get(&(story_id.to_owned(), role))
            .cloned())
    }

    async fn insert(&self, document: &StoryDocument) -> Result<(), DomainError> {
        self.documents
            .lock()
            .unwrap()
            .insert((document.story_id.clone(), document.role), document.clone());
        Ok(())
    }
}
