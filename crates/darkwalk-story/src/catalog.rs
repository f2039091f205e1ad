//! Read-only accessors over the loaded story content.

use std::collections::HashMap;

use darkwalk_core::error::DomainError;
use darkwalk_core::role::Role;

use crate::repository::StoryDocument;
use crate::types::Segment;

/// An immutable, role-keyed collection of authored segment sequences.
///
/// Built once at startup and shared read-only across sessions; reloading
/// mid-session is out of scope.
#[derive(Debug, Clone, Default)]
pub struct StoryCatalog {
    stories: HashMap<Role, Vec<Segment>>,
}

impl StoryCatalog {
    /// Builds a catalog from story documents, one per role.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when a document violates the
    /// authoring invariants: an empty segment list, a trigger on the entry
    /// segment, an empty choice set, or a choice jumping past the end of
    /// the sequence.
    pub fn from_documents(
        documents: impl IntoIterator<Item = StoryDocument>,
    ) -> Result<Self, DomainError> {
        let mut stories = HashMap::new();
        for document in documents {
            validate_segments(document.role, &document.segments)?;
            stories.insert(document.role, document.segments);
        }
        Ok(Self { stories })
    }

    /// Returns the segment at `index` for `role`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownRole` when no story is loaded for the
    /// role, and `DomainError::SegmentOutOfRange` when `index` is past the
    /// end of the sequence.
    pub fn segment(&self, role: Role, index: usize) -> Result<&Segment, DomainError> {
        let segments = self
            .stories
            .get(&role)
            .ok_or(DomainError::UnknownRole(role))?;
        segments
            .get(index)
            .ok_or(DomainError::SegmentOutOfRange {
                role,
                index,
                count: segments.len(),
            })
    }

    /// Returns the number of authored segments for `role`, or 0 when no
    /// story is loaded for it.
    #[must_use]
    pub fn segment_count(&self, role: Role) -> usize {
        self.stories.get(&role).map_or(0, Vec::len)
    }

    /// Returns the roles with loaded stories.
    #[must_use]
    pub fn roles(&self) -> Vec<Role> {
        self.stories.keys().copied().collect()
    }

    /// Loads `story_id` from a repository and builds a catalog, one
    /// document per requested role. Roles without stored content are
    /// skipped rather than failing, so a partially-authored story can
    /// still be played.
    ///
    /// # Errors
    ///
    /// Propagates repository errors and the same validation errors as
    /// [`Self::from_documents`].
    pub async fn load(
        story_id: &str,
        roles: &[Role],
        repository: &dyn crate::repository::StoryRepository,
    ) -> Result<Self, DomainError> {
        let mut documents = Vec::new();
        for role in roles {
            if let Some(document) = repository.fetch(story_id, *role).await? {
                documents.push(document);
            }
        }
        Self::from_documents(documents)
    }
}

fn validate_segments(role: Role, segments: &[Segment]) -> Result<(), DomainError> {
    if segments.is_empty() {
        return Err(DomainError::Validation(format!(
            "role {role} has no segments"
        )));
    }
    if segments[0].trigger.is_some() {
        return Err(DomainError::Validation(format!(
            "role {role}: entry segment must not carry a trigger"
        )));
    }
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 && segment.trigger.is_none() {
            return Err(DomainError::Validation(format!(
                "role {role}: segment {index} is missing a trigger"
            )));
        }
        if let Some(choices) = &segment.choices {
            if choices.is_empty() {
                return Err(DomainError::Validation(format!(
                    "role {role}: segment {index} has an empty choice set"
                )));
            }
            for choice in choices {
                if choice.next_segment >= segments.len() {
                    return Err(DomainError::Validation(format!(
                        "role {role}: choice '{}' jumps to segment {} past the end",
                        choice.id, choice.next_segment
                    )));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn test_segment_lookup_and_count() {
        let catalog = demo::demo_catalog();
        assert_eq!(catalog.segment_count(Role::Investigator), 4);
        assert_eq!(catalog.segment_count(Role::Murderer), 4);

        let entry = catalog.segment(Role::Investigator, 0).unwrap();
        assert!(entry.trigger.is_none());
        assert!(entry.choices.is_none());
    }

    #[test]
    fn test_out_of_range_index_is_reported() {
        let catalog = demo::demo_catalog();
        let err = catalog.segment(Role::Murderer, 4).unwrap_err();
        match err {
            DomainError::SegmentOutOfRange { index, count, .. } => {
                assert_eq!(index, 4);
                assert_eq!(count, 4);
            }
            other => panic!("expected SegmentOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_catalog_reports_unknown_role() {
        let catalog = StoryCatalog::default();
        assert_eq!(catalog.segment_count(Role::Investigator), 0);
        assert!(matches!(
            catalog.segment(Role::Investigator, 0),
            Err(DomainError::UnknownRole(Role::Investigator))
        ));
    }

    #[test]
    fn test_entry_segment_with_trigger_is_rejected() {
        let mut documents = demo::demo_documents();
        let trigger = documents[0].segments[1].trigger.clone();
        documents[0].segments[0].trigger = trigger;
        let err = StoryCatalog::from_documents(documents).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_choice_past_the_end_is_rejected() {
        let mut documents = demo::demo_documents();
        if let Some(choices) = &mut documents[0].segments[1].choices {
            choices[0].next_segment = 99;
        }
        let err = StoryCatalog::from_documents(documents).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_load_skips_roles_without_content() {
        use async_trait::async_trait;

        use crate::repository::{StoryDocument, StoryRepository};

        /// Serves only the investigator document.
        struct OneRoleRepository;

        #[async_trait]
        impl StoryRepository for OneRoleRepository {
            async fn fetch(
                &self,
                _story_id: &str,
                role: Role,
            ) -> Result<Option<StoryDocument>, DomainError> {
                Ok(demo::demo_documents()
                    .into_iter()
                    .find(|document| document.role == role && role == Role::Investigator))
            }

            async fn insert(&self, _document: &StoryDocument) -> Result<(), DomainError> {
                Ok(())
            }
        }

        let catalog = StoryCatalog::load(
            demo::DEMO_STORY_ID,
            &[Role::Investigator, Role::Murderer],
            &OneRoleRepository,
        )
        .await
        .unwrap();

        assert_eq!(catalog.segment_count(Role::Investigator), 4);
        assert_eq!(catalog.segment_count(Role::Murderer), 0);
    }
}
