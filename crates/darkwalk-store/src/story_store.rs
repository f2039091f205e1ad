//! `PostgreSQL` implementation of the `StoryRepository` trait.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::debug;

use darkwalk_core::error::DomainError;
use darkwalk_core::role::Role;
use darkwalk_story::{Segment, StoryDocument, StoryRepository};

/// PostgreSQL-backed story content store, keyed `(story_id, role)`.
#[derive(Debug, Clone)]
pub struct PgStoryRepository {
    pool: PgPool,
}

impl PgStoryRepository {
    /// Creates a new `PgStoryRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn infrastructure(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

#[async_trait]
impl StoryRepository for PgStoryRepository {
    async fn fetch(
        &self,
        story_id: &str,
        role: Role,
    ) -> Result<Option<StoryDocument>, DomainError> {
        let row = sqlx::query(
            "SELECT title, segments FROM stories WHERE story_id = $1 AND role = $2",
        )
        .bind(story_id)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(infrastructure)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let segments: serde_json::Value = row.try_get("segments").map_err(infrastructure)?;
        let segments: Vec<Segment> = serde_json::from_value(segments).map_err(|err| {
            DomainError::Infrastructure(format!("stored segments failed to decode: {err}"))
        })?;

        Ok(Some(StoryDocument {
            story_id: story_id.to_owned(),
            title: row.try_get("title").map_err(infrastructure)?,
            role,
            segments,
        }))
    }

    async fn insert(&self, document: &StoryDocument) -> Result<(), DomainError> {
        let segments = serde_json::to_value(&document.segments).map_err(|err| {
            DomainError::Infrastructure(format!("segments failed to encode: {err}"))
        })?;

        sqlx::query(
            "INSERT INTO stories (story_id, role, title, segments) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (story_id, role) \
             DO UPDATE SET title = EXCLUDED.title, segments = EXCLUDED.segments",
        )
        .bind(&document.story_id)
        .bind(document.role.as_str())
        .bind(&document.title)
        .bind(segments)
        .execute(&self.pool)
        .await
        .map_err(infrastructure)?;

        debug!(
            story_id = %document.story_id,
            role = %document.role,
            segments = document.segments.len(),
            "story content stored"
        );
        Ok(())
    }
}
