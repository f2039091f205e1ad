//! `PostgreSQL` implementation of the `ProgressRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::debug;
use uuid::Uuid;

use darkwalk_core::error::DomainError;
use darkwalk_core::progress::{ProgressRecord, ProgressRepository};
use darkwalk_core::role::Role;

/// PostgreSQL-backed progress store.
///
/// Snapshots are append-only; `latest_for_user` reads the newest row by
/// `recorded_at`.
#[derive(Debug, Clone)]
pub struct PgProgressRepository {
    pool: PgPool,
}

impl PgProgressRepository {
    /// Creates a new `PgProgressRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn infrastructure(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

#[async_trait]
impl ProgressRepository for PgProgressRepository {
    async fn save(&self, record: &ProgressRecord) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO progress \
             (id, user_id, role, story_segment, selected_choice, recorded_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(Uuid::new_v4())
        .bind(&record.user_id)
        .bind(record.role.as_str())
        .bind(record.story_segment)
        .bind(&record.selected_choice)
        .bind(record.recorded_at)
        .execute(&self.pool)
        .await
        .map_err(infrastructure)?;

        debug!(
            user_id = %record.user_id,
            segment = record.story_segment,
            "progress snapshot stored"
        );
        Ok(())
    }

    async fn latest_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<ProgressRecord>, DomainError> {
        let row = sqlx::query(
            "SELECT user_id, role, story_segment, selected_choice, recorded_at \
             FROM progress WHERE user_id = $1 \
             ORDER BY recorded_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(infrastructure)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let role: String = row.try_get("role").map_err(infrastructure)?;
        let role: Role = role.parse()?;
        let recorded_at: DateTime<Utc> = row.try_get("recorded_at").map_err(infrastructure)?;

        Ok(Some(ProgressRecord {
            user_id: row.try_get("user_id").map_err(infrastructure)?,
            role,
            story_segment: row.try_get("story_segment").map_err(infrastructure)?,
            selected_choice: row.try_get("selected_choice").map_err(infrastructure)?,
            recorded_at,
        }))
    }
}
