//! Routes for progress snapshots.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get, routing::post};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use darkwalk_core::error::DomainError;
use darkwalk_core::progress::ProgressRecord;
use darkwalk_core::role::Role;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /api/progress.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProgressRequest {
    /// Opaque player identifier.
    pub user_id: String,
    /// The role being tracked.
    pub role: Role,
    /// Segment index reached.
    pub story_segment: i64,
    /// The most recent branch choice, if any.
    #[serde(default)]
    pub selected_choice: Option<String>,
}

/// POST /api/progress
#[instrument(skip(state, request), fields(user_id = %request.user_id))]
async fn save_progress(
    State(state): State<AppState>,
    Json(request): Json<SaveProgressRequest>,
) -> Result<Json<ProgressRecord>, ApiError> {
    if request.user_id.trim().is_empty() {
        return Err(DomainError::Validation("userId must not be empty".to_owned()).into());
    }
    if request.story_segment < 0 {
        return Err(
            DomainError::Validation("storySegment must not be negative".to_owned()).into(),
        );
    }

    let record = ProgressRecord {
        user_id: request.user_id,
        role: request.role,
        story_segment: request.story_segment,
        selected_choice: request.selected_choice,
        recorded_at: state.clock.now(),
    };

    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, segment = record.story_segment, "saving progress snapshot");

    state.progress.save(&record).await?;
    Ok(Json(record))
}

/// GET /api/progress/{user_id}
#[instrument(skip(state))]
async fn latest_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProgressRecord>, ApiError> {
    let record = state
        .progress
        .latest_for_user(&user_id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("no progress for user {user_id}")))?;
    Ok(Json(record))
}

/// Returns the router for progress snapshots.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(save_progress))
        .route("/{user_id}", get(latest_progress))
}
