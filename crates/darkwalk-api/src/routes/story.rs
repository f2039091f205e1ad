//! Routes for story content.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post};
use tracing::{info, instrument};

use darkwalk_core::error::DomainError;
use darkwalk_core::role::Role;
use darkwalk_story::{StoryCatalog, StoryDocument};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/story/{story_id}/{role}
#[instrument(skip(state))]
async fn fetch_story(
    State(state): State<AppState>,
    Path((story_id, role)): Path<(String, String)>,
) -> Result<Json<StoryDocument>, ApiError> {
    let role: Role = role.parse()?;
    let document = state
        .stories
        .fetch(&story_id, role)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("no story {story_id} for role {role}")))?;
    Ok(Json(document))
}

/// POST /api/story
///
/// Rejects documents that violate the catalog's authoring invariants so
/// broken content never reaches players.
#[instrument(skip(state, document), fields(story_id = %document.story_id, role = %document.role))]
async fn create_story(
    State(state): State<AppState>,
    Json(document): Json<StoryDocument>,
) -> Result<(StatusCode, Json<StoryDocument>), ApiError> {
    StoryCatalog::from_documents([document.clone()])?;

    info!("storing story content");
    state.stories.insert(&document).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// Returns the router for story content.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_story))
        .route("/{story_id}/{role}", get(fetch_story))
}
