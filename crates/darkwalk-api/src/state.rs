//! Shared application state.

use std::sync::Arc;

use darkwalk_core::clock::Clock;
use darkwalk_core::progress::ProgressRepository;
use darkwalk_story::StoryRepository;

/// Application state shared across all request handlers.
///
/// Repositories are injected as trait objects so integration tests can run
/// against in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    /// Progress snapshot store.
    pub progress: Arc<dyn ProgressRepository>,
    /// Story content store.
    pub stories: Arc<dyn StoryRepository>,
    /// Time source for stamping saved snapshots.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        progress: Arc<dyn ProgressRepository>,
        stories: Arc<dyn StoryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            progress,
            stories,
            clock,
        }
    }
}
