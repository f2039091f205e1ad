//! Shared test mocks and utilities for the Darkwalk engine.

mod audio;
mod clock;
mod progress;
mod story;

pub use audio::RecordingAudioSink;
pub use clock::FixedClock;
pub use progress::{FailingProgressRepository, InMemoryProgressRepository};
pub use story::InMemoryStoryRepository;
