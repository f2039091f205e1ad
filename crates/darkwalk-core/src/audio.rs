//! Audio sink abstraction.

use async_trait::async_trait;

/// External audio playback collaborator.
///
/// The sink guarantees any previously playing asset is stopped and released
/// before the new one starts. Playback failures are the sink's to log; they
/// are never surfaced to the engine, and a failed playback must not affect
/// narrative state.
#[async_trait]
pub trait AudioSink: Send + Sync {
    /// Plays the asset identified by `audio_ref` (typically a URL).
    async fn play(&self, audio_ref: &str);
}
