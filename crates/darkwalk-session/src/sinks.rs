//! Local collaborator sinks.

use async_trait::async_trait;
use tracing::info;

use darkwalk_core::audio::AudioSink;

/// An audio sink that logs playback instructions.
///
/// Actual decoding and output belong to the hosting platform; this sink
/// keeps the narrative observable when running headless (development,
/// integration environments).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAudioSink;

#[async_trait]
impl AudioSink for TracingAudioSink {
    async fn play(&self, audio_ref: &str) {
        info!(audio_ref, "playing segment audio");
    }
}
