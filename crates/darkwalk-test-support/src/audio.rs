//! Test audio sink — records every playback instruction.

use std::sync::Mutex;

use async_trait::async_trait;
use darkwalk_core::audio::AudioSink;

/// An audio sink that records the asset references it was asked to play,
/// in order.
#[derive(Debug, Default)]
pub struct RecordingAudioSink {
    played: Mutex<Vec<String>>,
}

impl RecordingAudioSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all played asset references.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn played(&self) -> Vec<String> {
        self.played.lock().unwrap().clone()
    }
}

#[async_trait]
impl AudioSink for RecordingAudioSink {
    async fn play(&self, audio_ref: &str) {
        self.played.lock().unwrap().push(audio_ref.to_owned());
    }
}
