//! Side-effect instructions emitted by the engine.

use darkwalk_core::role::Role;
use darkwalk_story::Choice;

/// An instruction for a collaborator, emitted by an engine transition.
///
/// Effects are the engine's only output channel: each handler mutates the
/// session and returns the instructions the runtime should dispatch.
/// Dispatch is fire-and-forget; a failed effect never rolls back the
/// transition that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start playback of a segment's audio asset.
    PlayAudio {
        /// Reference to the asset (typically a URL).
        audio_ref: String,
    },
    /// Replace the choice buttons shown to the player. Empty when the new
    /// segment offers no branch.
    PresentChoices {
        /// The new segment's choices, in authored order.
        choices: Vec<Choice>,
    },
    /// Snapshot the player's narrative position to the progress store.
    PersistProgress {
        /// The role being tracked.
        role: Role,
        /// The segment index reached.
        segment_index: usize,
        /// The most recent branch choice, if any.
        selected_choice: Option<String>,
    },
    /// Surface a human-readable transition description.
    Status {
        /// The message text.
        message: String,
    },
}
