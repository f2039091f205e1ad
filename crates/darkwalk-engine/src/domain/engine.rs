//! The trigger engine state machine.

use std::sync::Arc;

use tracing::{debug, warn};

use darkwalk_core::error::DomainError;
use darkwalk_core::role::Role;
use darkwalk_geo::{Coordinate, displacement};
use darkwalk_story::{StoryCatalog, Trigger};

use super::effects::Effect;
use super::session::SessionState;

/// Drives a single player's narrative session.
///
/// States: no role -> role selected (origin pending) -> tracking segment
/// `i` -> ... -> tracking the terminal segment. The only way back to "no
/// role" is an explicit role change, which resets the session in full.
///
/// The engine owns its [`SessionState`] exclusively and shares the story
/// catalog read-only. Every handler runs to completion and returns the
/// side-effect instructions the transition produced.
#[derive(Debug)]
pub struct TriggerEngine {
    catalog: Arc<StoryCatalog>,
    state: SessionState,
}

impl TriggerEngine {
    /// Creates an engine with a blank session over the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<StoryCatalog>) -> Self {
        Self {
            catalog,
            state: SessionState::new(),
        }
    }

    /// Read-only view of the session state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The catalog this engine reads.
    #[must_use]
    pub fn catalog(&self) -> &StoryCatalog {
        &self.catalog
    }

    /// Selects (or changes) the player's role.
    ///
    /// Resets the session in full — origin, segment index, last choice and
    /// status are all cleared — and emits playback/choice instructions for
    /// the role's entry segment.
    pub fn select_role(&mut self, role: Role) -> Vec<Effect> {
        self.state.reset_for(role);
        debug!(%role, "role selected, session reset");

        let catalog = Arc::clone(&self.catalog);
        match catalog.segment(role, 0) {
            Ok(entry) => vec![
                Effect::PlayAudio {
                    audio_ref: entry.audio_ref.clone(),
                },
                Effect::PresentChoices {
                    choices: entry.choices.clone().unwrap_or_default(),
                },
            ],
            Err(err) => {
                warn!(%role, %err, "no entry segment for selected role");
                Vec::new()
            }
        }
    }

    /// Feeds one raw position sample into the session.
    ///
    /// The first valid sample after role selection fixes the origin and is
    /// never evaluated as a displacement. Later samples are compared
    /// against the *next* segment's trigger; a satisfied trigger advances
    /// the session exactly once (edge-triggered — after the advance the
    /// comparison target has moved, so the same condition cannot re-fire
    /// for the same segment pair).
    ///
    /// Malformed samples and samples arriving before role selection are
    /// dropped without error.
    pub fn observe_position(&mut self, sample: Coordinate) -> Vec<Effect> {
        if !sample.is_valid() {
            warn!(%sample, "dropping malformed position sample");
            return Vec::new();
        }
        let Some(role) = self.state.role else {
            debug!("dropping position sample before role selection");
            return Vec::new();
        };

        self.state.last_position = Some(sample);

        let Some(origin) = self.state.origin else {
            self.state.origin = Some(sample);
            debug!(%sample, "session origin fixed");
            return Vec::new();
        };

        let moved = displacement(origin, sample);
        let next_index = self.state.segment_index + 1;

        let catalog = Arc::clone(&self.catalog);
        let Ok(next) = catalog.segment(role, next_index) else {
            // Past the last authored segment: the story is complete.
            return Vec::new();
        };
        let Some(trigger) = &next.trigger else {
            warn!(next_index, "segment past the entry is missing a trigger");
            return Vec::new();
        };

        if !trigger.is_satisfied(moved, self.state.last_choice.as_deref()) {
            return Vec::new();
        }

        debug!(
            distance_m = moved.distance_m,
            bearing_deg = moved.bearing_deg,
            next_index,
            "trigger satisfied"
        );
        let message = advance_message(trigger);
        self.enter_segment(role, next_index, message)
    }

    /// Applies a player's branch choice.
    ///
    /// The choice must exist on the *current* segment. A valid choice is
    /// recorded and jumps unconditionally to its authored target segment —
    /// the target's own trigger is not re-evaluated.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidChoice` for an unknown id or a segment
    /// without choices; the session is left untouched so the caller can
    /// treat a stray tap as a no-op.
    pub fn select_choice(&mut self, choice_id: &str) -> Result<Vec<Effect>, DomainError> {
        let Some(role) = self.state.role else {
            return Err(DomainError::InvalidChoice(choice_id.to_owned()));
        };

        let catalog = Arc::clone(&self.catalog);
        let current = catalog.segment(role, self.state.segment_index)?;
        let choice = current
            .choice(choice_id)
            .ok_or_else(|| DomainError::InvalidChoice(choice_id.to_owned()))?
            .clone();

        self.state.last_choice = Some(choice.id.clone());
        let message = format!("You chose: {}", choice.label);
        Ok(self.enter_segment(role, choice.next_segment, message))
    }

    /// Moves the session onto `index` and emits the full advance effect
    /// family. Failure to dispatch any of these must not roll the index
    /// back; the narrative transition is the source of truth.
    fn enter_segment(&mut self, role: Role, index: usize, message: String) -> Vec<Effect> {
        let catalog = Arc::clone(&self.catalog);
        let Ok(segment) = catalog.segment(role, index) else {
            warn!(index, "advance target segment not in catalog");
            return Vec::new();
        };

        self.state.segment_index = index;
        self.state.status_message = Some(message.clone());

        vec![
            Effect::PlayAudio {
                audio_ref: segment.audio_ref.clone(),
            },
            Effect::PresentChoices {
                choices: segment.choices.clone().unwrap_or_default(),
            },
            Effect::PersistProgress {
                role,
                segment_index: index,
                selected_choice: self.state.last_choice.clone(),
            },
            Effect::Status { message },
        ]
    }
}

/// Builds the status message for a position-driven advance. A satisfied
/// choice gate implies the player's last choice equals the authored one.
fn advance_message(trigger: &Trigger) -> String {
    if let Some(choice) = trigger.choice.as_deref() {
        return format!("You chose {choice}!");
    }
    match trigger.heading {
        Some(heading) => format!("You reached {:.0} m {heading}!", trigger.min_distance_m),
        None => format!("You walked {:.0} m!", trigger.min_distance_m),
    }
}
