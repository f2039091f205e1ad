//! Session projector: derives the externally-observable view.

use serde::Serialize;

use darkwalk_core::role::Role;
use darkwalk_geo::Coordinate;
use darkwalk_story::Choice;

use crate::domain::engine::TriggerEngine;

/// Everything presentation and audio collaborators may observe about a
/// session. A pure derivation of engine state; holding one never grants
/// access to the state itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// The selected role, if any.
    pub role: Option<Role>,
    /// Index of the current segment.
    pub segment_index: usize,
    /// Audio asset of the current segment, absent before role selection.
    pub current_audio_ref: Option<String>,
    /// Branch choices currently open to the player.
    pub available_choices: Vec<Choice>,
    /// Human-readable description of the last transition.
    pub status_message: Option<String>,
    /// The session origin, once fixed.
    pub origin: Option<Coordinate>,
    /// Most recent raw position sample.
    pub last_position: Option<Coordinate>,
    /// Approximate marker position for the next walking objective, offset
    /// from the origin toward the required heading. Illustrative only —
    /// absent for choice-gated and terminal segments.
    pub next_clue_hint: Option<Coordinate>,
}

/// Projects the engine's current state into a [`SessionView`].
#[must_use]
pub fn project(engine: &TriggerEngine) -> SessionView {
    let state = engine.state();
    let catalog = engine.catalog();

    let current = state
        .role
        .and_then(|role| catalog.segment(role, state.segment_index).ok());

    let next_clue_hint = state.role.zip(state.origin).and_then(|(role, origin)| {
        let next = catalog.segment(role, state.segment_index + 1).ok()?;
        let trigger = next.trigger.as_ref()?;
        if trigger.choice.is_some() {
            return None;
        }
        let (d_lat, d_lon) = trigger.heading?.hint_offset_deg();
        Some(Coordinate::new(
            origin.latitude + d_lat,
            origin.longitude + d_lon,
        ))
    });

    SessionView {
        role: state.role,
        segment_index: state.segment_index,
        current_audio_ref: current.map(|segment| segment.audio_ref.clone()),
        available_choices: current
            .and_then(|segment| segment.choices.clone())
            .unwrap_or_default(),
        status_message: state.status_message.clone(),
        origin: state.origin,
        last_position: state.last_position,
        next_clue_hint,
    }
}
