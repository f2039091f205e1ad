//! Mutable session state.

use darkwalk_core::role::Role;
use darkwalk_geo::Coordinate;

/// The mutable core of a tracking session.
///
/// Owned exclusively by the [`TriggerEngine`](crate::TriggerEngine);
/// mutated only by role selection, position samples, and choice selection;
/// reset in full when the player changes role.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// The selected role, or `None` before the player picks one.
    pub role: Option<Role>,
    /// Reference point for all displacement math, fixed by the first
    /// sample after role selection and immutable for the session.
    pub origin: Option<Coordinate>,
    /// Index of the segment the player is currently on.
    pub segment_index: usize,
    /// The most recent branch choice, cleared on role change.
    pub last_choice: Option<String>,
    /// Most recent raw sample, retained for display only.
    pub last_position: Option<Coordinate>,
    /// Human-readable description of the last transition.
    pub status_message: Option<String>,
}

impl SessionState {
    /// Creates a blank session: no role, no origin, segment 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every field for a fresh run as `role`.
    pub(crate) fn reset_for(&mut self, role: Role) {
        *self = Self {
            role: Some(role),
            ..Self::default()
        };
    }
}
