//! Darkwalk Engine — the narrative trigger engine.
//!
//! Consumes raw position samples, derives displacement and heading from a
//! fixed session origin, evaluates the upcoming segment's advancement
//! trigger, and deterministically resolves branching transitions,
//! including player-made choices.

pub mod application;
pub mod domain;

pub use application::projection::{SessionView, project};
pub use domain::effects::Effect;
pub use domain::engine::TriggerEngine;
pub use domain::session::SessionState;
