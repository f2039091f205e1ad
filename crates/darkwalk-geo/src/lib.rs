//! Darkwalk Geo — geodesy primitives.
//!
//! Pure functions over geographic coordinates: great-circle distance,
//! initial bearing, and compass heading arcs. No state, no side effects.

pub mod coordinate;
pub mod displacement;
pub mod heading;

pub use coordinate::Coordinate;
pub use displacement::{Displacement, displacement};
pub use heading::Heading;
