//! Compass headings and their trigger arcs.

use serde::{Deserialize, Serialize};

/// Step, in degrees, used when projecting an illustrative hint marker from
/// the origin toward a heading. Matches the authored map-marker offset; it
/// is not a geodesic projection.
const HINT_STEP_DEG: f64 = 0.001;

/// A cardinal compass direction a trigger can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    /// Bearing arc [-45, 45].
    North,
    /// Bearing arc [45, 135].
    East,
    /// Bearing arc [135, 180] union [-180, -135].
    South,
    /// Bearing arc [-135, -45].
    West,
}

impl Heading {
    /// Returns true when `bearing_deg` (in (-180, 180]) falls within the
    /// closed +/-45 degree arc centred on this heading.
    ///
    /// Arcs are closed on both ends, so a bearing of exactly 45 degrees
    /// satisfies both North and East.
    #[must_use]
    pub fn arc_contains(self, bearing_deg: f64) -> bool {
        match self {
            Self::North => (-45.0..=45.0).contains(&bearing_deg),
            Self::East => (45.0..=135.0).contains(&bearing_deg),
            Self::West => (-135.0..=-45.0).contains(&bearing_deg),
            Self::South => bearing_deg >= 135.0 || bearing_deg <= -135.0,
        }
    }

    /// Returns an illustrative (delta latitude, delta longitude) step in
    /// degrees from an origin toward this heading, for placing hint
    /// markers on a map.
    #[must_use]
    pub fn hint_offset_deg(self) -> (f64, f64) {
        match self {
            Self::North => (HINT_STEP_DEG, 0.0),
            Self::South => (-HINT_STEP_DEG, 0.0),
            Self::East => (0.0, HINT_STEP_DEG),
            Self::West => (0.0, -HINT_STEP_DEG),
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_arc() {
        assert!(Heading::North.arc_contains(0.0));
        assert!(Heading::North.arc_contains(-45.0));
        assert!(Heading::North.arc_contains(45.0));
        assert!(!Heading::North.arc_contains(46.0));
        assert!(!Heading::North.arc_contains(-46.0));
    }

    #[test]
    fn test_south_arc_wraps_the_antimeridian_bearing() {
        assert!(Heading::South.arc_contains(180.0));
        assert!(Heading::South.arc_contains(135.0));
        assert!(Heading::South.arc_contains(-135.0));
        assert!(Heading::South.arc_contains(-170.0));
        assert!(!Heading::South.arc_contains(134.9));
        assert!(!Heading::South.arc_contains(-134.9));
    }

    #[test]
    fn test_east_and_west_arcs() {
        assert!(Heading::East.arc_contains(90.0));
        assert!(Heading::East.arc_contains(45.0));
        assert!(!Heading::East.arc_contains(136.0));
        assert!(Heading::West.arc_contains(-90.0));
        assert!(Heading::West.arc_contains(-135.0));
        assert!(!Heading::West.arc_contains(-44.0));
    }

    #[test]
    fn test_heading_serializes_lowercase() {
        let json = serde_json::to_string(&Heading::North).unwrap();
        assert_eq!(json, "\"north\"");
    }
}
