//! Authored story content types.
//!
//! Field renames follow the wire shape used by the progress/story store:
//! `audioUrl`, `trigger: { distance, direction, choice }`, and
//! `choices: [{ id, text, nextSegment }]`.

use serde::{Deserialize, Serialize};

use darkwalk_geo::{Displacement, Heading};

/// The condition that must hold to advance into a segment.
///
/// A trigger is authored to match exactly one family:
///
/// - distance-only: `heading` and `choice` both absent;
/// - distance + heading: `heading` present, `choice` absent;
/// - choice-gated: `choice` present. Distance and heading on a
///   choice-gated trigger are authored metadata (hint display) and never
///   block the transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    /// Minimum displacement from the session origin, in metres.
    #[serde(rename = "distance")]
    pub min_distance_m: f64,
    /// Required compass heading, if any.
    #[serde(rename = "direction", default)]
    pub heading: Option<Heading>,
    /// Required prior branch choice, if any.
    #[serde(rename = "choice", default, skip_serializing_if = "Option::is_none")]
    pub choice: Option<String>,
}

impl Trigger {
    /// Evaluates this trigger against the player's displacement from the
    /// origin and their most recent branch choice.
    ///
    /// The choice gate takes precedence: when `choice` is authored, only
    /// the last selected choice matters.
    #[must_use]
    pub fn is_satisfied(&self, displacement: Displacement, last_choice: Option<&str>) -> bool {
        if let Some(required) = self.choice.as_deref() {
            return last_choice == Some(required);
        }
        if displacement.distance_m < self.min_distance_m {
            return false;
        }
        match self.heading {
            Some(heading) => heading.arc_contains(displacement.bearing_deg),
            None => true,
        }
    }
}

/// One branch option presented to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Identifier, unique within its segment's choice set.
    pub id: String,
    /// Human-readable button label.
    #[serde(rename = "text")]
    pub label: String,
    /// Index of the segment this choice jumps to.
    #[serde(rename = "nextSegment")]
    pub next_segment: usize,
}

/// One narrative beat: an audio asset plus the condition for reaching it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Position of this segment within its role's sequence.
    #[serde(rename = "segmentId")]
    pub segment_id: u32,
    /// Reference to the audio asset for this beat (typically a URL).
    #[serde(rename = "audioUrl")]
    pub audio_ref: String,
    /// Advancement condition. `None` only for the entry segment.
    pub trigger: Option<Trigger>,
    /// Branch options, or `None` when the segment offers no choice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
}

impl Segment {
    /// Looks up a choice on this segment by id.
    #[must_use]
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices
            .as_deref()
            .and_then(|choices| choices.iter().find(|c| c.id == choice_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use darkwalk_geo::Displacement;

    fn disp(distance_m: f64, bearing_deg: f64) -> Displacement {
        Displacement {
            distance_m,
            bearing_deg,
        }
    }

    #[test]
    fn test_distance_only_trigger() {
        let trigger = Trigger {
            min_distance_m: 50.0,
            heading: None,
            choice: None,
        };
        assert!(trigger.is_satisfied(disp(50.0, 90.0), None));
        assert!(trigger.is_satisfied(disp(120.0, -170.0), None));
        assert!(!trigger.is_satisfied(disp(49.9, 0.0), None));
    }

    #[test]
    fn test_heading_trigger_requires_both_distance_and_arc() {
        let trigger = Trigger {
            min_distance_m: 100.0,
            heading: Some(Heading::North),
            choice: None,
        };
        assert!(trigger.is_satisfied(disp(100.0, 0.0), None));
        assert!(trigger.is_satisfied(disp(150.0, -44.0), None));
        assert!(!trigger.is_satisfied(disp(99.0, 0.0), None));
        assert!(!trigger.is_satisfied(disp(150.0, 90.0), None));
    }

    #[test]
    fn test_choice_gate_ignores_distance_and_heading() {
        let trigger = Trigger {
            min_distance_m: 200.0,
            heading: Some(Heading::South),
            choice: Some("escape".to_owned()),
        };
        // Satisfied by the matching choice alone, even standing still.
        assert!(trigger.is_satisfied(disp(0.0, 0.0), Some("escape")));
        // Never satisfied by movement without the choice.
        assert!(!trigger.is_satisfied(disp(500.0, 180.0), None));
        assert!(!trigger.is_satisfied(disp(500.0, 180.0), Some("hide")));
    }

    #[test]
    fn test_trigger_wire_shape() {
        let json = r#"{ "distance": 100, "direction": "north" }"#;
        let trigger: Trigger = serde_json::from_str(json).unwrap();
        assert!((trigger.min_distance_m - 100.0).abs() < f64::EPSILON);
        assert_eq!(trigger.heading, Some(Heading::North));
        assert_eq!(trigger.choice, None);
    }

    #[test]
    fn test_segment_wire_shape() {
        let json = r#"{
            "segmentId": 1,
            "audioUrl": "https://cdn.example/seg-1.mp3",
            "trigger": { "distance": 100, "direction": "north" },
            "choices": [
                { "id": "search", "text": "Search the alley", "nextSegment": 2 }
            ]
        }"#;
        let segment: Segment = serde_json::from_str(json).unwrap();
        assert_eq!(segment.segment_id, 1);
        assert_eq!(segment.audio_ref, "https://cdn.example/seg-1.mp3");
        assert_eq!(segment.choice("search").unwrap().next_segment, 2);
        assert!(segment.choice("bogus").is_none());
    }
}
