//! Built-in demo story: "A Voice in the Dark".
//!
//! Two roles, four segments each. Segment 1 is reached by walking; segment
//! 2 or 3 by the branch choice made there. Audio assets are placeholder
//! tracks; production content is served by the story store.

use darkwalk_core::role::Role;
use darkwalk_geo::Heading;

use crate::catalog::StoryCatalog;
use crate::repository::StoryDocument;
use crate::types::{Choice, Segment, Trigger};

/// Story identifier of the built-in demo content.
pub const DEMO_STORY_ID: &str = "voice-in-the-dark";

fn segment(
    segment_id: u32,
    audio_ref: &str,
    trigger: Option<Trigger>,
    choices: Option<Vec<Choice>>,
) -> Segment {
    Segment {
        segment_id,
        audio_ref: audio_ref.to_owned(),
        trigger,
        choices,
    }
}

fn walk_trigger(min_distance_m: f64, heading: Heading) -> Trigger {
    Trigger {
        min_distance_m,
        heading: Some(heading),
        choice: None,
    }
}

fn choice_trigger(choice: &str) -> Trigger {
    Trigger {
        min_distance_m: 0.0,
        heading: None,
        choice: Some(choice.to_owned()),
    }
}

// The final murderer/investigator beats keep their authored walking
// metadata alongside the choice gate; satisfaction is gated on the choice
// alone, the distance and heading feed the hint display.
fn gated_walk_trigger(min_distance_m: f64, heading: Heading, choice: &str) -> Trigger {
    Trigger {
        min_distance_m,
        heading: Some(heading),
        choice: Some(choice.to_owned()),
    }
}

fn investigator_segments() -> Vec<Segment> {
    vec![
        segment(
            0,
            "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
            None,
            None,
        ),
        segment(
            1,
            "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
            Some(walk_trigger(100.0, Heading::North)),
            Some(vec![
                Choice {
                    id: "search".to_owned(),
                    label: "Search the alley".to_owned(),
                    next_segment: 2,
                },
                Choice {
                    id: "follow".to_owned(),
                    label: "Follow the suspect".to_owned(),
                    next_segment: 3,
                },
            ]),
        ),
        segment(
            2,
            "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3",
            Some(choice_trigger("search")),
            None,
        ),
        segment(
            3,
            "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-4.mp3",
            Some(gated_walk_trigger(200.0, Heading::North, "follow")),
            None,
        ),
    ]
}

fn murderer_segments() -> Vec<Segment> {
    vec![
        segment(
            0,
            "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-5.mp3",
            None,
            None,
        ),
        segment(
            1,
            "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-6.mp3",
            Some(walk_trigger(100.0, Heading::South)),
            Some(vec![
                Choice {
                    id: "hide".to_owned(),
                    label: "Hide in the warehouse".to_owned(),
                    next_segment: 2,
                },
                Choice {
                    id: "escape".to_owned(),
                    label: "Flee to the harbor".to_owned(),
                    next_segment: 3,
                },
            ]),
        ),
        segment(
            2,
            "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-7.mp3",
            Some(choice_trigger("hide")),
            None,
        ),
        segment(
            3,
            "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-8.mp3",
            Some(gated_walk_trigger(200.0, Heading::South, "escape")),
            None,
        ),
    ]
}

/// Returns the demo story as storable documents, one per role.
#[must_use]
pub fn demo_documents() -> Vec<StoryDocument> {
    vec![
        StoryDocument {
            story_id: DEMO_STORY_ID.to_owned(),
            title: "A Voice in the Dark".to_owned(),
            role: Role::Investigator,
            segments: investigator_segments(),
        },
        StoryDocument {
            story_id: DEMO_STORY_ID.to_owned(),
            title: "A Voice in the Dark".to_owned(),
            role: Role::Murderer,
            segments: murderer_segments(),
        },
    ]
}

/// Returns the demo story as a ready-to-use catalog.
///
/// # Panics
///
/// Never panics: the demo content satisfies the catalog invariants, which
/// the test below pins down.
#[must_use]
pub fn demo_catalog() -> StoryCatalog {
    StoryCatalog::from_documents(demo_documents())
        .expect("demo story content is validated by tests")
}
