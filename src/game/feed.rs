//! Narrative Feed
//!
//! Append-only log of everything that happened in a life. Entries are
//! never mutated or removed; their order is chronological by insertion.

use serde::{Deserialize, Serialize};

/// What kind of moment a feed entry records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    /// A life event was presented.
    Event,
    /// A year marker or other engine milestone.
    Action,
    /// The character was born.
    Birth,
    /// The character died.
    Death,
    /// The player resolved an event choice.
    Choice,
    /// A queued action was resolved and its effects applied.
    Consequence,
}

/// One record in the narrative feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Age of the character when the entry was appended.
    pub year: u32,
    /// Human-readable narration.
    pub text: String,
    /// Entry kind.
    pub kind: FeedKind,
}

impl FeedEntry {
    /// Create a new entry.
    pub fn new(year: u32, kind: FeedKind, text: impl Into<String>) -> Self {
        Self {
            year,
            text: text.into(),
            kind,
        }
    }

    /// Birth announcement.
    pub fn birth(name: &str) -> Self {
        Self::new(0, FeedKind::Birth, format!("{name} was born into the world!"))
    }

    /// Marker appended when a new year begins.
    pub fn year_marker(year: u32) -> Self {
        Self::new(year, FeedKind::Action, format!("Year {year} begins."))
    }

    /// Record of a resolved event choice.
    pub fn choice(year: u32, event_title: &str, choice_label: &str) -> Self {
        Self::new(
            year,
            FeedKind::Choice,
            format!("{event_title}: \"{choice_label}\""),
        )
    }

    /// Record of a resolved queued action and its applied deltas.
    pub fn consequence(year: u32, label: &str, reward: &str, cost: &str) -> Self {
        let text = match (reward.is_empty(), cost.is_empty()) {
            (false, false) => format!("{label}: {reward} | {cost}"),
            (false, true) => format!("{label}: {reward}"),
            (true, false) => format!("{label}: {cost}"),
            (true, true) => format!("{label}."),
        };
        Self::new(year, FeedKind::Consequence, text)
    }

    /// Death notice.
    pub fn death(year: u32, cause: &str) -> Self {
        Self::new(year, FeedKind::Death, format!("{cause}."))
    }
}

// =============================================================================
// TESTS
// =============================================================================
