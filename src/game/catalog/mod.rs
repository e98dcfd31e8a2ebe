//! Content Tables
//!
//! Static, immutable catalogs of life events and yearly actions. Loaded
//! once into `static` data and never mutated at runtime; the simulation
//! references entries by id so a stale id in an old save degrades to a
//! skip instead of an error.
//!
//! The only logic here is the eligibility predicate — no randomness.

mod actions;
mod events;

pub use actions::ACTIONS;
pub use events::EVENTS;

use crate::game::stats::{EffectBundle, Stats};

/// Sparse per-stat thresholds, one optional bound per stat.
#[derive(Clone, Copy, Debug)]
pub struct PartialStats {
    /// Health bound.
    pub health: Option<i32>,
    /// Happiness bound.
    pub happiness: Option<i32>,
    /// Smarts bound.
    pub smarts: Option<i32>,
    /// Looks bound.
    pub looks: Option<i32>,
    /// Karma bound.
    pub karma: Option<i32>,
}

impl PartialStats {
    /// No bounds declared.
    pub const NONE: Self = Self {
        health: None,
        happiness: None,
        smarts: None,
        looks: None,
        karma: None,
    };

    fn pairs(&self, stats: &Stats) -> [(Option<i32>, i32); 5] {
        [
            (self.health, stats.health),
            (self.happiness, stats.happiness),
            (self.smarts, stats.smarts),
            (self.looks, stats.looks),
            (self.karma, stats.karma),
        ]
    }
}

/// Stat conditions gating an event.
///
/// Both bounds are inclusive: a stat exactly at a threshold keeps the
/// event eligible.
#[derive(Clone, Copy, Debug)]
pub struct EventConditions {
    /// Per-stat floors (`stat >= value` required).
    pub min: PartialStats,
    /// Per-stat ceilings (`stat <= value` required).
    pub max: PartialStats,
}

impl EventConditions {
    /// No conditions: eligibility is age-gated only.
    pub const NONE: Self = Self {
        min: PartialStats::NONE,
        max: PartialStats::NONE,
    };

    /// Whether a stat snapshot satisfies every declared bound.
    pub fn satisfied_by(&self, stats: &Stats) -> bool {
        self.min
            .pairs(stats)
            .iter()
            .all(|&(bound, value)| bound.is_none_or(|b| value >= b))
            && self
                .max
                .pairs(stats)
                .iter()
                .all(|&(bound, value)| bound.is_none_or(|b| value <= b))
    }
}

/// One selectable answer to a life event.
#[derive(Clone, Copy, Debug)]
pub struct ChoiceDef {
    /// Button label.
    pub label: &'static str,
    /// Deltas applied when this choice is taken.
    pub effects: EffectBundle,
    /// Event id presented immediately after this choice, bypassing the
    /// pending queue. Authored branching chains hang off this.
    pub follow_up: Option<&'static str>,
}

/// An age-gated, weighted life event.
#[derive(Clone, Copy, Debug)]
pub struct EventDef {
    /// Stable catalog id.
    pub id: &'static str,
    /// Display title, quoted in choice feed entries.
    pub title: &'static str,
    /// Narrative prompt shown to the player.
    pub description: &'static str,
    /// Youngest eligible age (inclusive).
    pub min_age: u32,
    /// Oldest eligible age (inclusive).
    pub max_age: u32,
    /// Relative selection weight within the eligible pool.
    pub weight: f64,
    /// Stat thresholds gating eligibility.
    pub conditions: EventConditions,
    /// Ordered choices.
    pub choices: &'static [ChoiceDef],
}

impl EventDef {
    /// Whether this event can fire at the given age and stat snapshot.
    pub fn eligible(&self, age: u32, stats: &Stats) -> bool {
        age >= self.min_age && age <= self.max_age && self.conditions.satisfied_by(stats)
    }
}

/// A player-queueable yearly action.
#[derive(Clone, Copy, Debug)]
pub struct ActionDef {
    /// Stable catalog id.
    pub id: &'static str,
    /// Display label, quoted in consequence feed entries.
    pub label: &'static str,
    /// Reward bundle, applied first.
    pub positive: EffectBundle,
    /// Cost bundle, applied second.
    pub negative: EffectBundle,
    /// Probability in [0, 1] that resolving this action spawns a bonus
    /// event from the eligible pool.
    pub event_chance: f64,
    /// How many times this action may be queued per year.
    pub max_uses_per_year: u32,
}

/// Look up an event by id.
pub fn event_by_id(id: &str) -> Option<&'static EventDef> {
    EVENTS.iter().find(|e| e.id == id)
}

/// Look up an action by id.
pub fn action_by_id(id: &str) -> Option<&'static ActionDef> {
    ACTIONS.iter().find(|a| a.id == id)
}

/// All events eligible at the given age and stat snapshot, in catalog
/// order.
pub fn eligible_events(age: u32, stats: &Stats) -> Vec<&'static EventDef> {
    EVENTS.iter().filter(|e| e.eligible(age, stats)).collect()
}

// =============================================================================
// TESTS
// =============================================================================
