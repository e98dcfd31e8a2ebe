//! Life State and Transitions
//!
//! The character snapshot threaded through the whole simulation, plus
//! every transition entry point a driving caller (CLI, UI, test harness)
//! may invoke. Transitions are total functions old-state -> new-state:
//! invalid arguments degrade to no-ops, never errors. Events and actions
//! are referenced by catalog id so a stale id in an old save is skipped
//! instead of crashing the engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::hash::{hash_with_domain, StateHash, STATE_DOMAIN};
use crate::core::rng::LifeRng;
use crate::game::catalog::{action_by_id, event_by_id};
use crate::game::feed::FeedEntry;
use crate::game::stats::{apply_effects, clamp_stat, Stats};
use crate::game::year;

/// Cause of death recorded when health reaches zero.
pub const CAUSE_HEALTH: &str = "Health deterioration";

/// Cause of death recorded when the old-age mortality roll succeeds.
pub const CAUSE_OLD_AGE: &str = "Passed away peacefully of old age";

// =============================================================================
// SCREEN
// =============================================================================

/// Which phase of a life the game is in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// No life started yet.
    #[default]
    Start,
    /// A life is in progress.
    Playing,
    /// The life has ended; only reset or load may follow.
    Death,
}

// =============================================================================
// LIFE STATE
// =============================================================================

/// Complete snapshot of one life.
///
/// Every transition replaces the whole value rather than mutating shared
/// state, which is what makes save/load and replay exact. The usage map
/// is a `BTreeMap` so serialization and iteration order are
/// deterministic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LifeState {
    /// Current phase.
    pub screen: Screen,

    /// Character name.
    pub name: String,

    /// Age in years.
    pub age: u32,

    /// The five bounded statistics.
    pub stats: Stats,

    /// Cash balance; negative means debt.
    pub cash: i64,

    /// The seed text the life was started from.
    pub seed: String,

    /// RNG cursor; resuming from a saved snapshot continues the exact
    /// draw sequence.
    pub rng: LifeRng,

    /// Append-only narrative feed.
    pub feed: Vec<FeedEntry>,

    /// Event ids waiting behind the current one (FIFO).
    pub pending_events: Vec<String>,

    /// Event id currently awaiting a choice, if any.
    pub current_event: Option<String>,

    /// Why the life ended, once it has.
    pub cause_of_death: Option<String>,

    /// Action ids queued for this year, in queue order.
    pub pending_actions: Vec<String>,

    /// Per-action usage counters for this year.
    pub action_usage: BTreeMap<String, u32>,
}

impl Default for LifeState {
    fn default() -> Self {
        Self {
            screen: Screen::Start,
            name: String::new(),
            age: 0,
            stats: Stats::RESET,
            cash: 0,
            seed: String::new(),
            rng: LifeRng::from_state(0),
            feed: Vec::new(),
            pending_events: Vec::new(),
            current_event: None,
            cause_of_death: None,
            pending_actions: Vec::new(),
            action_usage: BTreeMap::new(),
        }
    }
}

impl LifeState {
    // =========================================================================
    // Transitions
    // =========================================================================

    /// Begin a new life.
    ///
    /// Derives the RNG cursor from the seed (or from the name when the
    /// seed is empty), rolls the five base stats with one perturbation
    /// draw each in declaration order, and opens the feed with a birth
    /// entry.
    pub fn start(name: &str, seed: &str) -> Self {
        let effective = if seed.is_empty() { name } else { seed };
        let mut rng = LifeRng::from_seed(effective);
        let health = clamp_stat(70 + rng.rand_int(-10, 10));
        let happiness = clamp_stat(65 + rng.rand_int(-10, 10));
        let smarts = clamp_stat(50 + rng.rand_int(-10, 10));
        let looks = clamp_stat(55 + rng.rand_int(-10, 10));
        let karma = clamp_stat(60 + rng.rand_int(-10, 10));

        Self {
            screen: Screen::Playing,
            name: name.to_string(),
            age: 0,
            stats: Stats {
                health,
                happiness,
                smarts,
                looks,
                karma,
            },
            cash: 0,
            seed: seed.to_string(),
            rng,
            feed: vec![FeedEntry::birth(name)],
            ..Self::default()
        }
    }

    /// Queue an action for this year.
    ///
    /// No-op when the id is unknown, the action is already at its yearly
    /// usage cap, or no life is in progress.
    pub fn queue_action(mut self, action_id: &str) -> Self {
        if self.screen != Screen::Playing {
            return self;
        }
        let Some(action) = action_by_id(action_id) else {
            return self;
        };
        let uses = self.action_usage.get(action.id).copied().unwrap_or(0);
        if uses >= action.max_uses_per_year {
            return self;
        }
        self.pending_actions.push(action.id.to_string());
        self.action_usage.insert(action.id.to_string(), uses + 1);
        self
    }

    /// Remove the queued action at the given queue position and release
    /// its usage slot. Out-of-range positions are no-ops.
    pub fn unqueue_action(mut self, index: usize) -> Self {
        if index >= self.pending_actions.len() {
            return self;
        }
        let removed = self.pending_actions.remove(index);
        let uses = self.action_usage.get(&removed).copied().unwrap_or(0);
        self.action_usage.insert(removed, uses.saturating_sub(1));
        self
    }

    /// Resolve the current event with the choice at `choice_index`.
    ///
    /// Applies the choice's effects and records it in the feed. A
    /// follow-up id on the choice becomes the current event immediately,
    /// bypassing both the pending queue and the health check — that
    /// asymmetry is load-bearing for replay compatibility. Otherwise a
    /// health of 0 ends the life, and the next pending event (if any)
    /// comes up.
    pub fn resolve_choice(mut self, choice_index: usize) -> Self {
        if self.screen != Screen::Playing {
            return self;
        }
        let Some(current_id) = self.current_event.clone() else {
            return self;
        };
        let Some(event) = event_by_id(&current_id) else {
            // Stale id from an older catalog: skip it.
            self.advance_event_queue();
            return self;
        };
        let Some(choice) = event.choices.get(choice_index) else {
            return self;
        };

        let (stats, cash) = apply_effects(self.stats, self.cash, &choice.effects);
        self.stats = stats;
        self.cash = cash;
        self.feed
            .push(FeedEntry::choice(self.age, event.title, choice.label));

        if let Some(follow_up) = choice.follow_up {
            if event_by_id(follow_up).is_some() {
                self.current_event = Some(follow_up.to_string());
                return self;
            }
        }

        if self.stats.health <= 0 {
            return self.die(CAUSE_HEALTH);
        }

        self.advance_event_queue();
        self
    }

    /// Advance past the current event without taking a choice.
    pub fn dismiss_event(mut self) -> Self {
        self.advance_event_queue();
        self
    }

    /// Advance the life by one year. The `year` module documents the
    /// step order; refuses to run while an event is on screen or queued.
    pub fn age_up(self) -> Self {
        year::advance(self)
    }

    /// Restore the pre-game state.
    pub fn reset() -> Self {
        Self::default()
    }

    // =========================================================================
    // Internals shared with the year step
    // =========================================================================

    /// Pop the next pending event (FIFO) into the current slot.
    pub(crate) fn advance_event_queue(&mut self) {
        self.current_event = if self.pending_events.is_empty() {
            None
        } else {
            Some(self.pending_events.remove(0))
        };
    }

    /// End the life: death feed entry, screen change, and a full flush of
    /// pending events and queued actions.
    pub(crate) fn die(mut self, cause: &str) -> Self {
        self.feed.push(FeedEntry::death(self.age, cause));
        self.screen = Screen::Death;
        self.cause_of_death = Some(cause.to_string());
        self.current_event = None;
        self.pending_events.clear();
        self.pending_actions.clear();
        self.action_usage.clear();
        self
    }

    // =========================================================================
    // Verification
    // =========================================================================

    /// Deterministic fingerprint of the whole snapshot.
    ///
    /// Two runs of the same seed and transition sequence must produce
    /// equal fingerprints; replay verification and the save round-trip
    /// tests rest on this.
    pub fn fingerprint(&self) -> StateHash {
        let bytes = bincode::serialize(self).unwrap_or_default();
        hash_with_domain(STATE_DOMAIN, &bytes)
    }
}

// =============================================================================
// TRANSITION DISPATCH
// =============================================================================

/// One transition request from a driving caller.
#[derive(Clone, Debug)]
pub enum Transition {
    /// Begin a new life.
    Start {
        /// Character name.
        name: String,
        /// Seed text; empty falls back to the name.
        seed: String,
    },
    /// Queue an action for this year.
    QueueAction {
        /// Catalog id of the action.
        action_id: String,
    },
    /// Remove a queued action by queue position.
    UnqueueAction {
        /// Queue position.
        index: usize,
    },
    /// Resolve the current event.
    ResolveChoice {
        /// Index into the event's choice list.
        choice_index: usize,
    },
    /// Advance past the current event without choosing.
    DismissEvent,
    /// Advance the life by one year.
    AgeUp,
    /// Replace the state wholesale with a loaded snapshot.
    Load(Box<LifeState>),
    /// Restore the pre-game state.
    Reset,
}

/// Apply one transition to a snapshot, producing the next snapshot.
///
/// Total: every input yields a well-defined next state.
pub fn reduce(state: LifeState, transition: Transition) -> LifeState {
    match transition {
        Transition::Start { name, seed } => LifeState::start(&name, &seed),
        Transition::QueueAction { action_id } => state.queue_action(&action_id),
        Transition::UnqueueAction { index } => state.unqueue_action(index),
        Transition::ResolveChoice { choice_index } => state.resolve_choice(choice_index),
        Transition::DismissEvent => state.dismiss_event(),
        Transition::AgeUp => state.age_up(),
        Transition::Load(snapshot) => *snapshot,
        Transition::Reset => LifeState::reset(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
