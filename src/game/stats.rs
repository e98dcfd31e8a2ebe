//! Stats and Effect Engine
//!
//! The five bounded character statistics and the arithmetic that applies
//! effect bundles to them. Every stat mutation in the engine goes through
//! [`clamp_stat`], so stats can never leave [0, 100]. Cash is unbounded
//! and may go negative.

use serde::{Deserialize, Serialize};

/// Lower bound of every stat.
pub const STAT_MIN: i32 = 0;

/// Upper bound of every stat.
pub const STAT_MAX: i32 = 100;

/// Clamp a stat value into the valid range after a mutation.
#[inline]
pub fn clamp_stat(value: i32) -> i32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

/// The five bounded character statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Physical condition. Reaching 0 is fatal.
    pub health: i32,
    /// General contentment.
    pub happiness: i32,
    /// Intelligence and education.
    pub smarts: i32,
    /// Appearance.
    pub looks: i32,
    /// Moral standing.
    pub karma: i32,
}

impl Stats {
    /// Stats of a freshly reset game (before any life is started).
    pub const RESET: Self = Self {
        health: 100,
        happiness: 100,
        smarts: 50,
        looks: 50,
        karma: 50,
    };
}

impl Default for Stats {
    fn default() -> Self {
        Self::RESET
    }
}

/// A bundle of per-stat deltas plus a cash delta.
///
/// Fixed-shape and sparse: every field defaults to 0, so catalog entries
/// only spell out the deltas they carry. Const-constructible so the
/// content tables can live in `static` data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectBundle {
    /// Health delta.
    #[serde(default)]
    pub health: i32,
    /// Happiness delta.
    #[serde(default)]
    pub happiness: i32,
    /// Smarts delta.
    #[serde(default)]
    pub smarts: i32,
    /// Looks delta.
    #[serde(default)]
    pub looks: i32,
    /// Karma delta.
    #[serde(default)]
    pub karma: i32,
    /// Cash delta (unclamped).
    #[serde(default)]
    pub cash: i64,
}

impl EffectBundle {
    /// The empty bundle: applying it changes nothing.
    pub const NONE: Self = Self {
        health: 0,
        happiness: 0,
        smarts: 0,
        looks: 0,
        karma: 0,
        cash: 0,
    };

    /// Set the health delta (const builder for catalog data).
    pub const fn with_health(mut self, delta: i32) -> Self {
        self.health = delta;
        self
    }

    /// Set the happiness delta.
    pub const fn with_happiness(mut self, delta: i32) -> Self {
        self.happiness = delta;
        self
    }

    /// Set the smarts delta.
    pub const fn with_smarts(mut self, delta: i32) -> Self {
        self.smarts = delta;
        self
    }

    /// Set the looks delta.
    pub const fn with_looks(mut self, delta: i32) -> Self {
        self.looks = delta;
        self
    }

    /// Set the karma delta.
    pub const fn with_karma(mut self, delta: i32) -> Self {
        self.karma = delta;
        self
    }

    /// Set the cash delta.
    pub const fn with_cash(mut self, delta: i64) -> Self {
        self.cash = delta;
        self
    }

    /// Whether every delta is zero.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Render the non-zero deltas for the narrative feed.
    ///
    /// Declaration order, signed values: `"happiness +10, karma -5"`.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        for (label, delta) in [
            ("health", self.health),
            ("happiness", self.happiness),
            ("smarts", self.smarts),
            ("looks", self.looks),
            ("karma", self.karma),
        ] {
            if delta != 0 {
                parts.push(format!("{label} {delta:+}"));
            }
        }
        if self.cash != 0 {
            parts.push(format!("cash {:+}", self.cash));
        }
        parts.join(", ")
    }
}

/// Apply an effect bundle to a stat snapshot and cash balance.
///
/// Each stat delta is added and clamped; cash is added unclamped.
/// Side-effect-free. When an action carries two bundles the caller must
/// apply the positive bundle first, then the negative one — sequential
/// clamping is not equivalent to summing the deltas and clamping once.
pub fn apply_effects(stats: Stats, cash: i64, effects: &EffectBundle) -> (Stats, i64) {
    (
        Stats {
            health: clamp_stat(stats.health + effects.health),
            happiness: clamp_stat(stats.happiness + effects.happiness),
            smarts: clamp_stat(stats.smarts + effects.smarts),
            looks: clamp_stat(stats.looks + effects.looks),
            karma: clamp_stat(stats.karma + effects.karma),
        },
        cash + effects.cash,
    )
}

// =============================================================================
// TESTS
// =============================================================================
