//! # Lifetide Engine
//!
//! Deterministic life-simulation engine: given a seed, queued yearly
//! actions, and random life events, it advances a character's life year
//! by year until death — and given the same seed and the same inputs, it
//! does so identically every time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      LIFETIDE ENGINE                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── rng.rs      - Counter-based 32-bit mixing PRNG          │
//! │  └── hash.rs     - Snapshot fingerprints (SHA-256)           │
//! │                                                              │
//! │  game/           - Simulation logic (deterministic)          │
//! │  ├── stats.rs    - Bounded stats and the effect engine       │
//! │  ├── feed.rs     - Append-only narrative feed                │
//! │  ├── catalog/    - Static event and action tables            │
//! │  ├── state.rs    - Life snapshot and transition entry points │
//! │  └── year.rs     - The yearly progression step               │
//! │                                                              │
//! │  persistence.rs  - Save slots (non-deterministic: clock, fs) │
//! │  advice.rs       - Advisor-prompt formatter                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The `core/` and `game/` modules are **100% deterministic**:
//! - All randomness flows through the RNG cursor in the snapshot
//! - `BTreeMap` wherever iteration order can reach the RNG
//! - No system time dependencies; the clock only stamps save slots
//! - Every transition is a total function snapshot -> snapshot
//!
//! Given the same seed and transition sequence, two runs produce
//! byte-identical feeds and equal snapshot fingerprints on any platform.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod advice;
pub mod core;
pub mod game;
pub mod persistence;

// Re-export commonly used types
pub use crate::core::hash::StateHash;
pub use crate::core::rng::{hash_seed, LifeRng};
pub use crate::game::catalog::{ActionDef, ChoiceDef, EventDef, ACTIONS, EVENTS};
pub use crate::game::feed::{FeedEntry, FeedKind};
pub use crate::game::state::{reduce, LifeState, Screen, Transition};
pub use crate::game::stats::{apply_effects, EffectBundle, Stats, STAT_MAX, STAT_MIN};
pub use crate::persistence::{SaveStore, SAVE_SLOTS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// CROSS-MODULE PROPERTY TESTS
// =============================================================================
