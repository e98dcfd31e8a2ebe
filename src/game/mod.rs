//! Simulation logic.
//!
//! Everything in this module is deterministic: all randomness flows
//! through the RNG cursor carried in the snapshot, and every transition
//! is a total function from one snapshot to the next.

pub mod catalog;
pub mod feed;
pub mod state;
pub mod stats;
pub(crate) mod year;

pub use feed::{FeedEntry, FeedKind};
pub use state::{reduce, LifeState, Screen, Transition};
pub use stats::{apply_effects, clamp_stat, EffectBundle, Stats};
