//! Core deterministic primitives.
//!
//! All types in this module are designed for perfect cross-platform
//! determinism. They form the foundation the simulation's replay and
//! save/load guarantees rest on.

pub mod hash;
pub mod rng;

// Re-export core types
pub use hash::{hash_with_domain, StateHash, StateHasher};
pub use rng::{hash_seed, LifeRng};
