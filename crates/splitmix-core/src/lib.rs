//! Deterministic SplitMix64 generator and the game-facing draws built on it.
//!
//! A generator is a single `u64` of state. Seeding the same value and issuing the same calls
//! always yields the same results, which is what replays and saved games rely on. Nothing here is
//! cryptographic.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod choice;
pub mod dice;
pub mod error;
pub mod rng;
pub mod shared;
pub mod state;

pub use dice::{DiceRoll, DiceType};
pub use error::{Result, RngError};
pub use rng::{derive_seed, mix64, DeterministicRng, SplitMix64};
pub use shared::SharedRng;
pub use state::parse_state;
