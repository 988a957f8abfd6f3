//! `RandomSource` implementations.
//!
//! - `std_rng`: `rand`'s `StdRng`, seeded from the OS or from a fixed seed
//! - `scripted`: replays fixed outcomes for deterministic tests

pub mod scripted;
pub mod std_rng;

pub use scripted::ScriptedRandomSource;
pub use std_rng::{EntropyRandomProvider, SeededRandomProvider, StdRandomSource};
