//! City explorer library.
//!
//! This library provides the city directory, the weather sampler, the simulated
//! per-city chat session and the explorer shell that wires them together.

// layers
pub mod domain;
pub mod infrastructure;
pub mod usecase;
