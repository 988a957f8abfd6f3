//! Utilities shared between the explorer library and the terminal front end.

pub mod logger;
pub mod time;
