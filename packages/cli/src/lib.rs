//! Interactive terminal front end for the city explorer.
//!
//! Reads one command per line, drives an `ExplorerShell` and prints chat
//! messages as they arrive.

mod command;
mod error;
mod formatter;
mod runner;
mod ui;

pub use command::{CitySelector, Command, CommandError, ZoomDirection};
pub use error::CliError;
pub use runner::{RunOptions, run_explorer};
