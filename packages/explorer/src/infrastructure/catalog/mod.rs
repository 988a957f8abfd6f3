//! City catalogs.
//!
//! - `static_cities`: the built-in, process-wide list

pub mod static_cities;

pub use static_cities::{CITIES, static_cities};
