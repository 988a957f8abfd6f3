//! Infrastructure layer: concrete data and random sources behind the domain seams.

pub mod catalog;
pub mod random;
