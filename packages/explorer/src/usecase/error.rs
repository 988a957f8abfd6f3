//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::CityId;

/// Invalid simulation settings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tick period must be greater than zero")]
    ZeroTickPeriod,

    #[error("chatter probability must be within [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),
}

/// Explorer shell errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    #[error("city directory is empty")]
    EmptyDirectory,

    #[error("city {0} is not in the directory")]
    CityNotFound(CityId),

    #[error("no city matches '{0}'")]
    NoMatchingCity(String),
}
