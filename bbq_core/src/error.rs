//! Domain and build errors for the prediction engine.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildError {
    #[error("missing cut")]
    MissingCut,
    #[error("missing equipment")]
    MissingEquipment,
    #[error("missing target temperature")]
    MissingTarget,
    #[error("invalid session: {0}")]
    InvalidConfig(&'static str),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BbqError {
    #[error("build error: {0}")]
    Build(#[from] BuildError),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
