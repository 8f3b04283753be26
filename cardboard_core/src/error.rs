use thiserror::Error;

/// Host-side failures around the arbiter (config loading, recorded input).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TriggerError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    Input(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("invalid trigger key: {0:?}")]
    InvalidKey(String),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
