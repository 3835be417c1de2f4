//! Error taxonomy.
//!
//! Simulation itself is total: compose, project and explain never fail.
//! Errors come from the validation boundary (unknown lever values) and from
//! configuration (malformed TOML, incomplete modifier tables).

pub mod modifier_error;

pub use modifier_error::ModifierError;

use crate::policy::Lever;

/// Top-level error type for the simulator.
#[derive(Debug, thiserror::Error)]
pub enum CivismError {
    #[error("unknown {lever} value: {value:?}")]
    UnknownLeverValue { lever: Lever, value: String },

    #[error("modifier table error: {0}")]
    ModifierError(#[from] ModifierError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type CivismResult<T> = Result<T, CivismError>;

impl From<toml::de::Error> for CivismError {
    fn from(err: toml::de::Error) -> Self {
        CivismError::ConfigError(err.to_string())
    }
}
