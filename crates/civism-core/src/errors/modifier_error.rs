use crate::policy::Lever;

/// Modifier-table construction errors. Raised once when tables are built,
/// never while composing a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ModifierError {
    #[error("{lever} table has no neutral entry {neutral:?}")]
    MissingNeutral { lever: Lever, neutral: &'static str },

    #[error("{lever} table has unrecognised key {key:?}")]
    InvalidKey { lever: Lever, key: String },

    #[error("{lever} table entry {key:?} has a non-finite delta")]
    NonFiniteDelta { lever: Lever, key: String },
}
