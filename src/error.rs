//! Internal error taxonomy.
//!
//! None of these reach the user. The controller logs them and carries on with
//! the collaborator that failed treated as a no-op.

/// Errors produced by theme collaborators and config loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// A stored or supplied theme identifier is not `light` or `dark`.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),

    /// The persistent key-value store could not be read or written.
    #[error("storage failed: {0}")]
    Storage(String),

    /// A document mutation or query failed.
    #[error("document operation failed: {0}")]
    Dom(String),

    /// The charting runtime rejected a color update.
    #[error("chart update failed: {0}")]
    Chart(String),

    /// A configuration value could not be parsed or is invalid.
    #[error("config invalid: {0}")]
    Config(String),
}
