//! Typed engine errors with exit-code classification.
//!
//! Catalog problems are fatal for the process (exit 2), per-request input
//! problems are validation errors (exit 1), and anything else is internal
//! (exit 3). Entry-level catalog issues are warnings, not errors; they live
//! in [`crate::catalog::LoadReport`] instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Catalog document failed schema validation or lost every entry.
    #[error("catalog invalid: {0}")]
    CatalogInvalid(String),

    /// Catalog version predates the supported range.
    #[error("catalog version {found} unsupported (minimum {minimum})")]
    CatalogVersionUnsupported { found: String, minimum: String },

    /// Two catalog entries share an architecture_id.
    #[error("duplicate architecture_id in catalog: {0}")]
    CatalogDuplicateId(String),

    /// Required context field missing or unreadable.
    #[error("context invalid: {0}")]
    ContextInvalid(String),

    /// Unknown question id or answer value. Answers apply atomically, so one
    /// bad answer rejects the whole run.
    #[error("answer invalid: {0}")]
    AnswerInvalid(String),

    /// Engine configuration failed validation.
    #[error("configuration invalid: {0}")]
    ConfigInvalid(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Process exit code for this error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            EngineError::ContextInvalid(_)
            | EngineError::AnswerInvalid(_)
            | EngineError::ConfigInvalid(_) => 1,
            EngineError::CatalogInvalid(_)
            | EngineError::CatalogVersionUnsupported { .. }
            | EngineError::CatalogDuplicateId(_) => 2,
            EngineError::Internal(_) => 3,
        }
    }

    pub fn is_catalog_error(&self) -> bool {
        self.exit_code() == 2
    }
}
