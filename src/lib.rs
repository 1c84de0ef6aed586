// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod core;
pub mod eligibility;
pub mod engine;
pub mod explain;
pub mod intent;
pub mod io;
pub mod observability;
pub mod output;
pub mod questions;
pub mod scoring;

// Re-export commonly used types
pub use crate::catalog::{load_catalog, Catalog, CatalogEntry};
pub use crate::config::EngineConfig;
pub use crate::context::{normalize, normalize_from_str, NormalizedContext, RawAssessment};
pub use crate::core::{
    AppModStatus, BusinessCriticality, CatalogQuality, EngineError, SecurityLevel, Signal,
    SignalConfidence, Treatment,
};
pub use crate::engine::Engine;
pub use crate::explain::{ConfidenceLevel, Recommendation, ScoringResult};
pub use crate::intent::{derive_intent, Dimension, Intent};
pub use crate::questions::{apply_answers, generate_questions, Question};
