//! Engine configuration: scoring weights, quality weights, penalties, and
//! eligibility thresholds, plus optional `.archrec.toml` overrides.

mod loader;
mod scoring;

pub use loader::{discover_config, load_config_from, parse_and_validate_config, resolve_config};
pub use scoring::{
    default_ask_at_or_below, default_max_operating_model_gap, default_penalty_cap,
    ConfidencePenalties, EligibilityConfig, EngineConfig, QualityWeights, QuestionConfig,
    ScoringWeights,
};
