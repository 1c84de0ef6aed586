//! Weighted, explainable scoring of eligible catalog entries.

mod dimensions;
mod scorer;

pub use dimensions::{derive_app_tags, sub_score, ScoreDimension, SubScore, NEUTRAL};
pub use scorer::{confidence_penalty, quality_weight, rank, score_entry, DimensionScore, ScoredEntry};
