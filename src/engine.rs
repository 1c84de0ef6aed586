//! The scoring engine facade.
//!
//! An [`Engine`] owns a validated catalog and configuration. Scoring is a
//! pure function of (catalog, context, answers): no clock, no randomness,
//! no mutable state, so identical inputs produce byte-identical output.

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::context::NormalizedContext;
use crate::core::EngineError;
use crate::eligibility::{evaluate_entry, ExclusionReason};
use crate::explain::{build_result, ScoringResult};
use crate::intent::derive_intent;
use crate::questions::{apply_answers, generate_questions, Question};
use crate::scoring::{rank, score_entry, ScoredEntry};
use std::collections::BTreeMap;
use tracing::{debug, info};

pub struct Engine {
    catalog: Catalog,
    config: EngineConfig,
}

impl Engine {
    /// Build an engine over a loaded catalog. The configuration is
    /// validated once here so scoring never has to.
    pub fn new(catalog: Catalog, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::ConfigInvalid)?;
        Ok(Self { catalog, config })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Clarification questions for this context's derived intent.
    pub fn questions(&self, ctx: &NormalizedContext) -> Vec<Question> {
        let derived = derive_intent(ctx);
        generate_questions(&derived.intent, &self.config.questions)
    }

    /// Run the full pipeline: derive intent, fold in answers, filter,
    /// score, rank, explain.
    pub fn score(
        &self,
        ctx: &NormalizedContext,
        answers: &BTreeMap<String, String>,
    ) -> Result<ScoringResult, EngineError> {
        let derived = derive_intent(ctx);
        for rejection in &derived.rejected {
            info!(
                dimension = %rejection.dimension,
                rejected = rejection.rejected_value.as_str(),
                kept = rejection.kept_value.as_str(),
                "heuristic inference rejected"
            );
        }
        let intent = apply_answers(&derived.intent, answers)?;

        let mut excluded: Vec<(String, Vec<ExclusionReason>)> = Vec::new();
        let mut eligible: Vec<(ScoredEntry, crate::core::CatalogQuality)> = Vec::new();
        for entry in self.catalog.entries() {
            let reasons = evaluate_entry(entry, &intent, ctx, &self.config.eligibility);
            if reasons.is_empty() {
                let scored = score_entry(entry, &intent, ctx, &self.config);
                eligible.push((scored, entry.catalog_quality));
            } else {
                debug!(
                    architecture_id = entry.architecture_id.as_str(),
                    reasons = reasons.len(),
                    "entry excluded"
                );
                excluded.push((entry.architecture_id.clone(), reasons));
            }
        }

        rank(&mut eligible);
        let ranked: Vec<ScoredEntry> = eligible.into_iter().map(|(scored, _)| scored).collect();
        Ok(build_result(
            &self.catalog,
            &intent,
            &derived.rejected,
            &ranked,
            excluded,
        ))
    }
}
