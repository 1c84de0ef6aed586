//! Weighted scoring over eligible entries.
//!
//! `final = round(100 * base_weighted * quality_weight * (1 - penalty))`.
//! Scores are integers after rounding; ordering ties are broken by quality
//! rank and then architecture_id, so output order is total and stable.

use super::dimensions::{sub_score, ScoreDimension};
use crate::catalog::CatalogEntry;
use crate::config::{EngineConfig, ScoringWeights};
use crate::context::NormalizedContext;
use crate::core::CatalogQuality;
use crate::intent::{Dimension, Intent};
use serde::{Deserialize, Serialize};

/// One dimension's contribution to a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: ScoreDimension,
    pub weight: f64,
    /// Raw sub-score in [0, 1].
    pub score: f64,
    /// weight * score.
    pub contribution: f64,
    pub evidence: String,
}

/// A scored entry with everything needed to reconstruct the number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub architecture_id: String,
    pub base_score: f64,
    pub quality_weight: f64,
    pub confidence_penalty: f64,
    pub final_score: u32,
    pub dimensions: Vec<DimensionScore>,
}

fn weight_of(weights: &ScoringWeights, dimension: ScoreDimension) -> f64 {
    match dimension {
        ScoreDimension::TreatmentAlignment => weights.treatment_alignment,
        ScoreDimension::PlatformCompatibility => weights.platform_compatibility,
        ScoreDimension::AppModRecommended => weights.app_mod_recommended,
        ScoreDimension::RuntimeModelCompatibility => weights.runtime_model_compatibility,
        ScoreDimension::ServiceOverlap => weights.service_overlap,
        ScoreDimension::AvailabilityAlignment => weights.availability_alignment,
        ScoreDimension::OperatingModelFit => weights.operating_model_fit,
        ScoreDimension::ComplexityTolerance => weights.complexity_tolerance,
        ScoreDimension::BrowseTagOverlap => weights.browse_tag_overlap,
        ScoreDimension::CostPostureAlignment => weights.cost_posture_alignment,
    }
}

pub fn quality_weight(config: &EngineConfig, quality: CatalogQuality) -> f64 {
    match quality {
        CatalogQuality::Curated => config.quality_weights.curated,
        CatalogQuality::AiEnriched => config.quality_weights.ai_enriched,
        CatalogQuality::AiSuggested => config.quality_weights.ai_suggested,
        CatalogQuality::ExampleOnly => config.quality_weights.example_only,
        // Discard entries never reach the scorer; the eligibility gate owns
        // them. Weight as the lowest tier if one ever slips through a direct
        // call.
        CatalogQuality::Discard => config.quality_weights.example_only,
    }
}

/// Sum of per-signal penalties across the ten tracked dimensions, capped.
pub fn confidence_penalty(intent: &Intent, config: &EngineConfig) -> f64 {
    let total: f64 = Dimension::ALL
        .into_iter()
        .map(|d| config.penalties.for_confidence(intent.confidence_of(d)))
        .sum();
    total.min(config.penalties.cap)
}

/// Score one eligible entry.
pub fn score_entry(
    entry: &CatalogEntry,
    intent: &Intent,
    ctx: &NormalizedContext,
    config: &EngineConfig,
) -> ScoredEntry {
    let mut dimensions = Vec::with_capacity(ScoreDimension::ALL.len());
    let mut base_score = 0.0;
    for dimension in ScoreDimension::ALL {
        let weight = weight_of(&config.weights, dimension);
        let sub = sub_score(dimension, intent, ctx, entry);
        let contribution = weight * sub.score;
        base_score += contribution;
        dimensions.push(DimensionScore {
            dimension,
            weight,
            score: sub.score,
            contribution,
            evidence: sub.evidence,
        });
    }

    let quality = quality_weight(config, entry.catalog_quality);
    let penalty = confidence_penalty(intent, config);
    let final_score = (100.0 * base_score * quality * (1.0 - penalty)).round() as u32;

    ScoredEntry {
        architecture_id: entry.architecture_id.clone(),
        base_score,
        quality_weight: quality,
        confidence_penalty: penalty,
        final_score,
        dimensions,
    }
}

/// Order scored entries: score desc, then quality rank (curated first),
/// then architecture_id lexicographic.
pub fn rank(scored: &mut [(ScoredEntry, CatalogQuality)]) {
    scored.sort_by(|(a, qa), (b, qb)| {
        b.final_score
            .cmp(&a.final_score)
            .then(qa.rank().cmp(&qb.rank()))
            .then(a.architecture_id.cmp(&b.architecture_id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::normalize;
    use crate::core::Signal;
    use crate::intent::derive_intent;
    use serde_json::json;

    fn entry_with(value: serde_json::Value) -> CatalogEntry {
        let mut base = json!({
            "architecture_id": "e",
            "name": "Entry",
            "family": "paas",
            "workload_domain": "web",
            "security_level": "basic",
            "operating_model_required": "traditional_it",
            "cost_profile": "balanced",
            "complexity": "low",
            "catalog_quality": "curated"
        });
        base.as_object_mut()
            .unwrap()
            .extend(value.as_object().unwrap().clone());
        serde_json::from_value(base).unwrap()
    }

    fn fixture(ctx_value: serde_json::Value) -> (NormalizedContext, Intent) {
        let raw = serde_json::from_value(ctx_value).unwrap();
        let ctx = normalize(&raw).unwrap();
        (ctx.clone(), derive_intent(&ctx).intent)
    }

    #[test]
    fn penalty_is_capped() {
        let (_, intent) = fixture(json!({ "app_overview": { "application": "x" } }));
        let config = EngineConfig::default();
        let penalty = confidence_penalty(&intent, &config);
        assert!(penalty <= config.penalties.cap + 1e-12);
        assert_eq!(penalty, 0.25);
    }

    #[test]
    fn fully_confident_intent_pays_no_penalty() {
        let (_, mut intent) = fixture(json!({ "app_overview": { "application": "x" } }));
        intent.likely_runtime_model = Signal::app_mod(intent.likely_runtime_model.value);
        intent.modernization_depth_feasible =
            Signal::app_mod(intent.modernization_depth_feasible.value);
        intent.cloud_native_feasibility = Signal::app_mod(intent.cloud_native_feasibility.value);
        intent.operational_maturity_estimate =
            Signal::answered(intent.operational_maturity_estimate.value);
        intent.availability_requirement = Signal::answered(intent.availability_requirement.value);
        intent.security_requirement = Signal::answered(intent.security_requirement.value);
        intent.cost_posture = Signal::answered(intent.cost_posture.value);
        intent.network_exposure = Signal::answered(intent.network_exposure.value);
        intent.treatment = Signal::answered(intent.treatment.value);
        intent.time_category = Signal::answered(Some(crate::core::TimeCategory::Migrate));
        assert_eq!(confidence_penalty(&intent, &EngineConfig::default()), 0.0);
    }

    #[test]
    fn score_is_reconstructable_from_breakdown() {
        let (ctx, intent) = fixture(json!({
            "app_overview": { "application": "x", "treatment": "rehost" },
            "server_details": [ { "name": "a" }, { "name": "b" } ]
        }));
        let entry = entry_with(json!({ "supported_treatments": ["rehost", "replatform"] }));
        let config = EngineConfig::default();
        let scored = score_entry(&entry, &intent, &ctx, &config);

        let recomputed_base: f64 = scored.dimensions.iter().map(|d| d.contribution).sum();
        assert!((recomputed_base - scored.base_score).abs() < 1e-12);
        let expected = (100.0
            * scored.base_score
            * scored.quality_weight
            * (1.0 - scored.confidence_penalty))
            .round() as u32;
        assert_eq!(scored.final_score, expected);
        assert!(scored.final_score <= 100);
    }

    #[test]
    fn quality_weight_orders_scores() {
        let (ctx, intent) = fixture(json!({ "app_overview": { "application": "x" } }));
        let config = EngineConfig::default();
        let curated = entry_with(json!({ "architecture_id": "c", "catalog_quality": "curated" }));
        let example = entry_with(json!({ "architecture_id": "x", "catalog_quality": "example_only" }));
        let curated_score = score_entry(&curated, &intent, &ctx, &config);
        let example_score = score_entry(&example, &intent, &ctx, &config);
        assert!(curated_score.final_score >= example_score.final_score);
    }

    #[test]
    fn ranking_breaks_ties_by_quality_then_id() {
        let (ctx, intent) = fixture(json!({ "app_overview": { "application": "x" } }));
        let config = EngineConfig::default();
        // Same shape, same quality: tie broken by id.
        let a = entry_with(json!({ "architecture_id": "beta" }));
        let b = entry_with(json!({ "architecture_id": "alpha" }));
        let mut scored = vec![
            (score_entry(&a, &intent, &ctx, &config), a.catalog_quality),
            (score_entry(&b, &intent, &ctx, &config), b.catalog_quality),
        ];
        rank(&mut scored);
        assert_eq!(scored[0].0.architecture_id, "alpha");
    }

    #[test]
    fn answer_never_lowers_score() {
        let (ctx, intent) = fixture(json!({
            "app_overview": { "application": "x" },
            "server_details": [ { "name": "a" } ]
        }));
        let entry = entry_with(json!({}));
        let config = EngineConfig::default();
        let before = score_entry(&entry, &intent, &ctx, &config);

        let mut upgraded = intent.clone();
        upgraded.network_exposure = Signal::answered(upgraded.network_exposure.value);
        let after = score_entry(&entry, &upgraded, &ctx, &config);
        assert!(after.final_score >= before.final_score);
        assert!(after.confidence_penalty <= before.confidence_penalty);
    }
}
