//! End-to-end scenarios over the full pipeline.

mod common;

use archrec::catalog::load_catalog;
use archrec::config::EngineConfig;
use archrec::context::normalize_from_str;
use archrec::eligibility::ExclusionRule;
use archrec::engine::Engine;
use archrec::explain::{ConfidenceLevel, ScoringResult};
use archrec::Catalog;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn engine() -> Engine {
    let (catalog, report) = load_catalog(&common::catalog_json()).unwrap();
    assert!(report.dropped.is_empty(), "fixture catalog must be clean");
    Engine::new(catalog, EngineConfig::default()).unwrap()
}

fn catalog() -> Catalog {
    load_catalog(&common::catalog_json()).unwrap().0
}

fn score(engine: &Engine, context: serde_json::Value, answers: &[(&str, &str)]) -> ScoringResult {
    let ctx = normalize_from_str(&context.to_string()).unwrap();
    let answers: BTreeMap<String, String> = answers
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    engine.score(&ctx, &answers).unwrap()
}

fn exclusion_rules_of<'a>(result: &'a ScoringResult, id: &str) -> Vec<ExclusionRule> {
    result
        .excluded
        .iter()
        .find(|e| e.architecture_id == id)
        .map(|e| e.reasons.iter().map(|r| r.rule).collect())
        .unwrap_or_default()
}

#[test]
fn lift_and_shift_vm_app_lands_on_iaas() {
    let engine = engine();
    let result = score(&engine, common::lift_and_shift_context(), &[]);

    let top = &result.recommendations[0];
    let entry = catalog().get(&top.architecture_id).cloned().unwrap();
    assert!(entry
        .supported_treatments
        .contains(&archrec::Treatment::Rehost));
    assert_eq!(entry.family, archrec::core::Family::Iaas);

    // Refactor-only entries fall to the treatment gate.
    for id in ["paas-webapp", "aks-microservices", "aks-regulated"] {
        assert!(
            exclusion_rules_of(&result, id).contains(&ExclusionRule::TreatmentMismatch),
            "{id} should be excluded for treatment mismatch"
        );
    }
    // The single-VM marker removes the AVS estate entry.
    assert!(exclusion_rules_of(&result, "iaas-avs").contains(&ExclusionRule::NotSuitable));

    assert_ne!(result.summary.confidence_level, ConfidenceLevel::High);
}

#[test]
fn mission_critical_cloud_native_web_app() {
    let engine = engine();
    let result = score(
        &engine,
        common::cloud_native_context(),
        &[
            ("time_category", "invest"),
            ("availability", "active_active"),
            ("operating_model", "devops"),
            ("network_exposure", "external"),
            ("cost_posture", "innovation_first"),
        ],
    );

    let top = &result.recommendations[0];
    assert_eq!(top.architecture_id, "aks-microservices");
    let entry = catalog().get(&top.architecture_id).cloned().unwrap();
    assert!(entry.core_services.contains("azure_kubernetes_service"));
    assert!(entry
        .availability_models
        .contains(&archrec::core::AvailabilityModel::ActiveActive));

    // VM-only entries cannot serve a refactor treatment.
    assert!(exclusion_rules_of(&result, "iaas-vm-single")
        .contains(&ExclusionRule::TreatmentMismatch));

    assert_eq!(result.summary.confidence_level, ConfidenceLevel::High);
    assert!(top.score_breakdown.confidence_penalty < 0.10);
}

#[test]
fn regulated_workload_with_low_maturity_team() {
    let engine = engine();
    let result = score(
        &engine,
        common::regulated_context(),
        &[("operating_model", "traditional_it")],
    );

    // SRE-required entries are out on the operating-model gap.
    assert!(
        exclusion_rules_of(&result, "aks-regulated").contains(&ExclusionRule::OperatingModelGap)
    );

    // Nothing below the highly_regulated requirement is recommended.
    let catalog = catalog();
    assert!(!result.recommendations.is_empty());
    for rec in &result.recommendations {
        let entry = catalog.get(&rec.architecture_id).unwrap();
        assert!(entry.security_level >= archrec::SecurityLevel::HighlyRegulated);
    }
    assert!(exclusion_rules_of(&result, "aks-microservices")
        .contains(&ExclusionRule::SecurityBelowRequirement));
}

#[test]
fn sparse_context_scores_with_capped_penalty() {
    let engine = engine();
    let ctx = normalize_from_str(&common::sparse_context().to_string()).unwrap();

    let questions = engine.questions(&ctx);
    let ids: Vec<&str> = questions.iter().map(|q| q.question_id.as_str()).collect();
    assert!(ids.contains(&"network_exposure"));
    assert!(ids.contains(&"time_category"));
    assert_eq!(questions.len(), 7);

    let result = engine.score(&ctx, &BTreeMap::new()).unwrap();
    assert!(!result.recommendations.is_empty());
    for rec in &result.recommendations {
        assert!(rec.assumptions.len() >= 5, "sparse context implies assumptions");
        assert_eq!(rec.score_breakdown.confidence_penalty, 0.25);
    }
    assert_eq!(result.summary.confidence_level, ConfidenceLevel::Low);
}

#[test]
fn app_mod_not_supported_overrides_container_tech() {
    let engine = engine();
    let result = score(&engine, common::app_mod_blocked_context(), &[]);

    let catalog = catalog();
    for rec in &result.recommendations {
        let entry = catalog.get(&rec.architecture_id).unwrap();
        assert!(
            !entry.core_services.contains("azure_kubernetes_service"),
            "{} should not be recommended over an AKS blocker",
            rec.architecture_id
        );
    }
    for id in ["aks-microservices", "aks-regulated"] {
        assert!(
            exclusion_rules_of(&result, id).contains(&ExclusionRule::AppModBlocker),
            "{id} must carry the app_mod_blocker reason"
        );
    }
}

#[test]
fn answer_flip_rewards_internet_facing_entries() {
    let engine = engine();
    let before = score(&engine, common::sparse_context(), &[]);
    let after = score(
        &engine,
        common::sparse_context(),
        &[("network_exposure", "external")],
    );

    let score_of = |result: &ScoringResult, id: &str| {
        result
            .recommendations
            .iter()
            .find(|r| r.architecture_id == id)
            .map(|r| r.likelihood_score)
            .unwrap()
    };
    let rank_of = |result: &ScoringResult, id: &str| {
        result
            .recommendations
            .iter()
            .position(|r| r.architecture_id == id)
            .unwrap()
    };

    // paas-webapp carries the internet_facing/waf browse tags.
    assert!(score_of(&after, "paas-webapp") > score_of(&before, "paas-webapp"));
    assert!(rank_of(&after, "paas-webapp") <= rank_of(&before, "paas-webapp"));

    // Confidence never degrades when an answer is supplied.
    let level_rank = |level: ConfidenceLevel| match level {
        ConfidenceLevel::Low => 0,
        ConfidenceLevel::Medium => 1,
        ConfidenceLevel::High => 2,
    };
    assert!(
        level_rank(after.summary.confidence_level)
            >= level_rank(before.summary.confidence_level)
    );
}
