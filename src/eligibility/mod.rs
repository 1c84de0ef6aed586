//! Binary eligibility rules, applied before scoring.
//!
//! Rules run in a fixed order and every failing rule appends a structured
//! reason, so the first element of a reason list is the rule that fired
//! first. No rule acts on a defaulted signal: treatment and TIME gates need
//! a HIGH signal, security and operating-model gates need confidence above
//! UNKNOWN.

use crate::catalog::CatalogEntry;
use crate::config::EligibilityConfig;
use crate::context::technology::is_legacy_os;
use crate::context::NormalizedContext;
use crate::core::{
    AppModStatus, BusinessCriticality, NetworkExposure, NotSuitableFor, OperatingModel,
    RuntimeModel, SecurityLevel, SignalConfidence,
};
use crate::intent::Intent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionRule {
    QualityGate,
    TreatmentMismatch,
    TimeCategoryMismatch,
    SecurityBelowRequirement,
    OperatingModelGap,
    AppModBlocker,
    NotSuitable,
}

/// One failed rule with a human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionReason {
    pub rule: ExclusionRule,
    pub detail: String,
}

impl ExclusionReason {
    fn new(rule: ExclusionRule, detail: impl Into<String>) -> Self {
        Self {
            rule,
            detail: detail.into(),
        }
    }
}

fn known(confidence: SignalConfidence) -> bool {
    confidence > SignalConfidence::Unknown
}

fn not_suitable_matches(
    marker: NotSuitableFor,
    intent: &Intent,
    ctx: &NormalizedContext,
) -> Option<String> {
    match marker {
        NotSuitableFor::SingleVmWorkloads if ctx.server_count == 1 => {
            Some("application runs on a single VM".into())
        }
        NotSuitableFor::LargeServerFleets if ctx.server_count > 50 => {
            Some(format!("fleet of {} servers", ctx.server_count))
        }
        NotSuitableFor::MissionCriticalWorkloads
            if known(ctx.business_criticality.confidence)
                && ctx.business_criticality.value == BusinessCriticality::MissionCritical =>
        {
            Some("application is mission critical".into())
        }
        NotSuitableFor::RegulatedWorkloads
            if known(intent.security_requirement.confidence)
                && intent.security_requirement.value >= SecurityLevel::Regulated =>
        {
            Some("application has regulated security requirements".into())
        }
        NotSuitableFor::InternetFacingWorkloads
            if known(intent.network_exposure.confidence)
                && intent.network_exposure.value == NetworkExposure::External =>
        {
            Some("application is internet-facing".into())
        }
        NotSuitableFor::BatchWorkloads
            if known(intent.likely_runtime_model.confidence)
                && intent.likely_runtime_model.value == RuntimeModel::Batch =>
        {
            Some("application is a batch workload".into())
        }
        NotSuitableFor::LegacyOperatingSystems
            if ctx.os_mix.iter().any(|os| is_legacy_os(os)) =>
        {
            Some("inventory contains legacy operating systems".into())
        }
        NotSuitableFor::LowMaturityTeams
            if known(intent.operational_maturity_estimate.confidence)
                && intent.operational_maturity_estimate.value == OperatingModel::TraditionalIt =>
        {
            Some("team operates in a traditional IT model".into())
        }
        _ => None,
    }
}

/// Evaluate every rule against one entry. An empty result means eligible.
pub fn evaluate_entry(
    entry: &CatalogEntry,
    intent: &Intent,
    ctx: &NormalizedContext,
    config: &EligibilityConfig,
) -> Vec<ExclusionReason> {
    let mut reasons = Vec::new();

    // 1. Catalog quality gate.
    if !entry.catalog_quality.is_scorable() {
        reasons.push(ExclusionReason::new(
            ExclusionRule::QualityGate,
            "entry is marked for discard",
        ));
    }

    // 2. Treatment.
    if intent.treatment.confidence == SignalConfidence::High
        && !entry.supported_treatments.is_empty()
        && !entry.supported_treatments.contains(&intent.treatment.value)
    {
        reasons.push(ExclusionReason::new(
            ExclusionRule::TreatmentMismatch,
            format!(
                "treatment {} is not among the entry's supported treatments",
                intent.value_label(crate::intent::Dimension::Treatment)
            ),
        ));
    }

    // 3. TIME category.
    if let Some(time_category) = intent.time_category.value {
        if !entry.supported_time_categories.is_empty()
            && !entry.supported_time_categories.contains(&time_category)
        {
            reasons.push(ExclusionReason::new(
                ExclusionRule::TimeCategoryMismatch,
                format!(
                    "TIME posture {} is not among the entry's supported categories",
                    intent.value_label(crate::intent::Dimension::TimeCategory)
                ),
            ));
        }
    }

    // 4. Security floor.
    if known(intent.security_requirement.confidence)
        && entry.security_level.rank() < intent.security_requirement.value.rank()
    {
        reasons.push(ExclusionReason::new(
            ExclusionRule::SecurityBelowRequirement,
            format!(
                "entry security level {:?} is below the required {}",
                entry.security_level,
                intent.value_label(crate::intent::Dimension::SecurityLevel)
            ),
        ));
    }

    // 5. Operating-model gap.
    if known(intent.operational_maturity_estimate.confidence) {
        let gap = entry.operating_model_required.rank() as i16
            - intent.operational_maturity_estimate.value.rank() as i16;
        if gap > config.max_operating_model_gap as i16 {
            reasons.push(ExclusionReason::new(
                ExclusionRule::OperatingModelGap,
                format!(
                    "entry requires {:?}, {} levels above the team's estimated maturity",
                    entry.operating_model_required, gap
                ),
            ));
        }
    }

    // 6. App-Mod blocker.
    for service in &entry.core_services {
        if ctx.app_mod.status_of(service) == Some(AppModStatus::NotSupported) {
            reasons.push(ExclusionReason::new(
                ExclusionRule::AppModBlocker,
                format!("core service {service} is NotSupported per App-Mod assessment"),
            ));
            break;
        }
    }

    // 7. Not-suitable-for markers.
    for marker in &entry.not_suitable_for {
        if let Some(detail) = not_suitable_matches(*marker, intent, ctx) {
            reasons.push(ExclusionReason::new(ExclusionRule::NotSuitable, detail));
        }
    }

    reasons
}
