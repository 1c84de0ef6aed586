//! Per-dimension sub-scores.
//!
//! Every sub-score lands in [0, 1] and carries an evidence string so the
//! final number is reconstructable. A dimension with no evidence either way
//! scores a neutral 0.5; the confidence penalty carries the uncertainty.

use crate::catalog::CatalogEntry;
use crate::context::technology::is_container_technology;
use crate::context::NormalizedContext;
use crate::core::{AppModStatus, NetworkExposure, RuntimeModel, SignalConfidence};
use crate::intent::Intent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub const NEUTRAL: f64 = 0.5;

/// Shared browse tags at or above this count earn full credit.
const TAG_OVERLAP_SATURATION: f64 = 3.0;

/// The ten scored dimensions, in weight-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDimension {
    TreatmentAlignment,
    PlatformCompatibility,
    AppModRecommended,
    RuntimeModelCompatibility,
    ServiceOverlap,
    AvailabilityAlignment,
    OperatingModelFit,
    ComplexityTolerance,
    BrowseTagOverlap,
    CostPostureAlignment,
}

impl ScoreDimension {
    pub const ALL: [ScoreDimension; 10] = [
        ScoreDimension::TreatmentAlignment,
        ScoreDimension::PlatformCompatibility,
        ScoreDimension::AppModRecommended,
        ScoreDimension::RuntimeModelCompatibility,
        ScoreDimension::ServiceOverlap,
        ScoreDimension::AvailabilityAlignment,
        ScoreDimension::OperatingModelFit,
        ScoreDimension::ComplexityTolerance,
        ScoreDimension::BrowseTagOverlap,
        ScoreDimension::CostPostureAlignment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreDimension::TreatmentAlignment => "treatment_alignment",
            ScoreDimension::PlatformCompatibility => "platform_compatibility",
            ScoreDimension::AppModRecommended => "app_mod_recommended",
            ScoreDimension::RuntimeModelCompatibility => "runtime_model_compatibility",
            ScoreDimension::ServiceOverlap => "service_overlap",
            ScoreDimension::AvailabilityAlignment => "availability_alignment",
            ScoreDimension::OperatingModelFit => "operating_model_fit",
            ScoreDimension::ComplexityTolerance => "complexity_tolerance",
            ScoreDimension::BrowseTagOverlap => "browse_tag_overlap",
            ScoreDimension::CostPostureAlignment => "cost_posture_alignment",
        }
    }
}

impl fmt::Display for ScoreDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sub-score with its evidence.
#[derive(Debug, Clone, PartialEq)]
pub struct SubScore {
    pub score: f64,
    pub evidence: String,
}

impl SubScore {
    fn new(score: f64, evidence: impl Into<String>) -> Self {
        Self {
            score,
            evidence: evidence.into(),
        }
    }

    fn neutral(evidence: impl Into<String>) -> Self {
        Self::new(NEUTRAL, evidence)
    }
}

fn treatment_alignment(intent: &Intent, entry: &CatalogEntry) -> SubScore {
    if entry.supported_treatments.is_empty() {
        return SubScore::neutral("entry declares no supported treatments");
    }
    let treatment = intent.treatment.value;
    if entry.supported_treatments.contains(&treatment) {
        return SubScore::new(1.0, format!("entry supports the {treatment:?} treatment"));
    }
    if intent.treatment.confidence == SignalConfidence::Unknown {
        return SubScore::neutral("treatment is unknown; no alignment evidence");
    }
    SubScore::new(0.0, format!("entry does not support the {treatment:?} treatment"))
}

fn platform_compatibility(ctx: &NormalizedContext, entry: &CatalogEntry) -> SubScore {
    if !ctx.app_mod.has_data() {
        return SubScore::neutral("no App-Mod data for this application");
    }
    let statuses: Vec<(&String, AppModStatus)> = entry
        .core_services
        .iter()
        .filter_map(|s| ctx.app_mod.status_of(s).map(|st| (s, st)))
        .collect();
    if statuses.is_empty() {
        return SubScore::neutral("App-Mod assessed no core service of this entry");
    }
    if let Some((service, _)) = statuses.iter().find(|(_, st)| *st == AppModStatus::Supported) {
        return SubScore::new(1.0, format!("App-Mod reports {service} as Supported"));
    }
    if let Some((service, _)) = statuses.iter().find(|(_, st)| *st == AppModStatus::Ready) {
        return SubScore::new(0.5, format!("App-Mod reports {service} as Ready"));
    }
    SubScore::new(0.0, "App-Mod gives no positive verdict for any core service")
}

fn app_mod_recommended(ctx: &NormalizedContext, entry: &CatalogEntry) -> SubScore {
    if ctx.app_mod.recommended_targets.is_empty() {
        return SubScore::neutral("App-Mod recommends no targets");
    }
    match entry
        .core_services
        .iter()
        .find(|s| ctx.app_mod.recommended_targets.contains(*s))
    {
        Some(service) => SubScore::new(1.0, format!("core service {service} is an App-Mod recommended target")),
        None => SubScore::new(0.0, "no core service is among the App-Mod recommended targets"),
    }
}

fn runtime_model_compatibility(intent: &Intent, entry: &CatalogEntry) -> SubScore {
    if entry.expected_runtime_models.is_empty() {
        return SubScore::neutral("entry declares no expected runtime models");
    }
    let model = intent.likely_runtime_model.value;
    if entry.expected_runtime_models.contains(&model) {
        return SubScore::new(1.0, format!("entry expects the {model:?} runtime model"));
    }
    if entry.expected_runtime_models.contains(&RuntimeModel::Mixed)
        || intent.likely_runtime_model.confidence == SignalConfidence::Unknown
    {
        return SubScore::new(0.5, "partial runtime-model compatibility via mixed workloads");
    }
    SubScore::new(0.0, format!("entry does not expect the {model:?} runtime model"))
}

fn service_overlap(ctx: &NormalizedContext, entry: &CatalogEntry) -> SubScore {
    let approved: BTreeSet<&String> = ctx.approved_services.values().collect();
    let shared: Vec<&str> = entry
        .core_services
        .iter()
        .filter(|s| approved.contains(s))
        .map(String::as_str)
        .collect();
    let score = shared.len() as f64 / entry.core_services.len().max(1) as f64;
    let evidence = if shared.is_empty() {
        "no approved service overlaps the entry's core services".to_string()
    } else {
        format!(
            "{} of {} core services approved: {}",
            shared.len(),
            entry.core_services.len(),
            shared.join(", ")
        )
    };
    SubScore::new(score, evidence)
}

fn availability_alignment(intent: &Intent, entry: &CatalogEntry) -> SubScore {
    if entry.availability_models.is_empty() {
        return SubScore::neutral("entry declares no availability models");
    }
    let required = intent.availability_requirement.value;
    if entry.availability_models.contains(&required) {
        return SubScore::new(1.0, format!("entry offers the required {required:?} topology"));
    }
    match entry.max_availability_rank() {
        Some(max) if max >= required.rank() => SubScore::new(
            0.7,
            format!("entry offers a stronger topology than the required {required:?}"),
        ),
        _ => SubScore::new(0.0, format!("entry cannot reach the required {required:?} topology")),
    }
}

fn operating_model_fit(intent: &Intent, entry: &CatalogEntry) -> SubScore {
    let maturity = &intent.operational_maturity_estimate;
    if maturity.confidence == SignalConfidence::Unknown {
        return SubScore::neutral("team maturity is unknown");
    }
    let gap = entry.operating_model_required.rank() as i16 - maturity.value.rank() as i16;
    match gap {
        0 => SubScore::new(1.0, "entry matches the team's operating model exactly"),
        1 => SubScore::new(0.7, "entry requires one maturity level above the team"),
        _ => SubScore::new(
            0.0,
            format!("entry operating-model requirement is {gap} levels away from the team"),
        ),
    }
}

fn complexity_tolerance(ctx: &NormalizedContext, entry: &CatalogEntry) -> SubScore {
    let criticality = ctx.business_criticality.value.rank() as usize;
    // Rows: entry complexity low/medium/high; columns: criticality low..mission.
    const TABLE: [[f64; 4]; 3] = [
        [1.0, 1.0, 1.0, 1.0],
        [0.7, 0.9, 1.0, 1.0],
        [0.3, 0.6, 0.8, 1.0],
    ];
    let score = TABLE[entry.complexity.rank() as usize][criticality];
    SubScore::new(
        score,
        format!(
            "{:?} complexity against {:?} business criticality",
            entry.complexity, ctx.business_criticality.value
        ),
    )
}

/// Tags an application exhibits, used against entry browse tags. External
/// exposure contributes the internet-facing/WAF tags, which is the only
/// place network exposure touches the score.
pub fn derive_app_tags(ctx: &NormalizedContext, intent: &Intent) -> BTreeSet<String> {
    let mut tags: BTreeSet<String> = ctx.detected_technologies.iter().cloned().collect();
    if ctx.app_mod.container_ready
        || ctx.detected_technologies.iter().any(|t| is_container_technology(t))
    {
        tags.insert("containers".to_string());
    }
    if intent.network_exposure.confidence > SignalConfidence::Unknown {
        match intent.network_exposure.value {
            NetworkExposure::External => {
                tags.insert("internet_facing".to_string());
                tags.insert("waf".to_string());
            }
            NetworkExposure::Internal => {
                tags.insert("private_network".to_string());
            }
            NetworkExposure::Mixed => {
                tags.insert("internet_facing".to_string());
                tags.insert("private_network".to_string());
            }
        }
    }
    if let Some(app_type) = &ctx.app_type {
        tags.insert(app_type.replace(' ', "_"));
    }
    tags
}

fn browse_tag_overlap(ctx: &NormalizedContext, intent: &Intent, entry: &CatalogEntry) -> SubScore {
    if entry.browse_tags.is_empty() {
        return SubScore::neutral("entry declares no browse tags");
    }
    let app_tags = derive_app_tags(ctx, intent);
    let shared: Vec<&str> = entry
        .browse_tags
        .iter()
        .filter(|t| app_tags.contains(*t))
        .map(String::as_str)
        .collect();
    let score = (shared.len() as f64 / TAG_OVERLAP_SATURATION).min(1.0);
    let evidence = if shared.is_empty() {
        "no browse tags shared with the application".to_string()
    } else {
        format!("shared browse tags: {}", shared.join(", "))
    };
    SubScore::new(score, evidence)
}

fn cost_posture_alignment(intent: &Intent, entry: &CatalogEntry) -> SubScore {
    use crate::core::CostProfile;
    let posture = intent.cost_posture.value;
    if entry.cost_profile == posture {
        return SubScore::new(1.0, format!("entry cost profile matches {posture:?}"));
    }
    if intent.cost_posture.confidence == SignalConfidence::Unknown {
        return SubScore::neutral("cost posture is unknown");
    }
    if entry.cost_profile == CostProfile::Balanced || posture == CostProfile::Balanced {
        return SubScore::new(0.5, "one side of the cost comparison is balanced");
    }
    SubScore::new(
        0.0,
        format!("entry cost profile {:?} conflicts with {posture:?}", entry.cost_profile),
    )
}

/// Compute one sub-score.
pub fn sub_score(
    dimension: ScoreDimension,
    intent: &Intent,
    ctx: &NormalizedContext,
    entry: &CatalogEntry,
) -> SubScore {
    match dimension {
        ScoreDimension::TreatmentAlignment => treatment_alignment(intent, entry),
        ScoreDimension::PlatformCompatibility => platform_compatibility(ctx, entry),
        ScoreDimension::AppModRecommended => app_mod_recommended(ctx, entry),
        ScoreDimension::RuntimeModelCompatibility => runtime_model_compatibility(intent, entry),
        ScoreDimension::ServiceOverlap => service_overlap(ctx, entry),
        ScoreDimension::AvailabilityAlignment => availability_alignment(intent, entry),
        ScoreDimension::OperatingModelFit => operating_model_fit(intent, entry),
        ScoreDimension::ComplexityTolerance => complexity_tolerance(ctx, entry),
        ScoreDimension::BrowseTagOverlap => browse_tag_overlap(ctx, intent, entry),
        ScoreDimension::CostPostureAlignment => cost_posture_alignment(intent, entry),
    }
}
