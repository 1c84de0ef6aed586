//! Intent derivation rules.
//!
//! Pass 1 infers every dimension from normalized facts. Pass 2 applies the
//! App-Mod override: where authoritative App-Mod data contradicts a
//! heuristic, the App-Mod value wins at HIGH confidence and the heuristic
//! is recorded as a rejected inference. A declared treatment is the one
//! value App-Mod never overrides.

use super::{Dimension, Intent, RejectedInference};
use crate::context::technology::{
    is_ci_cd_technology, is_container_technology, is_iac_technology, is_innovation_technology,
    is_legacy_os, is_sre_technology, CONTAINER_PLATFORM_SERVICES,
};
use crate::context::{NormalizedContext, ServerTier, UtilizationProfile};
use crate::core::{
    AppModStatus, AvailabilityModel, BusinessCriticality, CostProfile, Feasibility,
    ModernizationDepth, NetworkExposure, OperatingModel, RuntimeModel, SecurityLevel, Signal,
    SignalConfidence, Treatment,
};
use tracing::debug;

/// Container feasibility plus at least this many distinct approved services
/// reads as a microservices decomposition.
const MICROSERVICES_MIN_DISTINCT_SERVICES: usize = 3;

/// Fleets above this size stop looking like a single classic n-tier app.
const N_TIER_MAX_SERVERS: usize = 10;

/// An intent together with the heuristics the override pass discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedIntent {
    pub intent: Intent,
    pub rejected: Vec<RejectedInference>,
}

fn derive_runtime_model(ctx: &NormalizedContext) -> Signal<RuntimeModel> {
    let has_web_tier = ctx.tiers_observed.contains(&ServerTier::Web);
    let has_db_tier = ctx.tiers_observed.contains(&ServerTier::Db);
    let tier_count = ctx.tiers_observed.len();

    if let Some(app_type) = ctx.app_type.as_deref() {
        if app_type.contains("api") {
            return Signal::heuristic(RuntimeModel::Api, SignalConfidence::Low);
        }
        if app_type.contains("batch") {
            return Signal::heuristic(RuntimeModel::Batch, SignalConfidence::Low);
        }
        if app_type.contains("event") {
            let has_messaging = ctx
                .detected_technologies
                .iter()
                .any(|t| matches!(t.as_str(), "kafka" | "rabbitmq" | "azure_service_bus"));
            let confidence = if has_messaging {
                SignalConfidence::Medium
            } else {
                SignalConfidence::Low
            };
            return Signal::heuristic(RuntimeModel::EventDriven, confidence);
        }
    }

    match ctx.server_count {
        0 => Signal::unknown(RuntimeModel::Mixed),
        1 => Signal::heuristic(RuntimeModel::Monolith, SignalConfidence::Low),
        2..=N_TIER_MAX_SERVERS if tier_count >= 2 => {
            // Tier roles plus corroborating web/db technology lift this to
            // MEDIUM; tier roles alone stay LOW.
            let tech_corroborates = has_web_tier
                && has_db_tier
                && ctx.detected_technologies.iter().any(|t| {
                    matches!(
                        t.as_str(),
                        "sql_server" | "mysql" | "postgresql" | "oracle_db" | "mongodb"
                    )
                });
            let confidence = if tech_corroborates {
                SignalConfidence::Medium
            } else {
                SignalConfidence::Low
            };
            Signal::heuristic(RuntimeModel::NTier, confidence)
        }
        _ => Signal::heuristic(RuntimeModel::Mixed, SignalConfidence::Low),
    }
}

/// Modernization depth comes from App-Mod exclusively; without App-Mod data
/// it stays UNKNOWN.
fn derive_modernization_depth(ctx: &NormalizedContext) -> Signal<ModernizationDepth> {
    let app_mod = &ctx.app_mod;
    if !app_mod.has_data() {
        return Signal::unknown(ModernizationDepth::RehostOnly);
    }

    let container_supported = CONTAINER_PLATFORM_SERVICES
        .iter()
        .any(|p| app_mod.status_of(p) == Some(AppModStatus::Supported));
    if app_mod.container_ready && container_supported {
        return Signal::app_mod(ModernizationDepth::Refactor);
    }
    if app_mod.platforms.values().any(|s| *s == AppModStatus::Supported) {
        return Signal::app_mod(ModernizationDepth::Replatform);
    }
    if app_mod.platforms.values().any(|s| *s == AppModStatus::Ready) {
        return Signal::new(
            ModernizationDepth::Replatform,
            SignalConfidence::Medium,
            crate::core::SignalSource::AppMod,
        );
    }
    if app_mod.platforms.values().any(|s| *s == AppModStatus::NotSupported) {
        return Signal::app_mod(ModernizationDepth::RehostOnly);
    }
    // Only Unknown statuses reported.
    Signal::new(
        ModernizationDepth::RehostOnly,
        SignalConfidence::Low,
        crate::core::SignalSource::AppMod,
    )
}

fn derive_cloud_native_feasibility(ctx: &NormalizedContext) -> Signal<Feasibility> {
    let app_mod = &ctx.app_mod;
    if app_mod.container_ready {
        return Signal::app_mod(Feasibility::High);
    }
    let containers_ruled_out = CONTAINER_PLATFORM_SERVICES
        .iter()
        .any(|p| app_mod.status_of(p) == Some(AppModStatus::NotSupported));
    if containers_ruled_out {
        return Signal::app_mod(Feasibility::Low);
    }
    if app_mod.has_data() {
        return Signal::new(
            Feasibility::Low,
            SignalConfidence::Low,
            crate::core::SignalSource::AppMod,
        );
    }
    Signal::unknown(Feasibility::Low)
}

fn derive_operational_maturity(
    ctx: &NormalizedContext,
    treatment: &Signal<Treatment>,
) -> Signal<OperatingModel> {
    let has_ci = ctx.detected_technologies.iter().any(|t| is_ci_cd_technology(t));
    let has_iac = ctx.detected_technologies.iter().any(|t| is_iac_technology(t));
    let has_sre = ctx.detected_technologies.iter().any(|t| is_sre_technology(t));

    let mut estimate = if has_sre && (has_ci || has_iac) {
        Signal::heuristic(OperatingModel::Sre, SignalConfidence::Medium)
    } else if has_ci && has_iac {
        Signal::heuristic(OperatingModel::Devops, SignalConfidence::Medium)
    } else if has_ci || has_iac || has_sre {
        Signal::heuristic(OperatingModel::Transitional, SignalConfidence::Low)
    } else {
        Signal::unknown(OperatingModel::TraditionalIt)
    };

    // Choosing refactor or replatform implies a team at least in transition;
    // the floor only ever raises the estimate.
    let implies_transition = matches!(
        treatment.value,
        Treatment::Refactor | Treatment::Replatform | Treatment::Rebuild
    ) && treatment.confidence >= SignalConfidence::Medium;
    if implies_transition && estimate.value.rank() < OperatingModel::Transitional.rank() {
        estimate = Signal::heuristic(OperatingModel::Transitional, SignalConfidence::Low);
    }
    estimate
}

fn derive_availability(ctx: &NormalizedContext) -> Signal<AvailabilityModel> {
    let criticality = &ctx.business_criticality;
    let value = match criticality.value {
        BusinessCriticality::MissionCritical => AvailabilityModel::ActiveActive,
        BusinessCriticality::High => AvailabilityModel::MultiRegion,
        BusinessCriticality::Medium => AvailabilityModel::SingleRegionHa,
        BusinessCriticality::Low => AvailabilityModel::SingleRegion,
    };
    match criticality.confidence {
        SignalConfidence::High => Signal::heuristic(value, SignalConfidence::Medium),
        SignalConfidence::Unknown => Signal::unknown(value),
        _ => Signal::heuristic(value, SignalConfidence::Low),
    }
}

fn derive_security(ctx: &NormalizedContext) -> Signal<SecurityLevel> {
    let mut level: Option<SecurityLevel> = None;
    for keyword in &ctx.compliance_keywords {
        let keyword = keyword.as_str();
        let mapped = if ["hipaa", "pci", "pci-dss", "fedramp", "fisma", "itar"]
            .iter()
            .any(|k| keyword.contains(k))
        {
            Some(SecurityLevel::HighlyRegulated)
        } else if ["soc2", "soc 2", "iso27001", "iso 27001", "gdpr"]
            .iter()
            .any(|k| keyword.contains(k))
        {
            Some(SecurityLevel::Regulated)
        } else if ["zero trust", "managed identity", "sso", "mfa"]
            .iter()
            .any(|k| keyword.contains(k))
        {
            Some(SecurityLevel::Enterprise)
        } else {
            None
        };
        if let Some(mapped) = mapped {
            level = Some(match level {
                Some(current) if current >= mapped => current,
                _ => mapped,
            });
        }
    }
    match level {
        Some(value) => Signal::declared(value),
        None => Signal::unknown(SecurityLevel::Basic),
    }
}

fn derive_cost_posture(ctx: &NormalizedContext) -> Signal<CostProfile> {
    let criticality = ctx.business_criticality.value;
    let has_innovation_tech = ctx
        .detected_technologies
        .iter()
        .any(|t| is_innovation_technology(t));

    if criticality >= BusinessCriticality::High && has_innovation_tech {
        return Signal::heuristic(CostProfile::InnovationFirst, SignalConfidence::Medium);
    }
    if ctx.utilization_profile == UtilizationProfile::Low {
        let confidence = if criticality == BusinessCriticality::Low {
            SignalConfidence::Medium
        } else {
            SignalConfidence::Low
        };
        return Signal::heuristic(CostProfile::CostMinimized, confidence);
    }
    if ctx.server_count > 0 || !ctx.detected_technologies.is_empty() {
        Signal::heuristic(CostProfile::Balanced, SignalConfidence::Low)
    } else {
        Signal::unknown(CostProfile::Balanced)
    }
}

fn derive_treatment(ctx: &NormalizedContext) -> Signal<Treatment> {
    if let Some(declared) = ctx.declared_treatment {
        return Signal::declared(declared);
    }

    let targets = &ctx.app_mod.recommended_targets;
    if !targets.is_empty() {
        let value = if CONTAINER_PLATFORM_SERVICES.iter().any(|p| targets.contains(*p)) {
            Treatment::Refactor
        } else if targets.contains("azure_app_service")
            || targets.contains("azure_sql_managed_instance")
            || targets.contains("azure_sql_database")
            || targets.contains("azure_spring_apps")
        {
            Treatment::Replatform
        } else {
            Treatment::Rehost
        };
        return Signal::new(value, SignalConfidence::Medium, crate::core::SignalSource::AppMod);
    }

    let legacy_heavy = ctx.os_mix.iter().any(|os| is_legacy_os(os))
        && !ctx.detected_technologies.iter().any(|t| is_container_technology(t));
    if legacy_heavy {
        return Signal::heuristic(Treatment::Rehost, SignalConfidence::Low);
    }
    Signal::unknown(Treatment::Rehost)
}

fn derive_network_exposure(ctx: &NormalizedContext) -> Signal<NetworkExposure> {
    if let Some(hint) = ctx.network_exposure_hint {
        return Signal::heuristic(hint, SignalConfidence::Medium);
    }
    match ctx.app_type.as_deref() {
        Some(t) if t.contains("web") || t.contains("public") || t.contains("portal") => {
            Signal::heuristic(NetworkExposure::External, SignalConfidence::Low)
        }
        Some(_) => Signal::heuristic(NetworkExposure::Internal, SignalConfidence::Low),
        None => Signal::unknown(NetworkExposure::Internal),
    }
}

/// Pass 2: App-Mod authoritative facts override heuristics.
fn apply_app_mod_overrides(
    ctx: &NormalizedContext,
    intent: &mut Intent,
    rejected: &mut Vec<RejectedInference>,
) {
    let app_mod = &ctx.app_mod;

    // Container feasibility with a real service decomposition reads as
    // microservices, regardless of what the server inventory suggested.
    let distinct_services: std::collections::BTreeSet<&String> =
        ctx.approved_services.values().collect();
    if app_mod.container_ready && distinct_services.len() >= MICROSERVICES_MIN_DISTINCT_SERVICES {
        let heuristic = intent.likely_runtime_model;
        if heuristic.value != RuntimeModel::Microservices {
            if heuristic.confidence > SignalConfidence::Unknown {
                debug!(
                    rejected = %intent.value_label(Dimension::RuntimeModel),
                    "app-mod container evidence overrides runtime-model heuristic"
                );
                rejected.push(RejectedInference {
                    dimension: Dimension::RuntimeModel,
                    rejected_value: intent.value_label(Dimension::RuntimeModel),
                    kept_value: "microservices".to_string(),
                    reason: format!(
                        "App-Mod reports container_ready with {} distinct approved services",
                        distinct_services.len()
                    ),
                });
            }
            intent.likely_runtime_model = Signal::app_mod(RuntimeModel::Microservices);
        } else {
            // Heuristic agreed; upgrade the confidence to the evidence.
            intent.likely_runtime_model = Signal::app_mod(RuntimeModel::Microservices);
        }
    }

    // A declared treatment is never overridden, but a conflicting App-Mod
    // recommendation is still worth surfacing.
    if let Some(declared) = ctx.declared_treatment {
        let suggestion = derive_treatment(&NormalizedContext {
            declared_treatment: None,
            ..ctx.clone()
        });
        if suggestion.source == crate::core::SignalSource::AppMod && suggestion.value != declared {
            rejected.push(RejectedInference {
                dimension: Dimension::Treatment,
                rejected_value: serde_json::to_value(suggestion.value)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default(),
                kept_value: serde_json::to_value(declared)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default(),
                reason: "declared treatment retained over App-Mod recommendation".to_string(),
            });
        }
    }
}

/// Derive the full intent from a normalized context.
pub fn derive_intent(ctx: &NormalizedContext) -> DerivedIntent {
    let treatment = derive_treatment(ctx);
    let mut intent = Intent {
        likely_runtime_model: derive_runtime_model(ctx),
        modernization_depth_feasible: derive_modernization_depth(ctx),
        cloud_native_feasibility: derive_cloud_native_feasibility(ctx),
        operational_maturity_estimate: derive_operational_maturity(ctx, &treatment),
        availability_requirement: derive_availability(ctx),
        security_requirement: derive_security(ctx),
        cost_posture: derive_cost_posture(ctx),
        network_exposure: derive_network_exposure(ctx),
        time_category: match ctx.declared_time_category {
            Some(tc) => Signal::declared(Some(tc)),
            None => Signal::unknown(None),
        },
        treatment,
    };

    let mut rejected = Vec::new();
    apply_app_mod_overrides(ctx, &mut intent, &mut rejected);
    DerivedIntent { intent, rejected }
}
