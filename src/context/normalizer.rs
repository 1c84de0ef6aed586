//! Context normalization: raw assessment facts to normalized fields with
//! provenance.
//!
//! Confidence assignment follows a fixed ladder: explicit authoritative
//! fields are HIGH, corroborated inferences MEDIUM, single weak inferences
//! LOW, defaults UNKNOWN. Nothing here guesses silently; a defaulted field
//! is visibly UNKNOWN.

use super::raw::{RawAssessment, RawServerDetail};
use super::technology;
use crate::core::{
    AppModStatus, BusinessCriticality, EngineError, NetworkExposure, Signal, TimeCategory,
    Treatment,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Aggregate CPU utilization across the server inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationProfile {
    Low,
    Moderate,
    High,
    Unknown,
}

/// Server tier classification from inventory roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerTier {
    Web,
    App,
    Db,
    Other,
}

/// Counts of VM migration readiness verdicts across the inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmReadinessDistribution {
    pub ready: usize,
    pub conditionally_ready: usize,
    pub not_ready: usize,
    pub unknown: usize,
}

/// Folded App-Mod assessment: per-platform statuses keyed by canonical
/// service name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppModSummary {
    pub platforms: BTreeMap<String, AppModStatus>,
    pub container_ready: bool,
    pub recommended_targets: BTreeSet<String>,
}

impl AppModSummary {
    pub fn has_data(&self) -> bool {
        !self.platforms.is_empty()
    }

    pub fn has_authoritative_data(&self) -> bool {
        self.platforms.values().any(|s| s.is_authoritative())
    }

    pub fn status_of(&self, canonical_service: &str) -> Option<AppModStatus> {
        self.platforms.get(canonical_service).copied()
    }

    /// Platforms the assessment ruled out.
    pub fn not_supported_services(&self) -> impl Iterator<Item = &str> {
        self.platforms
            .iter()
            .filter(|(_, s)| **s == AppModStatus::NotSupported)
            .map(|(p, _)| p.as_str())
    }
}

/// Normalized application facts, ready for intent derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedContext {
    pub application_name: String,
    pub app_type: Option<String>,
    pub declared_treatment: Option<Treatment>,
    pub declared_time_category: Option<TimeCategory>,
    pub business_criticality: Signal<BusinessCriticality>,
    pub server_count: usize,
    pub environments_present: BTreeSet<String>,
    pub os_mix: BTreeSet<String>,
    pub utilization_profile: UtilizationProfile,
    pub vm_readiness: VmReadinessDistribution,
    pub tiers_observed: BTreeSet<ServerTier>,
    /// Canonical, deduplicated technology names.
    pub detected_technologies: BTreeSet<String>,
    /// Canonical detected tech -> canonical approved cloud service.
    pub approved_services: BTreeMap<String, String>,
    pub app_mod: AppModSummary,
    pub compliance_keywords: Vec<String>,
    pub network_exposure_hint: Option<NetworkExposure>,
}

/// Map free-form criticality spellings onto the closed scale.
fn normalize_criticality(raw: &str) -> Option<BusinessCriticality> {
    let key: String = raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect::<String>().to_lowercase();
    match key.as_str() {
        "low" | "minimal" => Some(BusinessCriticality::Low),
        "medium" | "moderate" | "normal" => Some(BusinessCriticality::Medium),
        "high" | "important" => Some(BusinessCriticality::High),
        "extreme" | "critical" | "missioncritical" | "mission" => {
            Some(BusinessCriticality::MissionCritical)
        }
        _ => None,
    }
}

fn parse_wire<T: serde::de::DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_lowercase())).ok()
}

fn classify_tier(role: &str) -> ServerTier {
    let role = role.to_lowercase();
    if role.contains("web") || role.contains("frontend") || role.contains("iis") {
        ServerTier::Web
    } else if role.contains("db") || role.contains("database") || role.contains("sql") {
        ServerTier::Db
    } else if role.contains("app") || role.contains("application") || role.contains("middle") {
        ServerTier::App
    } else {
        ServerTier::Other
    }
}

fn utilization_profile(servers: &[RawServerDetail]) -> UtilizationProfile {
    let samples: Vec<f64> = servers.iter().filter_map(|s| s.cpu_utilization).collect();
    if samples.is_empty() {
        return UtilizationProfile::Unknown;
    }
    let avg = samples.iter().sum::<f64>() / samples.len() as f64;
    if avg < 20.0 {
        UtilizationProfile::Low
    } else if avg > 70.0 {
        UtilizationProfile::High
    } else {
        UtilizationProfile::Moderate
    }
}

fn readiness_distribution(servers: &[RawServerDetail]) -> VmReadinessDistribution {
    let mut dist = VmReadinessDistribution::default();
    for server in servers {
        match server.readiness.as_deref().map(str::to_lowercase).as_deref() {
            Some("ready") => dist.ready += 1,
            Some("conditionally_ready") | Some("conditionally ready") => {
                dist.conditionally_ready += 1
            }
            Some("not_ready") | Some("not ready") => dist.not_ready += 1,
            _ => dist.unknown += 1,
        }
    }
    dist
}

fn normalize_exposure_hint(raw: &str) -> Option<NetworkExposure> {
    match raw.trim().to_lowercase().as_str() {
        "external" | "internet" | "public" | "internet-facing" => Some(NetworkExposure::External),
        "internal" | "private" | "intranet" => Some(NetworkExposure::Internal),
        "mixed" | "hybrid" => Some(NetworkExposure::Mixed),
        _ => None,
    }
}

/// Normalize a raw assessment document into engine facts.
pub fn normalize(raw: &RawAssessment) -> Result<NormalizedContext, EngineError> {
    let overview = &raw.app_overview;
    let application_name = overview.application.trim().to_string();
    if application_name.is_empty() {
        return Err(EngineError::ContextInvalid(
            "app_overview.application must not be empty".into(),
        ));
    }

    let declared_treatment = match overview.treatment.as_deref() {
        None => None,
        Some(t) => Some(parse_wire::<Treatment>(t).ok_or_else(|| {
            EngineError::ContextInvalid(format!("unknown declared treatment {t:?}"))
        })?),
    };
    let declared_time_category = match overview.time_category.as_deref() {
        None => None,
        Some(t) => Some(parse_wire::<TimeCategory>(t).ok_or_else(|| {
            EngineError::ContextInvalid(format!("unknown time category {t:?}"))
        })?),
    };

    let business_criticality = match overview.business_criticality.as_deref() {
        Some(raw_value) => match normalize_criticality(raw_value) {
            Some(value) => Signal::declared(value),
            None => {
                return Err(EngineError::ContextInvalid(format!(
                    "unrecognized business criticality {raw_value:?}"
                )))
            }
        },
        None => Signal::unknown(BusinessCriticality::Medium),
    };

    let mut detected_technologies = BTreeSet::new();
    for raw_tech in &raw.detected_technology {
        match technology::canonicalize_technology(&raw_tech.tech) {
            Some(canonical) => {
                detected_technologies.insert(canonical.to_string());
            }
            None => {
                if technology::is_prose_fragment(&raw_tech.tech) {
                    debug!(tech = raw_tech.tech.as_str(), "rejected prose fragment as technology");
                } else {
                    debug!(tech = raw_tech.tech.as_str(), "technology not in the allow-list");
                }
            }
        }
    }

    let mut approved_services = BTreeMap::new();
    for raw_service in &raw.approved_services {
        let tech = technology::canonicalize_technology(&raw_service.tech)
            .map(str::to_string)
            .unwrap_or_else(|| technology::fallback_service_name(&raw_service.tech));
        let service = technology::canonicalize_platform(&raw_service.approved_service)
            .map(str::to_string)
            .unwrap_or_else(|| technology::fallback_service_name(&raw_service.approved_service));
        approved_services.insert(tech, service);
    }

    let mut app_mod = AppModSummary::default();
    for result in &raw.app_mod_results {
        let service = technology::canonicalize_platform(&result.platform)
            .map(str::to_string)
            .unwrap_or_else(|| technology::fallback_service_name(&result.platform));
        app_mod.platforms.insert(service, result.status);
        if result.container_ready == Some(true) {
            app_mod.container_ready = true;
        }
        for target in &result.recommended_targets {
            let target = technology::canonicalize_platform(target)
                .map(str::to_string)
                .unwrap_or_else(|| technology::fallback_service_name(target));
            app_mod.recommended_targets.insert(target);
        }
    }

    let environments_present = raw
        .servers
        .iter()
        .filter_map(|s| s.environment.as_deref())
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .collect();
    let os_mix = raw
        .servers
        .iter()
        .filter_map(|s| s.os.as_deref())
        .map(|os| os.trim().to_string())
        .filter(|os| !os.is_empty())
        .collect();
    let tiers_observed = raw
        .servers
        .iter()
        .filter_map(|s| s.server_role.as_deref())
        .map(classify_tier)
        .collect();

    let compliance_keywords = overview
        .compliance_keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    Ok(NormalizedContext {
        application_name,
        app_type: overview.app_type.as_deref().map(|t| t.trim().to_lowercase()),
        declared_treatment,
        declared_time_category,
        business_criticality,
        server_count: raw.servers.len(),
        environments_present,
        os_mix,
        utilization_profile: utilization_profile(&raw.servers),
        vm_readiness: readiness_distribution(&raw.servers),
        tiers_observed,
        detected_technologies,
        approved_services,
        app_mod,
        compliance_keywords,
        network_exposure_hint: overview
            .network_exposure_hint
            .as_deref()
            .and_then(normalize_exposure_hint),
    })
}

/// Parse and normalize a context document from its JSON text.
pub fn normalize_from_str(contents: &str) -> Result<NormalizedContext, EngineError> {
    let raw: RawAssessment = serde_json::from_str(contents)
        .map_err(|e| EngineError::ContextInvalid(format!("context document does not match schema: {e}")))?;
    normalize(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SignalConfidence, SignalSource};
    use serde_json::json;

    fn raw_from(value: serde_json::Value) -> RawAssessment {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn criticality_spellings_map_onto_scale() {
        for (input, expected) in [
            ("High", BusinessCriticality::High),
            ("Extreme", BusinessCriticality::MissionCritical),
            ("MissionCritical", BusinessCriticality::MissionCritical),
            ("mission critical", BusinessCriticality::MissionCritical),
            ("moderate", BusinessCriticality::Medium),
        ] {
            assert_eq!(normalize_criticality(input), Some(expected), "input {input:?}");
        }
        assert_eq!(normalize_criticality("sideways"), None);
    }

    #[test]
    fn declared_criticality_is_high_confidence() {
        let raw = raw_from(json!({
            "app_overview": { "application": "x", "business_crtiticality": "High" }
        }));
        let ctx = normalize(&raw).unwrap();
        assert_eq!(ctx.business_criticality.value, BusinessCriticality::High);
        assert_eq!(ctx.business_criticality.confidence, SignalConfidence::High);
        assert_eq!(ctx.business_criticality.source, SignalSource::Declared);
    }

    #[test]
    fn absent_criticality_defaults_to_unknown_medium() {
        let raw = raw_from(json!({ "app_overview": { "application": "x" } }));
        let ctx = normalize(&raw).unwrap();
        assert_eq!(ctx.business_criticality.value, BusinessCriticality::Medium);
        assert_eq!(ctx.business_criticality.confidence, SignalConfidence::Unknown);
    }

    #[test]
    fn unknown_declared_treatment_is_context_invalid() {
        let raw = raw_from(json!({
            "app_overview": { "application": "x", "treatment": "teleport" }
        }));
        assert!(matches!(normalize(&raw).unwrap_err(), EngineError::ContextInvalid(_)));
    }

    #[test]
    fn technologies_are_canonicalized_and_deduplicated() {
        let raw = raw_from(json!({
            "app_overview": { "application": "x" },
            "detected_technology_running": [
                { "tech": "SQL Server" },
                { "tech": "sqlserver" },
                { "tech": "the app uses Java and Tomcat" },
                { "tech": "Node.js" }
            ]
        }));
        let ctx = normalize(&raw).unwrap();
        assert_eq!(
            ctx.detected_technologies.iter().cloned().collect::<Vec<_>>(),
            vec!["nodejs".to_string(), "sql_server".to_string()]
        );
    }

    #[test]
    fn app_mod_results_fold_into_summary() {
        let raw = raw_from(json!({
            "app_overview": { "application": "x" },
            "App Mod results": [
                { "platform": "AKS", "status": "Supported", "container_ready": true,
                  "recommended_targets": ["AKS", "Container Apps"] },
                { "platform": "App Service", "status": "Ready" }
            ]
        }));
        let ctx = normalize(&raw).unwrap();
        assert!(ctx.app_mod.container_ready);
        assert!(ctx.app_mod.has_authoritative_data());
        assert_eq!(
            ctx.app_mod.status_of("azure_kubernetes_service"),
            Some(AppModStatus::Supported)
        );
        assert!(ctx.app_mod.recommended_targets.contains("azure_container_apps"));
    }

    #[test]
    fn server_inventory_summaries() {
        let raw = raw_from(json!({
            "app_overview": { "application": "x" },
            "server_details": [
                { "name": "web01", "environment": "Prod", "os": "Windows Server 2019",
                  "role": "web", "cpu_utilization": 10.0, "vm_readiness": "Ready" },
                { "name": "db01", "environment": "prod", "os": "Windows Server 2019",
                  "role": "sql database", "cpu_utilization": 12.0, "vm_readiness": "Not Ready" }
            ]
        }));
        let ctx = normalize(&raw).unwrap();
        assert_eq!(ctx.server_count, 2);
        assert_eq!(ctx.environments_present.len(), 1);
        assert_eq!(ctx.utilization_profile, UtilizationProfile::Low);
        assert_eq!(ctx.vm_readiness.ready, 1);
        assert_eq!(ctx.vm_readiness.not_ready, 1);
        assert!(ctx.tiers_observed.contains(&ServerTier::Web));
        assert!(ctx.tiers_observed.contains(&ServerTier::Db));
    }

    #[test]
    fn exposure_hint_normalizes() {
        let raw = raw_from(json!({
            "app_overview": { "application": "x", "network_exposure_hint": "Internet-facing" }
        }));
        let ctx = normalize(&raw).unwrap();
        assert_eq!(ctx.network_exposure_hint, Some(NetworkExposure::External));
    }
}
