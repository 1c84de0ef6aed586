//! Serde shapes for the upstream assessment document.
//!
//! These mirror the wire format as produced by the assessment tooling,
//! including its quirks: the `business_crtiticality` misspelling and the
//! `App Mod results` key with embedded spaces. Everything except the
//! application name is optional; normalization decides what the absence of
//! a field means.

use crate::core::AppModStatus;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RawAssessment {
    pub app_overview: RawAppOverview,
    #[serde(default, rename = "detected_technology_running")]
    pub detected_technology: Vec<RawDetectedTechnology>,
    #[serde(default, rename = "app_approved_azure_services")]
    pub approved_services: Vec<RawApprovedService>,
    #[serde(default, rename = "server_details")]
    pub servers: Vec<RawServerDetail>,
    #[serde(default, rename = "App Mod results", alias = "app_mod_results")]
    pub app_mod_results: Vec<RawAppModResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAppOverview {
    pub application: String,
    #[serde(default)]
    pub app_type: Option<String>,
    // Upstream emits the misspelled key; accept the corrected one too.
    #[serde(default, rename = "business_crtiticality", alias = "business_criticality")]
    pub business_criticality: Option<String>,
    #[serde(default)]
    pub treatment: Option<String>,
    #[serde(default)]
    pub time_category: Option<String>,
    #[serde(default, alias = "compliance")]
    pub compliance_keywords: Vec<String>,
    #[serde(default)]
    pub network_exposure_hint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDetectedTechnology {
    #[serde(alias = "technology", alias = "name")]
    pub tech: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawApprovedService {
    #[serde(alias = "technology")]
    pub tech: String,
    #[serde(alias = "azure_service", alias = "service")]
    pub approved_service: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawServerDetail {
    #[serde(default, alias = "server_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default, alias = "operating_system")]
    pub os: Option<String>,
    #[serde(default, alias = "tier", alias = "role")]
    pub server_role: Option<String>,
    #[serde(default, alias = "cpu_utilization_percent")]
    pub cpu_utilization: Option<f64>,
    #[serde(default, alias = "vm_readiness")]
    pub readiness: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAppModResult {
    pub platform: String,
    pub status: AppModStatus,
    #[serde(default)]
    pub container_ready: Option<bool>,
    #[serde(default)]
    pub recommended_targets: Vec<String>,
}
