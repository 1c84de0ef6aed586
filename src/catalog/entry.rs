//! Catalog entry model.

use crate::core::types::{
    AvailabilityModel, CatalogQuality, Complexity, CostProfile, Family, NotSuitableFor,
    RuntimeModel, SecurityLevel, SignalConfidence, TimeCategory, Treatment, WorkloadDomain,
};
use crate::core::OperatingModel;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Provenance of a single classified field, kept for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationMeta {
    pub confidence: SignalConfidence,
    pub source: String,
}

/// One reference architecture from the compiled catalog.
///
/// Sets use `BTreeSet` so iteration order (and therefore every downstream
/// ordering) is deterministic. Fields without a serde default are required;
/// an entry missing one is dropped by the loader with a warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub architecture_id: String,
    pub name: String,
    #[serde(default)]
    pub pattern_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub learn_url: Option<String>,

    pub family: Family,
    pub workload_domain: WorkloadDomain,

    #[serde(default)]
    pub expected_runtime_models: BTreeSet<RuntimeModel>,
    #[serde(default)]
    pub supported_treatments: BTreeSet<Treatment>,
    #[serde(default)]
    pub supported_time_categories: BTreeSet<TimeCategory>,
    #[serde(default)]
    pub availability_models: BTreeSet<AvailabilityModel>,

    pub security_level: SecurityLevel,
    pub operating_model_required: OperatingModel,
    pub cost_profile: CostProfile,
    pub complexity: Complexity,

    #[serde(default)]
    pub core_services: BTreeSet<String>,
    #[serde(default)]
    pub supporting_services: BTreeSet<String>,
    #[serde(default)]
    pub browse_tags: BTreeSet<String>,
    #[serde(default)]
    pub browse_categories: BTreeSet<String>,
    #[serde(default)]
    pub not_suitable_for: BTreeSet<NotSuitableFor>,

    pub catalog_quality: CatalogQuality,

    /// Per-field classification provenance, keyed by field name.
    #[serde(default)]
    pub classification: BTreeMap<String, ClassificationMeta>,
}

impl CatalogEntry {
    /// Strongest availability topology this entry offers.
    pub fn max_availability_rank(&self) -> Option<u8> {
        self.availability_models.iter().map(|m| m.rank()).max()
    }
}
