//! Controlled vocabularies used across the engine.
//!
//! Every enum here is a closed set with a fixed snake_case wire spelling.
//! The ordered scales (`SecurityLevel`, `OperatingModel`, `AvailabilityModel`)
//! expose a numeric `rank()` so comparisons never go through strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gartner 8R migration treatments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    Retire,
    Tolerate,
    Rehost,
    Replatform,
    Refactor,
    Replace,
    Rebuild,
    Retain,
}

/// Gartner TIME strategic postures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeCategory {
    Tolerate,
    Migrate,
    Invest,
    Eliminate,
}

/// Architecture family of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Foundation,
    Iaas,
    Paas,
    CloudNative,
    Data,
    Integration,
    Specialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadDomain {
    Web,
    Data,
    Integration,
    Security,
    Ai,
    Infrastructure,
    General,
}

/// Application runtime shapes a reference architecture expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeModel {
    Monolith,
    NTier,
    Api,
    Microservices,
    EventDriven,
    Batch,
    Mixed,
}

/// Availability topologies, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityModel {
    SingleRegion,
    SingleRegionHa,
    MultiRegion,
    ActiveActive,
}

impl AvailabilityModel {
    pub fn rank(&self) -> u8 {
        match self {
            AvailabilityModel::SingleRegion => 0,
            AvailabilityModel::SingleRegionHa => 1,
            AvailabilityModel::MultiRegion => 2,
            AvailabilityModel::ActiveActive => 3,
        }
    }
}

/// Security posture scale. Totally ordered: basic < enterprise < regulated
/// < highly_regulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityLevel {
    Basic,
    Enterprise,
    Regulated,
    HighlyRegulated,
}

impl SecurityLevel {
    pub fn rank(&self) -> u8 {
        match self {
            SecurityLevel::Basic => 0,
            SecurityLevel::Enterprise => 1,
            SecurityLevel::Regulated => 2,
            SecurityLevel::HighlyRegulated => 3,
        }
    }
}

/// Team operating-model maturity scale. Totally ordered: traditional_it <
/// transitional < devops < sre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingModel {
    TraditionalIt,
    Transitional,
    Devops,
    Sre,
}

impl OperatingModel {
    pub fn rank(&self) -> u8 {
        match self {
            OperatingModel::TraditionalIt => 0,
            OperatingModel::Transitional => 1,
            OperatingModel::Devops => 2,
            OperatingModel::Sre => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostProfile {
    CostMinimized,
    Balanced,
    ScaleOptimized,
    InnovationFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn rank(&self) -> u8 {
        match self {
            Complexity::Low => 0,
            Complexity::Medium => 1,
            Complexity::High => 2,
        }
    }
}

/// Provenance tier of a catalog entry. Governs the multiplicative quality
/// weight and the final tie-break. `Discard` is accepted on load so the
/// quality gate can report it as a structured exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogQuality {
    Curated,
    AiEnriched,
    AiSuggested,
    ExampleOnly,
    Discard,
}

impl CatalogQuality {
    /// Tie-break rank: lower is better.
    pub fn rank(&self) -> u8 {
        match self {
            CatalogQuality::Curated => 0,
            CatalogQuality::AiEnriched => 1,
            CatalogQuality::AiSuggested => 2,
            CatalogQuality::ExampleOnly => 3,
            CatalogQuality::Discard => 4,
        }
    }

    pub fn is_scorable(&self) -> bool {
        !matches!(self, CatalogQuality::Discard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessCriticality {
    Low,
    Medium,
    High,
    MissionCritical,
}

impl BusinessCriticality {
    pub fn rank(&self) -> u8 {
        match self {
            BusinessCriticality::Low => 0,
            BusinessCriticality::Medium => 1,
            BusinessCriticality::High => 2,
            BusinessCriticality::MissionCritical => 3,
        }
    }
}

/// Per-signal trust level. Drives confidence penalties and question
/// generation. Ordered so `Unknown < Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalConfidence {
    Unknown,
    Low,
    Medium,
    High,
}

impl fmt::Display for SignalConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignalConfidence::High => "HIGH",
            SignalConfidence::Medium => "MEDIUM",
            SignalConfidence::Low => "LOW",
            SignalConfidence::Unknown => "UNKNOWN",
        };
        write!(f, "{s}")
    }
}

/// Where a signal value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSource {
    Declared,
    AppMod,
    Heuristic,
    UserAnswer,
    Default,
}

/// Per-platform feasibility statement from the upstream App-Mod assessment.
/// Wire spellings are PascalCase (`Supported`, `NotSupported`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppModStatus {
    Supported,
    Ready,
    NotSupported,
    Unknown,
}

impl AppModStatus {
    /// Supported and NotSupported are authoritative; Ready and Unknown are
    /// advisory.
    pub fn is_authoritative(&self) -> bool {
        matches!(self, AppModStatus::Supported | AppModStatus::NotSupported)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkExposure {
    External,
    Internal,
    Mixed,
}

/// How deep a modernization the App-Mod evidence supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModernizationDepth {
    RehostOnly,
    Replatform,
    Refactor,
    Rebuild,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feasibility {
    Low,
    Medium,
    High,
}

/// Closed vocabulary of `not_suitable_for` exclusion markers on catalog
/// entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotSuitableFor {
    SingleVmWorkloads,
    LargeServerFleets,
    MissionCriticalWorkloads,
    RegulatedWorkloads,
    InternetFacingWorkloads,
    BatchWorkloads,
    LegacyOperatingSystems,
    LowMaturityTeams,
}
