//! Derived architectural intent.
//!
//! An [`Intent`] is the set of dimensions the engine scores an application
//! against. Each dimension carries a [`Signal`] with confidence and
//! provenance. Derivation is two-pass: heuristics first, then an App-Mod
//! override pass that upgrades conflicting signals to HIGH and records the
//! rejected heuristic.

mod deriver;

pub use deriver::{derive_intent, DerivedIntent};

use crate::core::{
    AvailabilityModel, CostProfile, Feasibility, ModernizationDepth, NetworkExposure,
    OperatingModel, RuntimeModel, SecurityLevel, Signal, SignalConfidence, TimeCategory, Treatment,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten tracked intent dimensions. Penalties, assumptions, and question
/// generation all iterate this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    RuntimeModel,
    ModernizationDepth,
    CloudNativeFeasibility,
    OperationalMaturity,
    Availability,
    SecurityLevel,
    CostPosture,
    NetworkExposure,
    Treatment,
    TimeCategory,
}

impl Dimension {
    pub const ALL: [Dimension; 10] = [
        Dimension::RuntimeModel,
        Dimension::ModernizationDepth,
        Dimension::CloudNativeFeasibility,
        Dimension::OperationalMaturity,
        Dimension::Availability,
        Dimension::SecurityLevel,
        Dimension::CostPosture,
        Dimension::NetworkExposure,
        Dimension::Treatment,
        Dimension::TimeCategory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::RuntimeModel => "runtime_model",
            Dimension::ModernizationDepth => "modernization_depth",
            Dimension::CloudNativeFeasibility => "cloud_native_feasibility",
            Dimension::OperationalMaturity => "operational_maturity",
            Dimension::Availability => "availability",
            Dimension::SecurityLevel => "security_level",
            Dimension::CostPosture => "cost_posture",
            Dimension::NetworkExposure => "network_exposure",
            Dimension::Treatment => "treatment",
            Dimension::TimeCategory => "time_category",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The derived architectural intent of one application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub likely_runtime_model: Signal<RuntimeModel>,
    pub modernization_depth_feasible: Signal<ModernizationDepth>,
    pub cloud_native_feasibility: Signal<Feasibility>,
    pub operational_maturity_estimate: Signal<OperatingModel>,
    pub availability_requirement: Signal<AvailabilityModel>,
    pub security_requirement: Signal<SecurityLevel>,
    pub cost_posture: Signal<CostProfile>,
    pub network_exposure: Signal<NetworkExposure>,
    pub treatment: Signal<Treatment>,
    pub time_category: Signal<Option<TimeCategory>>,
}

fn wire_label<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(other) => other.to_string(),
        Err(_) => "unknown".to_string(),
    }
}

impl Intent {
    pub fn confidence_of(&self, dimension: Dimension) -> SignalConfidence {
        match dimension {
            Dimension::RuntimeModel => self.likely_runtime_model.confidence,
            Dimension::ModernizationDepth => self.modernization_depth_feasible.confidence,
            Dimension::CloudNativeFeasibility => self.cloud_native_feasibility.confidence,
            Dimension::OperationalMaturity => self.operational_maturity_estimate.confidence,
            Dimension::Availability => self.availability_requirement.confidence,
            Dimension::SecurityLevel => self.security_requirement.confidence,
            Dimension::CostPosture => self.cost_posture.confidence,
            Dimension::NetworkExposure => self.network_exposure.confidence,
            Dimension::Treatment => self.treatment.confidence,
            Dimension::TimeCategory => self.time_category.confidence,
        }
    }

    pub fn source_of(&self, dimension: Dimension) -> crate::core::SignalSource {
        match dimension {
            Dimension::RuntimeModel => self.likely_runtime_model.source,
            Dimension::ModernizationDepth => self.modernization_depth_feasible.source,
            Dimension::CloudNativeFeasibility => self.cloud_native_feasibility.source,
            Dimension::OperationalMaturity => self.operational_maturity_estimate.source,
            Dimension::Availability => self.availability_requirement.source,
            Dimension::SecurityLevel => self.security_requirement.source,
            Dimension::CostPosture => self.cost_posture.source,
            Dimension::NetworkExposure => self.network_exposure.source,
            Dimension::Treatment => self.treatment.source,
            Dimension::TimeCategory => self.time_category.source,
        }
    }

    /// Wire-spelling label of the current value, for question prompts and
    /// assumption texts.
    pub fn value_label(&self, dimension: Dimension) -> String {
        match dimension {
            Dimension::RuntimeModel => wire_label(&self.likely_runtime_model.value),
            Dimension::ModernizationDepth => wire_label(&self.modernization_depth_feasible.value),
            Dimension::CloudNativeFeasibility => wire_label(&self.cloud_native_feasibility.value),
            Dimension::OperationalMaturity => wire_label(&self.operational_maturity_estimate.value),
            Dimension::Availability => wire_label(&self.availability_requirement.value),
            Dimension::SecurityLevel => wire_label(&self.security_requirement.value),
            Dimension::CostPosture => wire_label(&self.cost_posture.value),
            Dimension::NetworkExposure => wire_label(&self.network_exposure.value),
            Dimension::Treatment => wire_label(&self.treatment.value),
            Dimension::TimeCategory => match self.time_category.value {
                Some(tc) => wire_label(&tc),
                None => "unknown".to_string(),
            },
        }
    }

    /// Signals currently below HIGH, i.e. the assumptions a score rests on.
    pub fn assumed_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| self.confidence_of(*d) != SignalConfidence::High)
            .collect()
    }

    /// Count of signals at LOW or UNKNOWN, used by the overall-confidence
    /// rule.
    pub fn low_signal_count(&self) -> usize {
        Dimension::ALL
            .into_iter()
            .filter(|d| self.confidence_of(*d) <= SignalConfidence::Low)
            .count()
    }
}

/// A heuristic inference that lost to authoritative data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedInference {
    pub dimension: Dimension,
    pub rejected_value: String,
    pub kept_value: String,
    pub reason: String,
}
