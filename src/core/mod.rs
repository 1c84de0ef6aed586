//! Core vocabulary and error types shared by every subsystem.

pub mod errors;
pub mod signal;
pub mod types;

pub use errors::EngineError;
pub use signal::Signal;
pub use types::{
    AppModStatus, AvailabilityModel, BusinessCriticality, CatalogQuality, Complexity, CostProfile,
    Family, Feasibility, ModernizationDepth, NetworkExposure, NotSuitableFor, OperatingModel,
    RuntimeModel, SecurityLevel, SignalConfidence, SignalSource, TimeCategory, Treatment,
    WorkloadDomain,
};
