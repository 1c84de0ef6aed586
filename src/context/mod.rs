//! Application context: raw upstream shapes, technology canonicalization,
//! and the normalizer that turns assessment data into engine facts.

mod normalizer;
mod raw;
pub mod technology;

pub use normalizer::{
    normalize, normalize_from_str, AppModSummary, NormalizedContext, ServerTier,
    UtilizationProfile, VmReadinessDistribution,
};
pub use raw::{
    RawAppModResult, RawAppOverview, RawApprovedService, RawAssessment, RawDetectedTechnology,
    RawServerDetail,
};
