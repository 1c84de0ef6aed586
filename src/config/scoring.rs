//! Scoring configuration for architecture recommendation.
//!
//! This module contains all scoring-related configuration types:
//! - Weight configuration for the ten scored dimensions
//! - Quality weights per catalog provenance tier
//! - Confidence penalties and the penalty cap
//! - Eligibility thresholds (operating-model gap allowance)
//! - Question-generation threshold

use crate::core::SignalConfidence;
use serde::{Deserialize, Serialize};

/// Weights for the ten scored dimensions. Must sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for treatment alignment (0.0-1.0)
    #[serde(default = "default_treatment_weight")]
    pub treatment_alignment: f64,

    /// Weight for App-Mod platform compatibility (0.0-1.0)
    #[serde(default = "default_platform_weight")]
    pub platform_compatibility: f64,

    /// Weight for App-Mod recommended-target match (0.0-1.0)
    #[serde(default = "default_app_mod_recommended_weight")]
    pub app_mod_recommended: f64,

    /// Weight for runtime-model compatibility (0.0-1.0)
    #[serde(default = "default_runtime_model_weight")]
    pub runtime_model_compatibility: f64,

    /// Weight for approved-service overlap with core services (0.0-1.0)
    #[serde(default = "default_service_overlap_weight")]
    pub service_overlap: f64,

    /// Weight for availability alignment (0.0-1.0)
    #[serde(default = "default_availability_weight")]
    pub availability_alignment: f64,

    /// Weight for operating-model fit (0.0-1.0)
    #[serde(default = "default_operating_model_weight")]
    pub operating_model_fit: f64,

    /// Weight for complexity tolerance (0.0-1.0)
    #[serde(default = "default_complexity_weight")]
    pub complexity_tolerance: f64,

    /// Weight for browse-tag overlap (0.0-1.0)
    #[serde(default = "default_browse_tag_weight")]
    pub browse_tag_overlap: f64,

    /// Weight for cost-posture alignment (0.0-1.0)
    #[serde(default = "default_cost_posture_weight")]
    pub cost_posture_alignment: f64,
}

pub fn default_treatment_weight() -> f64 {
    0.20
}
pub fn default_platform_weight() -> f64 {
    0.15
}
pub fn default_app_mod_recommended_weight() -> f64 {
    0.10
}
pub fn default_runtime_model_weight() -> f64 {
    0.10
}
pub fn default_service_overlap_weight() -> f64 {
    0.10
}
pub fn default_availability_weight() -> f64 {
    0.10
}
pub fn default_operating_model_weight() -> f64 {
    0.08
}
pub fn default_complexity_weight() -> f64 {
    0.07
}
pub fn default_browse_tag_weight() -> f64 {
    0.05
}
pub fn default_cost_posture_weight() -> f64 {
    0.05
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            treatment_alignment: default_treatment_weight(),
            platform_compatibility: default_platform_weight(),
            app_mod_recommended: default_app_mod_recommended_weight(),
            runtime_model_compatibility: default_runtime_model_weight(),
            service_overlap: default_service_overlap_weight(),
            availability_alignment: default_availability_weight(),
            operating_model_fit: default_operating_model_weight(),
            complexity_tolerance: default_complexity_weight(),
            browse_tag_overlap: default_browse_tag_weight(),
            cost_posture_alignment: default_cost_posture_weight(),
        }
    }
}

impl ScoringWeights {
    // Pure function: check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    fn as_named_slice(&self) -> [(&'static str, f64); 10] {
        [
            ("treatment_alignment", self.treatment_alignment),
            ("platform_compatibility", self.platform_compatibility),
            ("app_mod_recommended", self.app_mod_recommended),
            ("runtime_model_compatibility", self.runtime_model_compatibility),
            ("service_overlap", self.service_overlap),
            ("availability_alignment", self.availability_alignment),
            ("operating_model_fit", self.operating_model_fit),
            ("complexity_tolerance", self.complexity_tolerance),
            ("browse_tag_overlap", self.browse_tag_overlap),
            ("cost_posture_alignment", self.cost_posture_alignment),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.as_named_slice().iter().map(|(_, w)| w).sum()
    }

    /// Validate that each weight is in [0, 1] and the sum is 1.0 within
    /// 1e-9.
    pub fn validate(&self) -> Result<(), String> {
        for (name, weight) in self.as_named_slice() {
            if !Self::is_valid_weight(weight) {
                return Err(format!("{name} weight must be between 0.0 and 1.0, got {weight}"));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(format!("scoring weights must sum to 1.0, but sum to {sum:.9}"));
        }
        Ok(())
    }

    /// Rescale so the weights sum to exactly 1.0. Only meaningful after a
    /// looser tolerance check; a zero sum is left untouched.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum <= 0.0 {
            return;
        }
        self.treatment_alignment /= sum;
        self.platform_compatibility /= sum;
        self.app_mod_recommended /= sum;
        self.runtime_model_compatibility /= sum;
        self.service_overlap /= sum;
        self.availability_alignment /= sum;
        self.operating_model_fit /= sum;
        self.complexity_tolerance /= sum;
        self.browse_tag_overlap /= sum;
        self.cost_posture_alignment /= sum;
    }
}

/// Multiplicative weight per catalog provenance tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityWeights {
    #[serde(default = "default_curated_weight")]
    pub curated: f64,
    #[serde(default = "default_ai_enriched_weight")]
    pub ai_enriched: f64,
    #[serde(default = "default_ai_suggested_weight")]
    pub ai_suggested: f64,
    #[serde(default = "default_example_only_weight")]
    pub example_only: f64,
}

pub fn default_curated_weight() -> f64 {
    1.00
}
pub fn default_ai_enriched_weight() -> f64 {
    0.95
}
pub fn default_ai_suggested_weight() -> f64 {
    0.85
}
pub fn default_example_only_weight() -> f64 {
    0.70
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            curated: default_curated_weight(),
            ai_enriched: default_ai_enriched_weight(),
            ai_suggested: default_ai_suggested_weight(),
            example_only: default_example_only_weight(),
        }
    }
}

impl QualityWeights {
    /// Quality weights must be in (0, 1] and monotone non-increasing down
    /// the provenance tiers, otherwise quality monotonicity breaks.
    pub fn validate(&self) -> Result<(), String> {
        let tiers = [
            ("curated", self.curated),
            ("ai_enriched", self.ai_enriched),
            ("ai_suggested", self.ai_suggested),
            ("example_only", self.example_only),
        ];
        for (name, w) in tiers {
            if !(w > 0.0 && w <= 1.0) {
                return Err(format!("quality weight {name} must be in (0.0, 1.0], got {w}"));
            }
        }
        if self.curated < self.ai_enriched
            || self.ai_enriched < self.ai_suggested
            || self.ai_suggested < self.example_only
        {
            return Err("quality weights must be non-increasing from curated to example_only".into());
        }
        Ok(())
    }
}

/// Per-signal confidence penalties and the total cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidencePenalties {
    #[serde(default = "default_high_penalty")]
    pub high: f64,
    #[serde(default = "default_medium_penalty")]
    pub medium: f64,
    #[serde(default = "default_low_penalty")]
    pub low: f64,
    #[serde(default = "default_unknown_penalty")]
    pub unknown: f64,
    /// Total penalty is capped here regardless of how many signals are weak.
    #[serde(default = "default_penalty_cap")]
    pub cap: f64,
}

pub fn default_high_penalty() -> f64 {
    0.0
}
pub fn default_medium_penalty() -> f64 {
    0.05
}
pub fn default_low_penalty() -> f64 {
    0.15
}
pub fn default_unknown_penalty() -> f64 {
    0.25
}
pub fn default_penalty_cap() -> f64 {
    0.25
}

impl Default for ConfidencePenalties {
    fn default() -> Self {
        Self {
            high: default_high_penalty(),
            medium: default_medium_penalty(),
            low: default_low_penalty(),
            unknown: default_unknown_penalty(),
            cap: default_penalty_cap(),
        }
    }
}

impl ConfidencePenalties {
    pub fn for_confidence(&self, confidence: SignalConfidence) -> f64 {
        match confidence {
            SignalConfidence::High => self.high,
            SignalConfidence::Medium => self.medium,
            SignalConfidence::Low => self.low,
            SignalConfidence::Unknown => self.unknown,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let values = [
            ("high", self.high),
            ("medium", self.medium),
            ("low", self.low),
            ("unknown", self.unknown),
            ("cap", self.cap),
        ];
        for (name, v) in values {
            if !(0.0..=1.0).contains(&v) {
                return Err(format!("penalty {name} must be in [0.0, 1.0], got {v}"));
            }
        }
        if self.high > self.medium || self.medium > self.low || self.low > self.unknown {
            return Err("penalties must be non-decreasing from HIGH to UNKNOWN".into());
        }
        Ok(())
    }
}

/// Eligibility thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// An entry may require at most this many maturity levels above the
    /// team's estimate. The default of 1 admits a one-level stretch.
    #[serde(default = "default_max_operating_model_gap")]
    pub max_operating_model_gap: u8,
}

pub fn default_max_operating_model_gap() -> u8 {
    1
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            max_operating_model_gap: default_max_operating_model_gap(),
        }
    }
}

/// Question-generation thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionConfig {
    /// A question is generated when the dimension's confidence is at or
    /// below this level (always-ask questions ignore it).
    #[serde(default = "default_ask_at_or_below")]
    pub ask_at_or_below: SignalConfidence,
}

pub fn default_ask_at_or_below() -> SignalConfidence {
    SignalConfidence::Low
}

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            ask_at_or_below: default_ask_at_or_below(),
        }
    }
}

/// Full engine configuration, passed into [`crate::engine::Engine::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub quality_weights: QualityWeights,
    #[serde(default)]
    pub penalties: ConfidencePenalties,
    #[serde(default)]
    pub eligibility: EligibilityConfig,
    #[serde(default)]
    pub questions: QuestionConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.weights.validate()?;
        self.quality_weights.validate()?;
        self.penalties.validate()?;
        Ok(())
    }
}
