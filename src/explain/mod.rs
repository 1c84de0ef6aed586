//! Explanation building: matched/mismatched dimensions, assumptions, and
//! the run summary with its overall-confidence rule.

use crate::catalog::Catalog;
use crate::core::CatalogQuality;
use crate::eligibility::ExclusionReason;
use crate::intent::{Intent, RejectedInference};
use crate::scoring::{DimensionScore, ScoreDimension, ScoredEntry};
use serde::{Deserialize, Serialize};

/// Sub-scores at or above this raw value count as matches.
const MATCH_THRESHOLD: f64 = 0.7;
/// Sub-scores at or below this raw value count as mismatches.
const MISMATCH_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedDimension {
    pub dimension: ScoreDimension,
    pub contribution: f64,
    pub evidence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MismatchedDimension {
    pub dimension: ScoreDimension,
    pub gap: String,
    /// Base-score points this mismatch cost, out of 100.
    pub cost: f64,
}

/// The numbers a score is reconstructed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub quality_weight: f64,
    pub confidence_penalty: f64,
    pub dimensions: Vec<DimensionScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub architecture_id: String,
    pub name: String,
    pub likelihood_score: u32,
    pub catalog_quality: CatalogQuality,
    pub matched_dimensions: Vec<MatchedDimension>,
    pub mismatched_dimensions: Vec<MismatchedDimension>,
    pub assumptions: Vec<String>,
    pub learn_url: Option<String>,
    pub score_breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedArchitecture {
    pub architecture_id: String,
    pub name: String,
    pub reasons: Vec<ExclusionReason>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub primary_recommendation: Option<String>,
    pub confidence_level: ConfidenceLevel,
    pub key_drivers: Vec<String>,
    pub key_risks: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected_inferences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub recommendations: Vec<Recommendation>,
    pub excluded: Vec<ExcludedArchitecture>,
    pub summary: Summary,
}

fn matched_dimensions(dimensions: &[DimensionScore]) -> Vec<MatchedDimension> {
    let mut matched: Vec<MatchedDimension> = dimensions
        .iter()
        .filter(|d| d.score >= MATCH_THRESHOLD)
        .map(|d| MatchedDimension {
            dimension: d.dimension,
            contribution: d.contribution,
            evidence: d.evidence.clone(),
        })
        .collect();
    matched.sort_by(|a, b| {
        b.contribution
            .partial_cmp(&a.contribution)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.dimension.cmp(&b.dimension))
    });
    matched
}

fn mismatched_dimensions(dimensions: &[DimensionScore]) -> Vec<MismatchedDimension> {
    let mut mismatched: Vec<MismatchedDimension> = dimensions
        .iter()
        .filter(|d| d.score <= MISMATCH_THRESHOLD)
        .map(|d| MismatchedDimension {
            dimension: d.dimension,
            gap: d.evidence.clone(),
            cost: d.weight * (1.0 - d.score) * 100.0,
        })
        .collect();
    mismatched.sort_by(|a, b| {
        b.cost
            .partial_cmp(&a.cost)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.dimension.cmp(&b.dimension))
    });
    mismatched
}

/// Texts for the signals a score rests on without HIGH confidence.
pub fn assumptions_of(intent: &Intent) -> Vec<String> {
    intent
        .assumed_dimensions()
        .into_iter()
        .map(|d| {
            format!(
                "assumed {} = {} ({} confidence)",
                d,
                intent.value_label(d),
                intent.confidence_of(d)
            )
        })
        .collect()
}

/// Overall confidence for the primary recommendation.
pub fn overall_confidence(
    score: u32,
    penalty: f64,
    low_signals: usize,
    assumptions: usize,
) -> ConfidenceLevel {
    if score >= 75 && penalty < 0.10 && low_signals <= 1 && assumptions <= 2 {
        ConfidenceLevel::High
    } else if score >= 50 && penalty < 0.20 && low_signals <= 3 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Assemble a recommendation from a scored entry.
pub fn build_recommendation(
    catalog: &Catalog,
    scored: &ScoredEntry,
    assumptions: &[String],
) -> Recommendation {
    let entry = catalog
        .get(&scored.architecture_id)
        .expect("scored entries come from the catalog");
    Recommendation {
        architecture_id: scored.architecture_id.clone(),
        name: entry.name.clone(),
        likelihood_score: scored.final_score,
        catalog_quality: entry.catalog_quality,
        matched_dimensions: matched_dimensions(&scored.dimensions),
        mismatched_dimensions: mismatched_dimensions(&scored.dimensions),
        assumptions: assumptions.to_vec(),
        learn_url: entry.learn_url.clone(),
        score_breakdown: ScoreBreakdown {
            base_score: scored.base_score,
            quality_weight: scored.quality_weight,
            confidence_penalty: scored.confidence_penalty,
            dimensions: scored.dimensions.clone(),
        },
    }
}

/// Assemble the full scoring result.
pub fn build_result(
    catalog: &Catalog,
    intent: &Intent,
    rejected: &[RejectedInference],
    ranked: &[ScoredEntry],
    excluded: Vec<(String, Vec<ExclusionReason>)>,
) -> ScoringResult {
    let assumptions = assumptions_of(intent);
    let recommendations: Vec<Recommendation> = ranked
        .iter()
        .map(|scored| build_recommendation(catalog, scored, &assumptions))
        .collect();

    let excluded: Vec<ExcludedArchitecture> = excluded
        .into_iter()
        .map(|(id, reasons)| ExcludedArchitecture {
            name: catalog.get(&id).map(|e| e.name.clone()).unwrap_or_default(),
            architecture_id: id,
            reasons,
        })
        .collect();

    let low_signals = intent.low_signal_count();
    let summary = match recommendations.first() {
        Some(primary) => {
            let confidence_level = overall_confidence(
                primary.likelihood_score,
                primary.score_breakdown.confidence_penalty,
                low_signals,
                assumptions.len(),
            );
            let key_drivers = primary
                .matched_dimensions
                .iter()
                .take(3)
                .map(|m| format!("{}: {}", m.dimension, m.evidence))
                .collect();
            let mut key_risks: Vec<String> = primary
                .mismatched_dimensions
                .iter()
                .take(3)
                .map(|m| format!("{}: {}", m.dimension, m.gap))
                .collect();
            if assumptions.len() > 2 {
                key_risks.push(format!("score rests on {} assumptions", assumptions.len()));
            }
            Summary {
                primary_recommendation: Some(primary.architecture_id.clone()),
                confidence_level,
                key_drivers,
                key_risks,
                rejected_inferences: rejected
                    .iter()
                    .map(|r| {
                        format!(
                            "{}: {} rejected in favor of {} ({})",
                            r.dimension, r.rejected_value, r.kept_value, r.reason
                        )
                    })
                    .collect(),
            }
        }
        None => Summary {
            primary_recommendation: None,
            confidence_level: ConfidenceLevel::Low,
            key_drivers: Vec::new(),
            key_risks: vec!["no eligible architecture matched the application".to_string()],
            rejected_inferences: Vec::new(),
        },
    };

    ScoringResult {
        recommendations,
        excluded,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_rule_table() {
        assert_eq!(overall_confidence(80, 0.05, 1, 2), ConfidenceLevel::High);
        // One condition off each time.
        assert_eq!(overall_confidence(74, 0.05, 1, 2), ConfidenceLevel::Medium);
        assert_eq!(overall_confidence(80, 0.10, 1, 2), ConfidenceLevel::Medium);
        assert_eq!(overall_confidence(80, 0.05, 2, 2), ConfidenceLevel::Medium);
        assert_eq!(overall_confidence(80, 0.05, 1, 3), ConfidenceLevel::Medium);
        // Medium floor.
        assert_eq!(overall_confidence(50, 0.19, 3, 9), ConfidenceLevel::Medium);
        assert_eq!(overall_confidence(49, 0.05, 0, 0), ConfidenceLevel::Low);
        assert_eq!(overall_confidence(60, 0.20, 0, 0), ConfidenceLevel::Low);
        assert_eq!(overall_confidence(60, 0.05, 4, 0), ConfidenceLevel::Low);
    }

    #[test]
    fn matched_and_mismatched_split_by_threshold() {
        let dimensions = vec![
            DimensionScore {
                dimension: ScoreDimension::TreatmentAlignment,
                weight: 0.20,
                score: 1.0,
                contribution: 0.20,
                evidence: "supports rehost".into(),
            },
            DimensionScore {
                dimension: ScoreDimension::ServiceOverlap,
                weight: 0.10,
                score: 0.5,
                contribution: 0.05,
                evidence: "half overlap".into(),
            },
            DimensionScore {
                dimension: ScoreDimension::AvailabilityAlignment,
                weight: 0.10,
                score: 0.0,
                contribution: 0.0,
                evidence: "cannot reach required topology".into(),
            },
        ];
        let matched = matched_dimensions(&dimensions);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].dimension, ScoreDimension::TreatmentAlignment);

        let mismatched = mismatched_dimensions(&dimensions);
        assert_eq!(mismatched.len(), 1);
        assert_eq!(mismatched[0].dimension, ScoreDimension::AvailabilityAlignment);
        assert!((mismatched[0].cost - 10.0).abs() < 1e-9);
    }
}
