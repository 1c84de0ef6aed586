//! User-answer validation and application.
//!
//! Answers apply atomically: every id and value is validated against the
//! question catalog before any signal changes, so a run is never left with
//! a half-applied answer set. An applied answer replaces the inferred value
//! at HIGH confidence with source `user_answer`.

use super::catalog::find_question;
use crate::core::{
    AvailabilityModel, CostProfile, EngineError, NetworkExposure, OperatingModel, SecurityLevel,
    Signal, TimeCategory, Treatment,
};
use crate::intent::{Dimension, Intent};
use std::collections::BTreeMap;

fn parse_wire<T: serde::de::DeserializeOwned>(value: &str) -> Result<T, EngineError> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| EngineError::Internal(format!("catalog option {value:?} failed to parse")))
}

fn apply_one(intent: &mut Intent, dimension: Dimension, value: &str) -> Result<(), EngineError> {
    match dimension {
        Dimension::NetworkExposure => {
            intent.network_exposure = Signal::answered(parse_wire::<NetworkExposure>(value)?);
        }
        Dimension::Treatment => {
            intent.treatment = Signal::answered(parse_wire::<Treatment>(value)?);
        }
        Dimension::TimeCategory => {
            intent.time_category = Signal::answered(Some(parse_wire::<TimeCategory>(value)?));
        }
        Dimension::Availability => {
            intent.availability_requirement =
                Signal::answered(parse_wire::<AvailabilityModel>(value)?);
        }
        Dimension::SecurityLevel => {
            intent.security_requirement = Signal::answered(parse_wire::<SecurityLevel>(value)?);
        }
        Dimension::OperationalMaturity => {
            intent.operational_maturity_estimate =
                Signal::answered(parse_wire::<OperatingModel>(value)?);
        }
        Dimension::CostPosture => {
            intent.cost_posture = Signal::answered(parse_wire::<CostProfile>(value)?);
        }
        // No questions exist for App-Mod-only dimensions; find_question
        // cannot produce these.
        Dimension::RuntimeModel
        | Dimension::ModernizationDepth
        | Dimension::CloudNativeFeasibility => {
            return Err(EngineError::Internal(format!(
                "dimension {dimension} is not answerable"
            )));
        }
    }
    Ok(())
}

/// Validate the full answer map against the question catalog, then apply
/// every answer. Returns the upgraded intent.
pub fn apply_answers(
    intent: &Intent,
    answers: &BTreeMap<String, String>,
) -> Result<Intent, EngineError> {
    // Validation pass first; nothing is applied when any answer is bad.
    for (id, value) in answers {
        let def = find_question(id)
            .ok_or_else(|| EngineError::AnswerInvalid(format!("unknown question_id {id:?}")))?;
        if !def.options.iter().any(|o| o.value == value) {
            return Err(EngineError::AnswerInvalid(format!(
                "value {value:?} is not an option for question {id:?}"
            )));
        }
    }

    let mut upgraded = intent.clone();
    for (id, value) in answers {
        let def = find_question(id).expect("validated above");
        apply_one(&mut upgraded, def.dimension, value)?;
    }
    Ok(upgraded)
}
