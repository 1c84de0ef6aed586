//! Clarification-question generation.

use super::catalog::{QuestionDef, QUESTION_CATALOG};
use crate::config::QuestionConfig;
use crate::core::SignalConfidence;
use crate::intent::{Dimension, Intent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
}

/// A generated clarification question, carrying the current inference so a
/// caller can present "we assumed X" alongside the options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: String,
    pub dimension: Dimension,
    pub question_text: String,
    pub options: Vec<QuestionOption>,
    pub required: bool,
    pub affects_eligibility: bool,
    pub current_inference: String,
    pub inference_confidence: SignalConfidence,
}

fn should_ask(def: &QuestionDef, intent: &Intent, config: &QuestionConfig) -> bool {
    if def.always_ask {
        return true;
    }
    let confidence = intent.confidence_of(def.dimension);
    if def.only_when_unknown {
        return confidence == SignalConfidence::Unknown;
    }
    confidence <= config.ask_at_or_below
}

fn materialize(def: &QuestionDef, intent: &Intent) -> Question {
    Question {
        question_id: def.id.to_string(),
        dimension: def.dimension,
        question_text: def.text.to_string(),
        options: def
            .options
            .iter()
            .map(|o| QuestionOption {
                value: o.value.to_string(),
                label: o.label.to_string(),
            })
            .collect(),
        required: def.required,
        affects_eligibility: def.affects_eligibility,
        current_inference: intent.value_label(def.dimension),
        inference_confidence: intent.confidence_of(def.dimension),
    }
}

/// Generate clarification questions for every dimension whose confidence is
/// at or below the configured threshold. `network_exposure` is always
/// produced. Order: required first, then eligibility-affecting, then stable
/// by question id.
pub fn generate_questions(intent: &Intent, config: &QuestionConfig) -> Vec<Question> {
    let mut questions: Vec<Question> = QUESTION_CATALOG
        .iter()
        .filter(|def| should_ask(def, intent, config))
        .map(|def| materialize(def, intent))
        .collect();
    questions.sort_by(|a, b| {
        b.required
            .cmp(&a.required)
            .then(b.affects_eligibility.cmp(&a.affects_eligibility))
            .then(a.question_id.cmp(&b.question_id))
    });
    questions
}
