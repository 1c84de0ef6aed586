//! JSON output for scoring results and questions.

use crate::explain::ScoringResult;
use crate::questions::Question;
use crate::core::EngineError;

/// Serialize a result, keeping only the top N recommendations when asked.
/// Filtering happens at render time; the computation always covers the full
/// catalog.
pub fn result_to_json(result: &ScoringResult, top: Option<usize>) -> Result<String, EngineError> {
    let rendered = match top {
        Some(n) if n < result.recommendations.len() => {
            let mut clipped = result.clone();
            clipped.recommendations.truncate(n);
            serde_json::to_string_pretty(&clipped)
        }
        _ => serde_json::to_string_pretty(result),
    };
    rendered.map_err(|e| EngineError::Internal(format!("failed to serialize result: {e}")))
}

pub fn questions_to_json(questions: &[Question]) -> Result<String, EngineError> {
    serde_json::to_string_pretty(questions)
        .map_err(|e| EngineError::Internal(format!("failed to serialize questions: {e}")))
}
