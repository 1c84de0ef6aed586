//! The `score` command: full pipeline with optional interactive answers.

use super::load_inputs;
use crate::cli::OutputFormat;
use crate::config::resolve_config;
use crate::core::EngineError;
use crate::engine::Engine;
use crate::io::write_output;
use crate::output::{render_result, result_to_json};
use crate::questions::Question;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub struct ScoreOptions {
    pub catalog: PathBuf,
    pub context: PathBuf,
    pub top: Option<usize>,
    pub answers: Vec<String>,
    pub interactive: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub verbosity: u8,
}

/// Parse repeated `-a question_id=value` arguments.
fn parse_answer_args(args: &[String]) -> Result<BTreeMap<String, String>, EngineError> {
    let mut answers = BTreeMap::new();
    for arg in args {
        let (id, value) = arg.split_once('=').ok_or_else(|| {
            EngineError::AnswerInvalid(format!("answer {arg:?} is not of the form question_id=value"))
        })?;
        answers.insert(id.trim().to_string(), value.trim().to_string());
    }
    Ok(answers)
}

/// Prompt each question on stdin. An empty line keeps the inference; a
/// number picks the option.
fn prompt_questions(questions: &[Question]) -> Result<BTreeMap<String, String>, EngineError> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut answers = BTreeMap::new();

    for question in questions {
        println!();
        println!("{}", question.question_text);
        println!(
            "  current inference: {} ({})",
            question.current_inference, question.inference_confidence
        );
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {} — {}", i + 1, option.value, option.label);
        }
        print!("answer [1-{}] or enter to keep inference: ", question.options.len());
        std::io::stdout()
            .flush()
            .map_err(|e| EngineError::Internal(e.to_string()))?;

        let line = match lines.next() {
            Some(line) => line.map_err(|e| EngineError::Internal(e.to_string()))?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let choice: usize = line.parse().map_err(|_| {
            EngineError::AnswerInvalid(format!("{line:?} is not an option number"))
        })?;
        let option = question.options.get(choice.wrapping_sub(1)).ok_or_else(|| {
            EngineError::AnswerInvalid(format!(
                "option {choice} is out of range for {}",
                question.question_id
            ))
        })?;
        answers.insert(question.question_id.clone(), option.value.clone());
    }
    Ok(answers)
}

pub fn handle_score_command(options: ScoreOptions) -> Result<(), EngineError> {
    let (catalog, _report, ctx) = load_inputs(&options.catalog, &options.context)?;
    let config = resolve_config(options.config.as_ref()).map_err(EngineError::ConfigInvalid)?;
    let engine = Engine::new(catalog, config)?;

    let mut answers = parse_answer_args(&options.answers)?;
    if options.interactive {
        let questions = engine.questions(&ctx);
        let prompted = prompt_questions(&questions)?;
        // Explicit -a answers win over interactive ones for the same id.
        for (id, value) in prompted {
            answers.entry(id).or_insert(value);
        }
    }

    let result = engine.score(&ctx, &answers)?;
    let rendered = match options.format {
        OutputFormat::Json => result_to_json(&result, options.top)?,
        OutputFormat::Terminal => render_result(&result, options.top, options.verbosity),
    };
    write_output(&rendered, options.output.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_args_parse_into_map() {
        let answers = parse_answer_args(&[
            "network_exposure=external".to_string(),
            "treatment = rehost".to_string(),
        ])
        .unwrap();
        assert_eq!(answers["network_exposure"], "external");
        assert_eq!(answers["treatment"], "rehost");
    }

    #[test]
    fn malformed_answer_arg_is_rejected() {
        let err = parse_answer_args(&["network_exposure".to_string()]).unwrap_err();
        assert!(matches!(err, EngineError::AnswerInvalid(_)));
    }
}
