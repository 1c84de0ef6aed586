//! The `questions` command: emit generated clarification questions.

use super::load_inputs;
use crate::cli::OutputFormat;
use crate::config::resolve_config;
use crate::core::EngineError;
use crate::engine::Engine;
use crate::io::write_output;
use crate::output::{questions_to_json, render_questions};
use std::path::PathBuf;

pub fn handle_questions_command(
    catalog: PathBuf,
    context: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<(), EngineError> {
    let (catalog, _report, ctx) = load_inputs(&catalog, &context)?;
    let config = resolve_config(config.as_ref()).map_err(EngineError::ConfigInvalid)?;
    let engine = Engine::new(catalog, config)?;

    let questions = engine.questions(&ctx);
    let rendered = match format {
        OutputFormat::Json => questions_to_json(&questions)?,
        OutputFormat::Terminal => render_questions(&questions),
    };
    write_output(&rendered, output.as_ref())
}
