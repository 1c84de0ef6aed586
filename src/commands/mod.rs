//! CLI command handlers.

mod questions;
mod score;
mod validate;

pub use questions::handle_questions_command;
pub use score::{handle_score_command, ScoreOptions};
pub use validate::handle_validate_command;

use crate::catalog::{load_catalog, Catalog, LoadReport};
use crate::context::{normalize_from_str, NormalizedContext};
use crate::core::EngineError;
use crate::io::{read_catalog_file, read_context_file};
use std::path::Path;

/// Load and validate both input documents.
pub(crate) fn load_inputs(
    catalog_path: &Path,
    context_path: &Path,
) -> Result<(Catalog, LoadReport, NormalizedContext), EngineError> {
    let catalog_text = read_catalog_file(catalog_path)?;
    let (catalog, report) = load_catalog(&catalog_text)?;
    let context_text = read_context_file(context_path)?;
    let ctx = normalize_from_str(&context_text)?;
    Ok((catalog, report, ctx))
}
