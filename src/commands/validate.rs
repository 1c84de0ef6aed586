//! The `validate` command: check both inputs without scoring.

use super::load_inputs;
use crate::core::EngineError;
use colored::Colorize;
use std::path::PathBuf;

pub fn handle_validate_command(catalog: PathBuf, context: PathBuf) -> Result<(), EngineError> {
    let (catalog, report, ctx) = load_inputs(&catalog, &context)?;

    println!("{}", "Catalog".bold());
    println!("  version: {}", catalog.version);
    if let Some(source) = &catalog.source_repo {
        println!("  source: {source}");
    }
    println!("  entries: {}", catalog.len());
    if report.dropped.is_empty() {
        println!("  {}", "all entries valid".green());
    } else {
        println!(
            "  {}",
            format!("{} entries dropped", report.dropped.len()).yellow()
        );
        for dropped in &report.dropped {
            println!(
                "    - {}: {}",
                dropped.architecture_id.as_deref().unwrap_or("<missing id>"),
                dropped.reason.dimmed()
            );
        }
    }

    println!();
    println!("{}", "Context".bold());
    println!("  application: {}", ctx.application_name);
    println!("  servers: {}", ctx.server_count);
    println!("  technologies: {}", ctx.detected_technologies.len());
    println!("  approved services: {}", ctx.approved_services.len());
    println!(
        "  app-mod data: {}",
        if ctx.app_mod.has_data() { "present" } else { "absent" }
    );
    if let Some(treatment) = ctx.declared_treatment {
        println!("  declared treatment: {treatment:?}");
    }

    println!();
    println!("{}", "inputs valid".green().bold());
    Ok(())
}
