//! Archrec CLI entry point.
//!
//! Parses arguments, dispatches to the command handlers, and maps engine
//! errors onto the exit-code contract: 0 success, 1 validation error,
//! 2 catalog invalid, 3 internal error.

use anyhow::Result;
use clap::Parser;

use archrec::cli::{Cli, Commands};
use archrec::commands::{
    handle_questions_command, handle_score_command, handle_validate_command, ScoreOptions,
};
use archrec::core::EngineError;
use archrec::observability::init_tracing;

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            catalog,
            context,
            top,
            answers,
            interactive,
            no_interactive: _,
            format,
            output,
            config,
            verbosity,
        } => handle_score_command(ScoreOptions {
            catalog,
            context,
            top,
            answers,
            interactive,
            format,
            output,
            config,
            verbosity,
        })?,
        Commands::Questions {
            catalog,
            context,
            format,
            output,
            config,
        } => handle_questions_command(catalog, context, format, output, config)?,
        Commands::Validate { catalog, context } => handle_validate_command(catalog, context)?,
    }
    Ok(())
}

/// Exit code for a top-level failure. Engine errors carry their own code;
/// anything else is internal.
fn exit_code_of(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<EngineError>()
        .map_or(3, EngineError::exit_code)
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(exit_code_of(&err));
    }
}
