use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Terminal,
    /// JSON for programmatic consumption
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "archrec")]
#[command(about = "Cloud architecture scoring and recommendation engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score the catalog against an application context
    Score {
        /// Path to the compiled architecture catalog
        #[arg(short = 'c', long)]
        catalog: PathBuf,

        /// Path to the application context document
        #[arg(short = 'x', long)]
        context: PathBuf,

        /// Show only the top N recommendations
        #[arg(short = 'n', long = "top")]
        top: Option<usize>,

        /// Answer a clarification question (repeatable)
        #[arg(short = 'a', long = "answer", value_name = "QUESTION_ID=VALUE")]
        answers: Vec<String>,

        /// Prompt generated questions on stdin before scoring
        #[arg(long)]
        interactive: bool,

        /// Score with inferences as-is (default)
        #[arg(long = "no-interactive", conflicts_with = "interactive")]
        no_interactive: bool,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Explicit configuration file (defaults to .archrec.toml discovery)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Increase verbosity (can be repeated: -v, -vv)
        /// -v: score breakdown for the primary recommendation
        /// -vv: full breakdown for every shown recommendation
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Emit the generated clarification questions only
    Questions {
        /// Path to the compiled architecture catalog
        #[arg(short = 'c', long)]
        catalog: PathBuf,

        /// Path to the application context document
        #[arg(short = 'x', long)]
        context: PathBuf,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Explicit configuration file (defaults to .archrec.toml discovery)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate catalog and context without scoring
    Validate {
        /// Path to the compiled architecture catalog
        #[arg(short = 'c', long)]
        catalog: PathBuf,

        /// Path to the application context document
        #[arg(short = 'x', long)]
        context: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_command_parses_with_answers() {
        let cli = Cli::parse_from([
            "archrec",
            "score",
            "-c",
            "catalog.json",
            "-x",
            "context.json",
            "-n",
            "5",
            "-a",
            "network_exposure=external",
            "-a",
            "treatment=rehost",
            "-vv",
        ]);
        match cli.command {
            Commands::Score {
                top,
                answers,
                verbosity,
                format,
                ..
            } => {
                assert_eq!(top, Some(5));
                assert_eq!(answers.len(), 2);
                assert_eq!(verbosity, 2);
                assert_eq!(format, OutputFormat::Terminal);
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn interactive_flags_conflict() {
        let result = Cli::try_parse_from([
            "archrec",
            "score",
            "-c",
            "c.json",
            "-x",
            "x.json",
            "--interactive",
            "--no-interactive",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn questions_command_parses() {
        let cli = Cli::parse_from([
            "archrec",
            "questions",
            "-c",
            "catalog.json",
            "-x",
            "context.json",
            "-f",
            "json",
        ]);
        assert!(matches!(
            cli.command,
            Commands::Questions {
                format: OutputFormat::Json,
                ..
            }
        ));
    }
}
