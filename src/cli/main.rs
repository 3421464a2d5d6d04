//! croissant-cli entry point
//!
//! Validates Croissant dataset descriptions and compares two descriptions
//! for schema compatibility.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use croissant_sdk::cli::OutputFormat;
use croissant_sdk::cli::commands::compare::{CompareArgs, handle_compare};
use croissant_sdk::cli::commands::validate::{ValidateArgs, handle_validate};

#[derive(Parser, Debug)]
#[command(name = "croissant-cli", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a Croissant JSON-LD document
    Validate {
        /// Document to validate
        file: PathBuf,

        /// Enable checksum, source-reference and unique-id checks
        #[arg(long)]
        strict: bool,

        /// TOML file selecting the optional checks
        #[arg(long, conflicts_with = "strict")]
        config: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check that a candidate document can replace a reference document
    Compare {
        reference: PathBuf,
        candidate: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn run(command: Commands) -> anyhow::Result<u8> {
    match command {
        Commands::Validate {
            file,
            strict,
            config,
            format,
        } => {
            let args = ValidateArgs {
                file,
                strict,
                config,
                format,
            };
            handle_validate(&args)
                .with_context(|| format!("validation of {} failed", args.file.display()))
        }
        Commands::Compare {
            reference,
            candidate,
            format,
        } => {
            let args = CompareArgs {
                reference,
                candidate,
                format,
            };
            handle_compare(&args).with_context(|| {
                format!(
                    "comparing {} with {} failed",
                    args.reference.display(),
                    args.candidate.display()
                )
            })
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from(["croissant-cli", "-vv", "validate", "meta.json", "--strict"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Validate { file, strict, format, .. } => {
                assert_eq!(file, PathBuf::from("meta.json"));
                assert!(strict);
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("expected validate"),
        }
    }

    #[test]
    fn test_parse_compare_json() {
        let cli =
            Cli::try_parse_from(["croissant-cli", "compare", "a.json", "b.json", "--format", "json"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Compare {
                format: OutputFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn test_strict_conflicts_with_config() {
        assert!(
            Cli::try_parse_from([
                "croissant-cli",
                "validate",
                "m.json",
                "--strict",
                "--config",
                "c.toml"
            ])
            .is_err()
        );
    }
}
