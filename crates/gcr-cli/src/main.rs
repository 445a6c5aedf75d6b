//! `gcr`: decode, encode and validate GCR slot-coordination messages.
//!
//! GCR text and JSON are read from a file or stdin; results go to stdout and
//! logs to stderr.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gcr_models::{decode, encode, validate, Message, ParseError, ValidationResult};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::{CliConfig, OutputStyle};

/// GCR message codec.
#[derive(Parser, Debug)]
#[command(name = "gcr", version, about = "Decode, encode and validate GCR messages")]
struct Cli {
    /// Print JSON on a single line (overrides GCR_OUTPUT).
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode GCR text into a JSON message.
    Decode {
        /// Input file; stdin when omitted or `-`.
        file: Option<PathBuf>,
        /// Also validate the decoded message and fail on violations.
        #[arg(long)]
        validate: bool,
    },
    /// Encode a JSON message as GCR text.
    Encode {
        /// Input file; stdin when omitted or `-`.
        file: Option<PathBuf>,
    },
    /// Validate a message and print the result as JSON.
    Validate {
        /// Input file; stdin when omitted or `-`.
        file: Option<PathBuf>,
        /// Input is a JSON message rather than GCR text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let config = CliConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let style = if cli.compact {
        OutputStyle::Compact
    } else {
        config.output
    };

    match run(cli.command, style) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn run(command: Command, style: OutputStyle) -> anyhow::Result<ExitCode> {
    match command {
        Command::Decode { file, validate: check } => {
            let text = read_input(file.as_deref())?;
            let message = match decode(&text) {
                Ok(message) => message,
                Err(err) => return Ok(report_parse_error(&err)),
            };
            info!(
                sections = message.airport_sections.len(),
                flights = message.flights().count(),
                message_type = %message.message_type,
                "decoded message"
            );
            println!("{}", to_json(&message, style)?);

            if check {
                let result = validate(&message);
                if !result.valid {
                    report_violations(&result);
                    return Ok(ExitCode::FAILURE);
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Encode { file } => {
            let input = read_input(file.as_deref())?;
            let message: Message =
                serde_json::from_str(&input).context("input is not a valid GCR message JSON")?;
            println!("{}", encode(&message));
            Ok(ExitCode::SUCCESS)
        }

        Command::Validate { file, json } => {
            let input = read_input(file.as_deref())?;
            let message: Message = if json {
                serde_json::from_str(&input).context("input is not a valid GCR message JSON")?
            } else {
                match decode(&input) {
                    Ok(message) => message,
                    Err(err) => return Ok(report_parse_error(&err)),
                }
            };

            let result = validate(&message);
            debug!(valid = result.valid, errors = result.errors.len(), "validated message");
            println!("{}", to_json(&result, style)?);
            Ok(if result.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn to_json<T: Serialize>(value: &T, style: OutputStyle) -> anyhow::Result<String> {
    let json = match style {
        OutputStyle::Pretty => serde_json::to_string_pretty(value),
        OutputStyle::Compact => serde_json::to_string(value),
    };
    json.context("failed to serialise output")
}

fn describe_parse_error(err: &ParseError) -> String {
    let mut out = match err.line() {
        Some(line) => format!("line {line}: {err}"),
        None => err.to_string(),
    };
    if let Some(details) = err.details() {
        if !out.ends_with(details) {
            out.push_str(&format!(" ({details})"));
        }
    }
    out
}

fn report_parse_error(err: &ParseError) -> ExitCode {
    eprintln!("error: {}", describe_parse_error(err));
    ExitCode::FAILURE
}

fn report_violations(result: &ValidationResult) {
    for error in &result.errors {
        eprintln!("invalid: {}: {}", error.field, error.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["gcr", "decode", "msg.txt", "--validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Decode { file: Some(_), validate: true }
        ));

        let cli = Cli::try_parse_from(["gcr", "--compact", "validate", "--json"]).unwrap();
        assert!(cli.compact);
        assert!(matches!(cli.command, Command::Validate { file: None, json: true }));

        assert!(Cli::try_parse_from(["gcr", "transmit"]).is_err());
    }

    #[test]
    fn parse_error_description_includes_line_and_details() {
        let err = decode("GCR\n/FLT\nEDDF\nNABC123 08JUN 010G159 LSZH0900 Q").unwrap_err();
        assert_eq!(describe_parse_error(&err), "line 4: invalid flight type: Q");

        let err = decode("GCR\n/XYZ\nEDDF").unwrap_err();
        assert_eq!(
            describe_parse_error(&err),
            "line 2: invalid identifier type: must be /FLT or /REG (/XYZ)"
        );

        assert_eq!(
            describe_parse_error(&ParseError::TooFewLines),
            "invalid GCR message: too few lines"
        );
    }

    #[test]
    fn json_output_styles() {
        let msg = decode("GCR\n/REG\nEDDF\nN HBIEV 08JUN 010G159 0750LOWW D").unwrap();
        let compact = to_json(&msg, OutputStyle::Compact).unwrap();
        assert!(!compact.contains('\n'));
        let pretty = to_json(&msg, OutputStyle::Pretty).unwrap();
        assert!(pretty.contains("\n  \"header\""));

        let back: Message = serde_json::from_str(&compact).unwrap();
        assert_eq!(back, msg);
    }
}
