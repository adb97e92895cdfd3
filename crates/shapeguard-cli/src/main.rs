//! shapeguard CLI
//!
//! Validate JSON or YAML documents against the built-in schemas.
//!
//! Exit codes: 0 valid, 1 invalid, 2 usage, I/O or parse error.

mod catalog;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shapeguard", version, about = "Validate documents against built-in schemas")]
struct Cli {
    /// Log validation progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in schemas
    List,

    /// Validate a document
    Validate {
        /// Name of the built-in schema (see `shapeguard list`)
        #[arg(short, long)]
        schema: String,

        /// Document format
        #[arg(short, long, value_enum, default_value_t = Format::Auto)]
        format: Format,

        /// Print the result as a JSON object
        #[arg(long)]
        json: bool,

        /// Path to the document, or `-` for stdin
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pick from the file extension; stdin is read as JSON
    Auto,
    Json,
    Yaml,
}

/// Machine-readable validation result.
#[derive(Debug, Serialize)]
struct Report<'a> {
    schema: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    ExitCode::from(exit_status(run(cli)))
}

/// Map the outcome of [`run`] onto the documented exit codes.
fn exit_status(result: Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            eprintln!("error: {:#}", e);
            2
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns whether the document was valid.
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Command::List => {
            for entry in catalog::entries() {
                println!("{:<20} {}", entry.name, entry.description);
            }
            Ok(true)
        }
        Command::Validate {
            schema,
            format,
            json,
            file,
        } => {
            let entry = catalog::lookup(&schema).ok_or_else(|| {
                anyhow!("unknown schema '{}' (run `shapeguard list`)", schema)
            })?;

            let text = read_input(&file)?;
            let document = parse_document(&text, resolve_format(format, &file))
                .with_context(|| format!("failed to parse {}", file.display()))?;

            tracing::debug!(schema = entry.name, file = %file.display(), "validating document");
            let outcome = entry.schema().validate(&document);

            let report = Report {
                schema: entry.name,
                valid: outcome.is_ok(),
                message: outcome.err().map(|e| e.message),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                match &report.message {
                    None => println!("OK"),
                    Some(message) => println!("INVALID: {}", message),
                }
            }

            Ok(report.valid)
        }
    }
}

fn read_input(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

fn resolve_format(format: Format, file: &Path) -> Format {
    if format != Format::Auto {
        return format;
    }

    match file.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Format::Yaml,
        _ => Format::Json,
    }
}

fn parse_document(text: &str, format: Format) -> Result<Value> {
    let value: Value = match format {
        Format::Yaml => serde_yaml::from_str(text)?,
        Format::Json | Format::Auto => serde_json::from_str(text)?,
    };
    Ok(value)
}
