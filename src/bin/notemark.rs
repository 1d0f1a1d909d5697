//! Command-line interface for notemark
//! Lexes a note file and prints its tokens, or the diagnostics when the markup has errors.
//!
//! Usage:
//!   notemark `<path>` [--format `<format>`] [--config `<file>`] [--column-mode `<mode>`]
//!   notemark --list-formats
//!
//! `<path>` may be `-` to read from stdin. Exit status is 0 on success, 65 when
//! the document has lexical errors and 1 for anything else.

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Arg, ArgAction, ArgMatches, Command};
use notemark::markup::config::Loader;
use notemark::markup::formats::FormatRegistry;
use notemark::markup::lexing::ColumnMode;
use notemark::markup::preview::{self, Preview};
use notemark::Result;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// sysexits.h EX_DATAERR
const EXIT_LEX_ERRORS: u8 = 65;

fn main() -> ExitCode {
    let matches = Command::new("notemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lex note markup and print its tokens or diagnostics")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the note file, or '-' for stdin")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'simple', 'json', 'yaml', 'source')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .env("NOTEMARK_CONFIG")
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("column-mode")
                .long("column-mode")
                .value_parser(column_mode_parser())
                .help("Column reported for multi-character tokens"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log lexer activity to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if let Err(e) = init_logging(matches.get_flag("verbose")) {
        eprintln!("Failed to initialize logging: {e}");
    }

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return ExitCode::SUCCESS;
    }

    match handle_lex_command(&matches) {
        Ok(preview) => {
            print!("{}", preview.text());
            if preview.is_diagnostics() {
                ExitCode::from(EXIT_LEX_ERRORS)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn column_mode_parser() -> impl TypedValueParser<Value = ColumnMode> {
    PossibleValuesParser::new(ColumnMode::ALL.map(ColumnMode::as_str)).map(|name| {
        ColumnMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == name)
            .unwrap_or_default()
    })
}

/// Logs go to stderr so they never mix with the token output.
fn init_logging(verbose: bool) -> std::result::Result<(), tracing_subscriber::util::TryInitError> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("NOTEMARK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
}

/// Handle lexing a single document
fn handle_lex_command(matches: &ArgMatches) -> Result<Preview> {
    let mut loader = Loader::from_defaults();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.with_format(format)?;
    }
    if let Some(mode) = matches.get_one::<ColumnMode>("column-mode") {
        loader = loader.with_column_mode(*mode)?;
    }
    let config = loader.build()?;

    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    let source = read_source(path)?;
    debug!(path, bytes = source.len(), format = %config.output.format, "lexing document");

    preview::render(&source, &config)
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(Path::new(path))
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for formatter in registry.formatters() {
        println!("  {}", formatter.name());
        println!("    {}", formatter.description());
        println!();
    }
}
