//! Command-line interface for toylang
//! This binary lexes and validates toy programs and prints the result in several formats.
//!
//! Usage:
//!   toylang execute [`<path>`] [--format `<format>`] [--config `<file>`] [--keep-case]
//!   toylang list-formats
//!
//! Exit status is 0 for an accepted program, 2 for a rejected one and 1 when the
//! program could not be processed at all.

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::debug;
use toylang::toylang::config::{Loader, ToylangConfig, LOCAL_CONFIG_FILE};
use toylang::toylang::processor::{analyze_file, available_formats, format_report, ProcessingSpec};

const EXIT_REJECTED: i32 = 2;

fn main() {
    env_logger::init();

    let matches = Command::new("toylang")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lex and validate toy programs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("execute")
                .about("Tokenize and parse a program")
                .arg(
                    Arg::new("path")
                        .help("Path to the program (default: input.path from config)")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'full-simple', 'trace-json')"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("keep-case")
                        .long("keep-case")
                        .help("Do not lower-case the source before lexing")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("execute", execute_matches)) => {
            let config = load_config(execute_matches).unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
            handle_execute_command(&config);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Layer defaults, the local config file, an explicit config file and CLI flags
fn load_config(matches: &ArgMatches) -> Result<ToylangConfig, config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(path) = matches.get_one::<String>("path") {
        loader = loader.set_override("input.path", path.as_str())?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("keep-case") {
        loader = loader.set_override("input.lowercase", false)?;
    }
    loader.build()
}

/// Handle the execute command
fn handle_execute_command(config: &ToylangConfig) {
    debug!("effective configuration: {:?}", config);

    let spec = ProcessingSpec::from_string(&config.output.format).unwrap_or_else(|e| {
        eprintln!("{}", e);
        eprintln!("Available formats: {}", available_formats().join(", "));
        std::process::exit(1);
    });

    let report = analyze_file(&config.input.path, config.input.lowercase).unwrap_or_else(|e| {
        eprintln!("Error reading program: {}", e);
        std::process::exit(1);
    });

    let output = format_report(&report, &spec).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    if !report.accepted() {
        std::process::exit(EXIT_REJECTED);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
