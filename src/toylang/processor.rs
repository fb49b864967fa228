//! File processing API for toy programs
//!
//! This module wires the lexer and parser to the outside world: it reads program
//! text, lower-cases it, runs both phases and renders the result at a chosen
//! stage (tokens, trace, or both) and format (simple, json, yaml).
//!
//! # Sample Sources
//!
//! The `toy_sources` module provides access to the canonical sample programs in
//! `docs/samples/`. Tests should use these instead of inlining program text.
//!
//! ```text
//! use toylang::toylang::processor::toy_sources::ToySources;
//!
//! let content = ToySources::get_string("030-read-write.toy").unwrap();
//! let processed = ToySources::get_processed("030-read-write.toy", "trace-simple").unwrap();
//! ```

use crate::toylang::lexer::{lex, tokenize, TokenStream};
use crate::toylang::parser::{ParseError, Parser, TraceEvent};
use log::{debug, info};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// The token listing only
    Token,
    /// The parse trace and outcome only
    Trace,
    /// Token listing followed by the parse trace
    Full,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "full-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "trace" => ProcessingStage::Trace,
            "full" => ProcessingStage::Full,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let stages = [
            ProcessingStage::Token,
            ProcessingStage::Trace,
            ProcessingStage::Full,
        ];
        let formats = [OutputFormat::Simple, OutputFormat::Json, OutputFormat::Yaml];
        stages
            .iter()
            .flat_map(|&stage| formats.iter().map(move |&format| ProcessingSpec { stage, format }))
            .collect()
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Trace => "trace",
            ProcessingStage::Full => "full",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        write!(f, "{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
    Serialization(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

/// Everything one run of lexer and parser produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub tokens: TokenStream,
    /// Statements recognized before the parse ended, plus the acceptance event
    pub trace: Vec<TraceEvent>,
    pub error: Option<ParseError>,
}

impl Report {
    pub fn accepted(&self) -> bool {
        self.error.is_none()
    }

    /// Token listing, one `<lexeme> : <category>` line per token
    pub fn token_lines(&self) -> Vec<String> {
        self.tokens.iter().map(|token| token.to_string()).collect()
    }

    /// Trace lines, ending with the parser error line on rejection
    pub fn trace_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.trace.iter().map(|event| event.to_string()).collect();
        if let Some(error) = &self.error {
            lines.push(format!("Parser error: {}", error));
        }
        lines
    }
}

/// Serialized shape of the trace stage
#[derive(Serialize)]
struct TraceView<'a> {
    accepted: bool,
    trace: &'a [TraceEvent],
    error: Option<&'a ParseError>,
}

/// Serialized shape of the full stage
#[derive(Serialize)]
struct FullView<'a> {
    accepted: bool,
    tokens: &'a TokenStream,
    trace: &'a [TraceEvent],
    error: Option<&'a ParseError>,
}

/// Tokenize and parse program text.
///
/// With `lowercase` set the text is case-folded first; the vocabulary only
/// contains lower-case words.
pub fn analyze(source: &str, lowercase: bool) -> Report {
    let tokens = if lowercase {
        lex(source)
    } else {
        tokenize(source)
    };

    let mut trace: Vec<TraceEvent> = Vec::new();
    let error = Parser::new(&tokens).run(&mut trace).err();
    match &error {
        None => info!("program accepted ({} tokens)", tokens.len()),
        Some(e) => info!("program rejected at token {}: {}", e.position, e),
    }

    Report {
        tokens,
        trace,
        error,
    }
}

/// Render a report according to the given specification
pub fn format_report(report: &Report, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.format {
        OutputFormat::Simple => {
            let lines = match spec.stage {
                ProcessingStage::Token => report.token_lines(),
                ProcessingStage::Trace => report.trace_lines(),
                ProcessingStage::Full => {
                    let mut lines = report.token_lines();
                    lines.extend(report.trace_lines());
                    lines
                }
            };
            let mut result = String::new();
            for line in lines {
                result.push_str(&line);
                result.push('\n');
            }
            Ok(result)
        }
        OutputFormat::Json => match spec.stage {
            ProcessingStage::Token => to_json(&report.tokens),
            ProcessingStage::Trace => to_json(&trace_view(report)),
            ProcessingStage::Full => to_json(&full_view(report)),
        },
        OutputFormat::Yaml => match spec.stage {
            ProcessingStage::Token => to_yaml(&report.tokens),
            ProcessingStage::Trace => to_yaml(&trace_view(report)),
            ProcessingStage::Full => to_yaml(&full_view(report)),
        },
    }
}

fn trace_view(report: &Report) -> TraceView<'_> {
    TraceView {
        accepted: report.accepted(),
        trace: &report.trace,
        error: report.error.as_ref(),
    }
}

fn full_view(report: &Report) -> FullView<'_> {
    FullView {
        accepted: report.accepted(),
        tokens: &report.tokens,
        trace: &report.trace,
        error: report.error.as_ref(),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ProcessingError> {
    serde_json::to_string_pretty(value).map_err(|e| ProcessingError::Serialization(e.to_string()))
}

fn to_yaml<T: Serialize>(value: &T) -> Result<String, ProcessingError> {
    serde_yaml::to_string(value).map_err(|e| ProcessingError::Serialization(e.to_string()))
}

/// Read a program file and analyze it
pub fn analyze_file<P: AsRef<Path>>(file_path: P, lowercase: bool) -> Result<Report, ProcessingError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(file_path.display().to_string()));
    }
    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    debug!("read {} bytes from {}", content.len(), file_path.display());
    Ok(analyze(&content, lowercase))
}

/// Process a program file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    lowercase: bool,
) -> Result<String, ProcessingError> {
    let report = analyze_file(file_path, lowercase)?;
    format_report(&report, spec)
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(|spec| spec.to_string())
        .collect()
}

/// Sample sources module for accessing the canonical toy programs
pub mod toy_sources {
    use super::*;

    pub const SAMPLES_DIR: &str = "docs/samples";

    /// Available sample files (canonical sources)
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "000-empty-program.toy",
        "010-declarations.toy",
        "020-assignments.toy",
        "030-read-write.toy",
        "040-full-program.toy",
        "100-missing-semicolon.toy",
        "110-unknown-statement.toy",
        "120-trailing-tokens.toy",
        "130-number-operand.toy",
        "140-datatype-name.toy",
        "150-stray-character.toy",
    ];

    /// Main interface for accessing toy sample files
    pub struct ToySources;

    impl ToySources {
        fn sample_path(filename: &str) -> String {
            format!("{}/{}", SAMPLES_DIR, filename)
        }

        fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(ProcessingError::FileNotFound(format!(
                    "Sample '{}' is not available. Available samples: {:?}",
                    filename, AVAILABLE_SAMPLES
                )));
            }
            Ok(())
        }

        /// Get sample content as raw string
        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;
            let path = Self::sample_path(filename);
            fs::read_to_string(&path)
                .map_err(|e| ProcessingError::IoError(format!("Failed to read {}: {}", path, e)))
        }

        /// Get sample content as a normalized token stream
        pub fn get_tokens(filename: &str) -> Result<TokenStream, ProcessingError> {
            let content = Self::get_string(filename)?;
            Ok(lex(&content))
        }

        /// Get the full analysis of a sample
        pub fn get_report(filename: &str) -> Result<Report, ProcessingError> {
            let content = Self::get_string(filename)?;
            Ok(analyze(&content, true))
        }

        /// Get sample content processed with the specified format
        pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
            let spec = ProcessingSpec::from_string(format)?;
            let report = Self::get_report(filename)?;
            format_report(&report, &spec)
        }

        /// List all available sample files
        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }
    }
}
