// metaphone-cli: shared utilities for the command-line tools.

use std::io;
use std::process;

use log::LevelFilter;
use metaphone_core::{MatchLevel, PhoneticCode};
use metaphone_double::{EncoderOptions, ScanStep};
use serde_json::Value;

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "DMETAPHONE_LOG";

/// Errors reported by the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("invalid number for {option}: {value:?}")]
    InvalidNumber { option: String, value: String },

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("{0} cannot be combined with {1}")]
    ConflictingOptions(&'static str, &'static str),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Options shared by every tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub max_length: Option<usize>,
    pub json: bool,
    pub trace: bool,
    /// Number of `-v` flags given.
    pub verbose: u8,
    /// Non-option arguments, in order.
    pub words: Vec<String>,
}

impl CliOptions {
    pub fn encoder_options(&self) -> EncoderOptions {
        EncoderOptions {
            max_length: self.max_length,
        }
    }

    /// A scan trace shows every step of the full code, so it cannot honor
    /// `--max-length`.
    pub fn check_trace(&self) -> Result<(), CliError> {
        if self.trace && self.max_length.is_some() {
            return Err(CliError::ConflictingOptions("--trace", "--max-length"));
        }
        Ok(())
    }
}

/// Parse command-line arguments (program name already stripped).
///
/// Accepts `--max-length N`, `--max-length=N`, `--json`, `--trace`, `-v`,
/// `--verbose` and `--` to end option parsing. `-h`/`--help` is left to
/// [`wants_help`].
pub fn parse_args(args: &[String]) -> Result<CliOptions, CliError> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--" => {
                options.words.extend(iter.by_ref().cloned());
            }
            "--json" => options.json = true,
            "--trace" => options.trace = true,
            "-v" | "--verbose" => options.verbose = options.verbose.saturating_add(1),
            "-vv" => options.verbose = options.verbose.saturating_add(2),
            "-h" | "--help" => {}
            "--max-length" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                options.max_length = Some(parse_number("--max-length", value)?);
            }
            s if s.starts_with("--max-length=") => {
                let value = &s["--max-length=".len()..];
                options.max_length = Some(parse_number("--max-length", value)?);
            }
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(CliError::UnknownOption(arg.clone()));
            }
            _ => options.words.push(arg.clone()),
        }
    }

    Ok(options)
}

fn parse_number(option: &str, value: &str) -> Result<usize, CliError> {
    value.parse().map_err(|_| CliError::InvalidNumber {
        option: option.to_string(),
        value: value.to_string(),
    })
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

// ---------------------------------------------------------------------------
// Output formatting
// ---------------------------------------------------------------------------

/// Log a warning when `word` has nothing to encode. Returns whether it has
/// letters.
pub fn check_encodable(word: &str) -> bool {
    let ok = metaphone_core::character::has_letters(&metaphone_core::canonicalize(word));
    if !ok {
        log::warn!("{word:?} has no encodable letters");
    }
    ok
}

/// `word<TAB>primary<TAB>secondary`
pub fn format_code(word: &str, code: &PhoneticCode) -> String {
    format!("{word}\t{}\t{}", code.primary(), code.secondary())
}

/// One JSON object: `{"primary":..,"secondary":..,"word":..}`.
pub fn format_code_json(word: &str, code: &PhoneticCode) -> Result<String, CliError> {
    let mut value = serde_json::to_value(code)?;
    if let Value::Object(map) = &mut value {
        map.insert("word".to_string(), Value::from(word));
    }
    Ok(serde_json::to_string(&value)?)
}

/// `level<TAB>a<TAB>code_a<TAB>b<TAB>code_b`, codes shown as `P/S`.
pub fn format_match(
    level: MatchLevel,
    (a, code_a): (&str, &PhoneticCode),
    (b, code_b): (&str, &PhoneticCode),
) -> String {
    format!("{level}\t{a}\t{code_a}\t{b}\t{code_b}")
}

pub fn format_match_json(
    level: MatchLevel,
    (a, code_a): (&str, &PhoneticCode),
    (b, code_b): (&str, &PhoneticCode),
) -> Result<String, CliError> {
    let value = serde_json::json!({
        "level": level,
        "a": { "word": a, "code": code_a },
        "b": { "word": b, "code": code_b },
    });
    Ok(serde_json::to_string(&value)?)
}

/// One scan step per line: `position<TAB>letter<TAB>fragment +advance`.
pub fn format_step(step: &ScanStep) -> String {
    format!("{}\t{}\t{}", step.position, step.letter, step.outcome)
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Level forced by `-v` flags: one gives `debug`, two or more `trace`.
/// Without flags the level comes from the environment.
pub fn verbosity_level(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Install the stderr logger.
///
/// The default level is `warn`. `DMETAPHONE_LOG` takes `env_logger` filter
/// directives (`debug`, `metaphone_double=trace`) and `-v` flags override
/// its global level.
pub fn init_logging(verbose: u8) -> Result<(), CliError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_env(LOG_ENV);
    if let Some(level) = verbosity_level(verbose) {
        builder.filter_level(level);
    }
    builder.try_init()?;
    Ok(())
}
