//! Error types for venv
//!
//! Library code returns `VenvError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{CommandStatus, FsError};

/// Result type alias for venv operations
pub type VenvResult<T> = Result<T, VenvError>;

/// Main error type for venv operations
#[derive(Error, Debug)]
pub enum VenvError {
    /// A filesystem probe failed for a reason other than "not found"
    #[error("could not determine if {path} exists: {source}")]
    Probe {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The project manifest is not a valid TOML document
    #[error("could not parse {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },

    /// An external command exited non-zero or could not be spawned
    #[error("could not {action}: {source}{}", leftover_note(.leftover))]
    CommandFailed {
        action: String,
        #[source]
        source: StepFailure,
        /// Environment directory the failed run left behind
        leftover: Option<PathBuf>,
    },

    /// The interactive prompt could not be shown or read
    #[error("could not generate prompt: {0}")]
    Prompt(String),

    /// Should be unreachable; indicates a bug rather than bad input
    #[error("internal error: {0}")]
    Internal(String),
}

/// Why a manifest could not be parsed
#[derive(Error, Debug)]
pub enum ManifestError {
    /// TOML documents must be UTF-8
    #[error("file is not valid UTF-8")]
    Encoding(#[source] std::io::Error),

    #[error("{message}{}", location_note(.location))]
    Syntax {
        message: String,
        /// 1-based line and column of the offending input
        location: Option<(usize, usize)>,
        #[source]
        source: toml::de::Error,
    },
}

impl ManifestError {
    /// Wrap a TOML error, resolving its byte span against `content`
    pub fn syntax(content: &str, err: toml::de::Error) -> Self {
        let location = err.span().map(|span| line_column(content, span.start));
        ManifestError::Syntax {
            message: err.message().to_string(),
            location,
            source: err,
        }
    }
}

/// How a single install step failed
#[derive(Error, Debug)]
pub enum StepFailure {
    #[error("{0}")]
    Exited(CommandStatus),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let before = &content.as_bytes()[..offset.min(content.len())];
    let line = before.iter().filter(|b| **b == b'\n').count() + 1;
    let line_start = before.iter().rposition(|b| *b == b'\n').map_or(0, |i| i + 1);
    let column = String::from_utf8_lossy(&before[line_start..]).chars().count() + 1;
    (line, column)
}

fn location_note(location: &Option<(usize, usize)>) -> String {
    match location {
        Some((line, column)) => format!(" at line {}, column {}", line, column),
        None => String::new(),
    }
}

fn leftover_note(leftover: &Option<PathBuf>) -> String {
    match leftover {
        Some(dir) => format!(
            " (the partially configured {} was left in place; remove it before running venv again)",
            dir.display()
        ),
        None => String::new(),
    }
}
