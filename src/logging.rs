use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::filter::{EnvFilter, ParseError};

/// Send log messages to the file at `path`, filtered by `RUST_LOG` if it is
/// set and valid, or else by `directive`.
///
/// The game owns the terminal, so logs never go to stderr.
pub(crate) fn init(path: &Path, directive: &str) -> Result<(), LogError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = make_filter(from_env.as_deref(), directive)?;
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(LogError::Install)
}

fn make_filter(from_env: Option<&str>, directive: &str) -> Result<EnvFilter, LogError> {
    if let Some(filter) = from_env
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
    {
        return Ok(filter);
    }
    EnvFilter::try_new(directive).map_err(|source| LogError::Filter {
        directive: directive.to_owned(),
        source,
    })
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("invalid log level {directive:?}")]
    Filter {
        directive: String,
        source: ParseError,
    },
    #[error("failed to open log file")]
    Open(#[from] std::io::Error),
    #[error("failed to install logger")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}
