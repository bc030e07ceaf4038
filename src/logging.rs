use anyhow::{Context, Result};
use std::{fs::File, io, path::Path, sync::Mutex};
use tracing_subscriber::EnvFilter;

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logging for the interactive form.
///
/// The terminal UI owns stdout and stderr, so records only go to `path`.
/// Without a path logging stays off.
pub fn init_file_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(make_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {e}"))
}

/// Logging for one-shot commands: plain records on stderr, keeping stdout
/// clean for the quote itself.
pub fn init_stderr_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(make_filter())
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {e}"))
}
