use std::{fs::File, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs a file-backed subscriber filtered by `RUST_LOG` (default `info`).
///
/// Without a log file nothing is installed; the terminal belongs to the UI.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(file_subscriber(file, filter))
        .context("installing log subscriber")?;
    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}

fn file_subscriber(file: File, filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_installs_nothing() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn events_land_in_the_log_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("weather.log");
        let file = File::create(&path).expect("log file");

        tracing::subscriber::with_default(file_subscriber(file, EnvFilter::new("info")), || {
            tracing::info!(place = "Kulgam", "forecast received");
        });

        let contents = std::fs::read_to_string(&path).expect("read log");
        assert!(contents.contains("forecast received"));
        assert!(contents.contains("place=\"Kulgam\""));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("weather.log");
        let err = init(Some(&path)).expect_err("directory does not exist");
        assert!(err.to_string().contains("creating log file"));
    }
}
