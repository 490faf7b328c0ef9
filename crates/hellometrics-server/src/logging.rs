//! Tracing subscriber setup.
//!
//! Console output always; a second, colourless copy goes to `LOG_PATH` when
//! configured. Level comes from `RUST_LOG` and defaults to `info`.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hellometrics_core::error::{HelloError, Result};

use crate::config::ServiceConfig;

/// Create (or truncate) the log file.
pub fn open_sink(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| HelloError::LogSink {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the subscriber `init` installs: env filter, console, optional file.
pub fn subscriber(cfg: &ServiceConfig) -> Result<impl Subscriber + Send + Sync + 'static> {
    let file_layer = match cfg.log_path.as_deref() {
        Some(path) => {
            let file = open_sink(path)?;
            Some(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        }
        None => None,
    };

    Ok(tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer())
        .with(file_layer))
}

/// Install the global subscriber. Call once, before anything else logs.
pub fn init(cfg: &ServiceConfig) -> Result<()> {
    subscriber(cfg)?
        .try_init()
        .map_err(|e| HelloError::Internal(format!("install tracing subscriber failed: {e}")))?;

    if let Some(path) = cfg.log_path.as_deref() {
        tracing::debug!(path = %path.display(), "duplicating logs to file");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_a_log_sink_error() {
        let path = std::env::temp_dir()
            .join("hellometrics-no-such-dir")
            .join("nested")
            .join("out.log");
        let err = open_sink(&path).unwrap_err();
        assert_eq!(err.code().as_str(), "LOG_SINK");
        assert!(err.to_string().contains("out.log"));
    }

    #[test]
    fn events_are_duplicated_to_the_log_file() {
        let path = std::env::temp_dir().join(format!("hellometrics-dup-{}.log", std::process::id()));
        let cfg = ServiceConfig {
            log_path: Some(path.clone()),
            ..ServiceConfig::default()
        };

        let sub = subscriber(&cfg).unwrap();
        tracing::subscriber::with_default(sub, || {
            tracing::warn!(listener = "business", "duplicated line");
        });

        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(written.contains("duplicated line"), "{written}");
        assert!(written.contains("listener=\"business\""), "{written}");
        assert!(!written.contains('\x1b'), "ANSI escapes in file: {written:?}");
    }

    #[test]
    fn missing_log_dir_fails_before_install() {
        let cfg = ServiceConfig {
            log_path: Some(std::env::temp_dir().join("hellometrics-no-such-dir").join("x.log")),
            ..ServiceConfig::default()
        };
        let err = subscriber(&cfg).err().unwrap();
        assert_eq!(err.code().as_str(), "LOG_SINK");
    }

    #[test]
    fn sink_is_created() {
        let path = std::env::temp_dir().join(format!("hellometrics-{}.log", std::process::id()));
        open_sink(&path).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
