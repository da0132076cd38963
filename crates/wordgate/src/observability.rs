//! Logging setup.
//!
//! Two optional sinks:
//! - stderr, human-readable, off unless `-v` or `RUST_LOG` is given so a
//!   passing check prints nothing;
//! - a JSONL file, written when `WORDGATE_LOG_PATH`, `WORDGATE_LOG_DIR` or
//!   the `log_dir` config key names a location.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const ENV_LOG_PATH: &str = "WORDGATE_LOG_PATH";
const ENV_LOG_DIR: &str = "WORDGATE_LOG_DIR";
const DEFAULT_LOG_FILE: &str = "wordgate.jsonl";

/// Where (and how much) to write the JSONL log.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file; wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory that receives `wordgate.jsonl`.
    pub log_dir: Option<PathBuf>,
    /// Filter directive for the file sink.
    pub file_level: String,
}

impl ObservabilityConfig {
    /// Read log locations from the environment, preferring `log_dir` from
    /// config over `WORDGATE_LOG_DIR`.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>, file_level: &str) -> Self {
        Self {
            log_path: std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            log_dir: log_dir.or_else(|| std::env::var_os(ENV_LOG_DIR).map(PathBuf::from)),
            file_level: file_level.to_string(),
        }
    }

    /// Resolve the log file as `(directory, file name)`.
    fn log_file(&self) -> Option<(PathBuf, String)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let name = path.file_name()?.to_string_lossy().into_owned();
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), DEFAULT_LOG_FILE.to_string()))
    }
}

/// Console filter directive for the `-q`/`-v` flags.
pub const fn console_directive(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "off";
    }
    match verbose {
        0 => "off",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the console filter. `RUST_LOG` wins unless `--quiet` is given.
pub fn env_filter(quiet: bool, verbose: u8) -> EnvFilter {
    let directive = console_directive(quiet, verbose);
    if quiet || verbose > 0 {
        return EnvFilter::new(directive);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Install the global subscriber.
///
/// Hold the returned guard until exit; dropping it flushes the log file.
pub fn init_observability(
    config: &ObservabilityConfig,
    console_filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let (file, guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::new(&config.file_level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_is_silent_by_default() {
        assert_eq!(console_directive(false, 0), "off");
    }

    #[test]
    fn verbosity_raises_console_level() {
        assert_eq!(console_directive(false, 1), "info");
        assert_eq!(console_directive(false, 2), "debug");
        assert_eq!(console_directive(false, 5), "trace");
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(console_directive(true, 3), "off");
    }

    #[test]
    fn log_path_wins_over_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("/var/log/gate/run.jsonl")),
            log_dir: Some(PathBuf::from("/tmp/other")),
            file_level: "info".to_string(),
        };
        let (dir, name) = config.log_file().unwrap();
        assert_eq!(dir, PathBuf::from("/var/log/gate"));
        assert_eq!(name, "run.jsonl");
    }

    #[test]
    fn bare_log_path_uses_current_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("run.jsonl")),
            ..ObservabilityConfig::default()
        };
        let (dir, name) = config.log_file().unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "run.jsonl");
    }

    #[test]
    fn log_dir_uses_default_file_name() {
        let config = ObservabilityConfig {
            log_dir: Some(PathBuf::from("/tmp/logs")),
            ..ObservabilityConfig::default()
        };
        let (dir, name) = config.log_file().unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert_eq!(name, DEFAULT_LOG_FILE);
    }

    #[test]
    fn no_location_means_no_file() {
        assert!(ObservabilityConfig::default().log_file().is_none());
    }
}
