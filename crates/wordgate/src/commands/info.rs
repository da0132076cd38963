//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};
use wordgate_core::config::{Config, ConfigSources, ExitCodeScheme};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    /// `None` when no limit applies.
    max_input_bytes: Option<usize>,
    exit_codes: String,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources, exit_codes: ExitCodeScheme) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes: config.input_limit(),
            exit_codes: exit_codes.as_str().to_string(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
/// * `exit_codes` - Exit code scheme after applying `--exit-codes`
#[instrument(name = "cmd_info", skip_all, fields(json_output = global_json))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    exit_codes: ExitCodeScheme,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources, exit_codes),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info.package.name.bold(),
        full_info.package.version.green()
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), full_info.package.license);
    }
    if !full_info.package.repository.is_empty() {
        println!(
            "{}: {}",
            "Repository".dimmed(),
            full_info.package.repository.cyan()
        );
    }

    println!();
    println!("{}", "Configuration".bold().underline());
    match full_info.config.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
    if let Some(ref dir) = full_info.config.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    match full_info.config.max_input_bytes {
        Some(max) => println!("{}: {} bytes", "Input limit".dimmed(), max),
        None => println!("{}: {}", "Input limit".dimmed(), "none".dimmed()),
    }
    println!("{}: {}", "Exit codes".dimmed(), full_info.config.exit_codes);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_info_text_succeeds() {
        let result = cmd_info(
            InfoArgs::default(),
            false,
            &Config::default(),
            &ConfigSources::default(),
            ExitCodeScheme::Distinct,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        let result = cmd_info(
            InfoArgs::default(),
            true,
            &Config::default(),
            &ConfigSources::default(),
            ExitCodeScheme::Flat,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_info_no_file() {
        let info = ConfigInfo::from_config(
            &Config::default(),
            &ConfigSources::default(),
            ExitCodeScheme::Distinct,
        );
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert!(info.max_input_bytes.is_none());
        assert_eq!(info.exit_codes, "distinct");
    }

    #[test]
    fn test_config_info_disabled_limit() {
        let config = Config {
            max_input_bytes: Some(4096),
            disable_input_limit: true,
            ..Config::default()
        };
        let info =
            ConfigInfo::from_config(&config, &ConfigSources::default(), ExitCodeScheme::Flat);
        assert!(info.max_input_bytes.is_none());
        assert_eq!(info.exit_codes, "flat");
    }
}
