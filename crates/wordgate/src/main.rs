//! wordgate CLI
#![deny(unsafe_code)]

use std::process::ExitCode;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use tracing::{debug, info};
use wordgate::commands::{self, Verdict};
use wordgate::{Cli, Commands};
use wordgate_core::config::{Config, ConfigLoader, ConfigSources, ExitCodeScheme};

mod observability;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let (config, config_sources) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(err) => return fail(&err, cli.exit_codes.unwrap_or_default()),
    };
    let exit_codes = cli.exit_codes.unwrap_or(config.exit_codes);

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
        config.log_level.as_str(),
    );
    let env_filter = observability::env_filter(cli.quiet, cli.verbose);
    let _guard = match observability::init_observability(&obs_config, env_filter)
        .context("failed to initialize logging/tracing")
    {
        Ok(guard) => guard,
        Err(err) => return fail(&err, exit_codes),
    };

    info!(
        config_file = ?config_sources.primary_file(),
        log_level = config.log_level.as_str(),
        exit_codes = %exit_codes,
        input_limit = ?config.input_limit(),
        "configuration loaded"
    );
    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        exit_codes = %exit_codes,
        "CLI initialized"
    );

    let result = match cli.command {
        Some(Commands::Info(args)) => {
            commands::info::cmd_info(args, cli.json, &config, &config_sources, exit_codes)
                .map(|()| Verdict::Pass)
        }
        None => commands::check::cmd_check(cli.check, cli.json, config.input_limit()),
    };

    match result {
        Ok(Verdict::Pass) => ExitCode::SUCCESS,
        Ok(Verdict::Banned) => ExitCode::from(exit_codes.violation()),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "fatal error");
            fail(&err, exit_codes)
        }
    }
}

/// Change directory if asked, then discover and merge configuration.
fn load_config(cli: &Cli) -> anyhow::Result<(Config, ConfigSources)> {
    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    loader.load().context("failed to load configuration")
}

/// Report a fatal error on stderr and pick the matching exit code.
fn fail(err: &anyhow::Error, exit_codes: ExitCodeScheme) -> ExitCode {
    eprintln!("Error: {err:#}");
    ExitCode::from(exit_codes.failure())
}
