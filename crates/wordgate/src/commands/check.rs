//! Check command: fail when a solution contains a banned word.
//!
//! This is the default action: it runs when no subcommand is given.
//! A clean file produces no output. A violation prints
//! `Word <word> is banned!` to stderr.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use wordgate_core::{BannedWords, ScanReport, scan};

use super::{Verdict, read_input_file};

/// Arguments for the banned-word check.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Path to the file to be checked
    #[arg(long, value_name = "FILE", required_unless_present = "version_only")]
    pub solution: Option<Utf8PathBuf>,

    /// Path to the JSON file listing banned words
    #[arg(long, value_name = "FILE", required_unless_present = "version_only")]
    pub banned_words: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    solution: &'a Utf8PathBuf,
    banned_words: &'a Utf8PathBuf,
    #[serde(flatten)]
    report: &'a ScanReport,
}

/// Check a solution file against a banned-words JSON file.
///
/// The banned-words file is read and parsed first, then the solution.
/// Returns [`Verdict::Banned`] after reporting the first banned word by
/// list order; I/O and parse failures are errors.
#[instrument(name = "cmd_check", skip_all)]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<Verdict> {
    let (Some(solution), Some(banned_words)) = (args.solution, args.banned_words) else {
        bail!("both --solution and --banned-words are required");
    };
    debug!(%solution, %banned_words, "executing check command");

    let json = read_input_file(&banned_words, max_input_bytes)?;
    let words = BannedWords::from_json_str(&json)
        .with_context(|| format!("failed to parse {banned_words}"))?;

    let content = read_input_file(&solution, max_input_bytes)?;
    let report = scan::check(&content, &words)
        .with_context(|| format!("failed to check {solution}"))?;

    if global_json {
        let output = CheckOutput {
            solution: &solution,
            banned_words: &banned_words,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    match report.violation {
        Some(ref violation) => {
            eprintln!("{}", violation.message());
            Ok(Verdict::Banned)
        }
        None => Ok(Verdict::Pass),
    }
}
