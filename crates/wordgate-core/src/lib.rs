//! Core library for wordgate.
//!
//! Loads a banned-word list and checks text against it. This crate never
//! prints; the `wordgate` CLI owns all output and exit codes.
//!
//! # Modules
//!
//! - [`wordlist`] - Banned-word list parsing
//! - [`scan`] - Substring scan reporting the first banned word by list order
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordgate_core::{BannedWords, scan};
//!
//! let words = BannedWords::from_json_str(r#"{"banned_words": ["eval", "exec"]}"#)?;
//! let report = scan::check("result = eval(x)", &words)?;
//!
//! assert!(!report.pass);
//! assert_eq!(report.violation.unwrap().message(), "Word eval is banned!");
//! # Ok::<(), wordgate_core::GateError>(())
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod scan;
pub mod wordlist;

pub use config::{Config, ConfigLoader, ConfigSources, ExitCodeScheme, LogLevel};
pub use error::{ConfigError, ConfigResult, GateError, GateResult};
pub use scan::{ScanReport, Violation};
pub use wordlist::BannedWords;
