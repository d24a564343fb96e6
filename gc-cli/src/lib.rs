//! gc CLI library
//!
//! This library provides the command-line driver around the `gc-core`
//! normalizer: argument parsing, configuration, target resolution, filename
//! headers and error reporting.

pub mod cli;
pub mod config;
pub mod context;
pub mod driver;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
