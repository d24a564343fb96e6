//! Program identity passed to everything that prints messages

use crate::error::CliError;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;

/// Name used when argv[0] is missing or unusable
pub const DEFAULT_PROGRAM_NAME: &str = "gc";

/// Invocation context for message formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramContext {
    program_name: String,
}

impl ProgramContext {
    /// Create a context with an explicit program name
    pub fn new(program_name: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
        }
    }

    /// Derive the program name from argv[0]
    pub fn from_arg0(arg0: Option<&OsStr>) -> Self {
        let name = arg0
            .and_then(|arg| Path::new(arg).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());
        Self::new(name)
    }

    /// Program name as shown in messages
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Format an error the way it is printed on standard error
    pub fn format_error(&self, err: &anyhow::Error) -> String {
        if err.downcast_ref::<CliError>().is_some() {
            format!("{}: {err}", self.program_name)
        } else {
            format!("{}: {err:#}", self.program_name)
        }
    }

    /// Print an error to `writer`
    pub fn report(&self, writer: &mut impl Write, err: &anyhow::Error) -> io::Result<()> {
        writeln!(writer, "{}", self.format_error(err))
    }
}

impl Default for ProgramContext {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM_NAME)
    }
}
