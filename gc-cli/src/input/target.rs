//! Run targets resolved from command-line arguments

use crate::error::CliError;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Argument that selects standard input
pub const STDIN_ARG: &str = "-";

/// One input source, processed as a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Standard input
    Stdin,
    /// A named file
    File(PathBuf),
}

impl Target {
    /// Interpret a single argument; any byte sequence is a valid file name
    pub fn from_arg(arg: &OsStr) -> Self {
        if arg == OsStr::new(STDIN_ARG) {
            Target::Stdin
        } else {
            Target::File(PathBuf::from(arg))
        }
    }

    /// Resolve the argument list; no arguments means a single stdin run
    pub fn from_args<S: AsRef<OsStr>>(args: &[S]) -> Vec<Self> {
        if args.is_empty() {
            return vec![Target::Stdin];
        }
        args.iter().map(|arg| Self::from_arg(arg.as_ref())).collect()
    }

    /// Name used in headers and error messages
    pub fn display_name(&self) -> String {
        match self {
            Target::Stdin => "(standard input)".to_string(),
            Target::File(path) => path.display().to_string(),
        }
    }

    /// Open the target for reading
    pub fn open(&self) -> Result<Box<dyn Read>, CliError> {
        match self {
            Target::Stdin => Ok(Box::new(io::stdin())),
            Target::File(path) => open_file(path).map_err(|source| CliError::TargetOpen {
                name: self.display_name(),
                source,
            }),
        }
    }
}

fn open_file(path: &Path) -> io::Result<Box<dyn Read>> {
    Ok(Box::new(File::open(path)?))
}
