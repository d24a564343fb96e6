//! Error handling for the CLI application

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// A named target could not be opened
    TargetOpen {
        /// Target as given on the command line
        name: String,
        /// Underlying system error
        source: io::Error,
    },
    /// Reading a target or writing its output failed mid-run
    Io {
        /// Target being processed
        name: String,
        /// Underlying system error
        source: io::Error,
    },
    /// Configuration file could not be read or parsed
    Config {
        /// Path of the configuration file
        path: PathBuf,
        /// What went wrong
        reason: String,
    },
}

impl CliError {
    /// Process exit status for this error
    ///
    /// I/O failures exit with the system error code when there is one.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::TargetOpen { source, .. } | CliError::Io { source, .. } => source
                .raw_os_error()
                .map(|code| code.clamp(1, 255) as u8)
                .unwrap_or(1),
            CliError::Config { .. } => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::TargetOpen { name, source } => write!(f, "{name}: {source}"),
            CliError::Io { name, source } => write!(f, "{name}: {source}"),
            CliError::Config { path, reason } => {
                write!(f, "invalid configuration in {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::TargetOpen { source, .. } | CliError::Io { source, .. } => Some(source),
            CliError::Config { .. } => None,
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// Exit status for an error surfaced at the binary edge
pub fn exit_code_of(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> io::Error {
        io::Error::from_raw_os_error(2)
    }

    #[test]
    fn test_target_open_display() {
        let error = CliError::TargetOpen {
            name: "missing.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(error.to_string(), "missing.txt: no such file");
    }

    #[test]
    fn test_io_error_display() {
        let error = CliError::Io {
            name: "-".to_string(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"),
        };
        assert_eq!(error.to_string(), "-: broken pipe");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::Config {
            path: PathBuf::from("gc.toml"),
            reason: "unknown field `colour`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid configuration in gc.toml: unknown field `colour`"
        );
    }

    #[test]
    fn test_exit_code_uses_os_error() {
        let error = CliError::TargetOpen {
            name: "missing.txt".to_string(),
            source: not_found(),
        };
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_without_os_error() {
        let error = CliError::Io {
            name: "a.txt".to_string(),
            source: io::Error::new(io::ErrorKind::Other, "synthetic"),
        };
        assert_eq!(error.exit_code(), 1);

        let error = CliError::Config {
            path: PathBuf::from("gc.toml"),
            reason: "bad".to_string(),
        };
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_is_never_zero() {
        let error = CliError::Io {
            name: "a.txt".to_string(),
            source: io::Error::from_raw_os_error(0),
        };
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_source_is_exposed() {
        let error = CliError::TargetOpen {
            name: "missing.txt".to_string(),
            source: not_found(),
        };
        let source = std::error::Error::source(&error).unwrap();
        assert!(source.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn test_exit_code_through_anyhow() {
        let error: anyhow::Error = CliError::TargetOpen {
            name: "missing.txt".to_string(),
            source: not_found(),
        }
        .into();
        assert_eq!(exit_code_of(&error), 2);
        assert_eq!(exit_code_of(&anyhow::anyhow!("other failure")), 1);
    }
}
