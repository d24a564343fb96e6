//! Command-line arguments and the top-level command

use crate::config::{CliConfig, HeaderMode};
use crate::context::ProgramContext;
use crate::driver::Driver;
use crate::error::CliResult;
use crate::input::Target;
use crate::output::HeaderStyle;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;

/// Grammar corrector: collapses whitespace and capitalizes sentences
#[derive(Debug, Parser)]
#[command(name = "gc", version)]
#[command(
    long_about = "Corrects capitalization and collapses white-space in each of the input \
files, writing the result to standard output.\n\n\
Leading white-space is removed, runs of white-space are reduced to their first \
character (line breaks are always kept), and the first letter of the text, after a \
period, and after a line break is capitalized."
)]
#[command(after_help = "With no FILE, or when FILE is -, read standard input.")]
pub struct Cli {
    /// Files to correct, processed in order
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// When to prefix each output line with its file name
    #[arg(long, value_enum, value_name = "WHEN", env = "GC_HEADERS")]
    pub headers: Option<HeaderMode>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "GC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse arguments, naming the program after `context` in help and usage
    pub fn try_parse_with<I, T>(context: &ProgramContext, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command()
            .bin_name(context.program_name())
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    /// Execute the command against the process's standard streams
    pub fn execute(&self) -> CliResult<()> {
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let targets = Target::from_args(&self.files);

        let stdout = io::stdout();
        let style = self.header_style(&config, targets.len(), stdout.is_terminal());
        log::info!(
            "Processing {} target(s), headers {}",
            targets.len(),
            if style.is_some() { "on" } else { "off" }
        );

        let mut out = BufWriter::new(stdout.lock());
        let report = Driver::new(style).run(&targets, &mut out)?;
        log::info!(
            "Done: {} run(s), {} bytes in, {} bytes out",
            report.runs,
            report.bytes_read,
            report.bytes_written
        );

        Ok(())
    }

    /// Resolve header settings; command line beats the config file
    pub fn header_style(
        &self,
        config: &CliConfig,
        target_count: usize,
        stdout_is_terminal: bool,
    ) -> Option<HeaderStyle> {
        let mode = self.headers.unwrap_or(config.output.headers);
        mode.enabled(target_count, stdout_is_terminal)
            .then_some(HeaderStyle {
                bold: config.output.bold,
            })
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}
