//! Sequential run loop over all targets

use crate::error::CliError;
use crate::input::Target;
use crate::output::{HeaderStyle, HeaderWriter};
use gc_core::{RunStats, Transducer};
use std::io::{self, Read, Write};

/// Totals across all runs of one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverReport {
    /// Runs completed
    pub runs: usize,
    /// Bytes read across all runs
    pub bytes_read: u64,
    /// Transformed bytes written across all runs
    pub bytes_written: u64,
}

impl DriverReport {
    fn record(&mut self, stats: &RunStats) {
        self.runs += 1;
        self.bytes_read += stats.bytes_read;
        self.bytes_written += stats.bytes_written;
    }
}

/// Feeds each target through a fresh transducer, in order
#[derive(Debug, Clone, Copy, Default)]
pub struct Driver {
    headers: Option<HeaderStyle>,
}

impl Driver {
    /// Create a driver; `headers` enables per-line filename headers
    pub fn new(headers: Option<HeaderStyle>) -> Self {
        Self { headers }
    }

    /// Process every target into `out`, stopping at the first failure
    ///
    /// `out` is flushed after each run, so everything written before a
    /// failure has already reached the underlying stream.
    pub fn run<W: Write>(
        &self,
        targets: &[Target],
        out: &mut W,
    ) -> Result<DriverReport, CliError> {
        let mut report = DriverReport::default();

        for target in targets {
            let name = target.display_name();
            log::info!("Processing {name}");

            let source = target.open()?;
            let stats = self.run_one(source, &name, out)?;
            log::debug!(
                "{name}: read {} bytes, wrote {} bytes, {} lines",
                stats.bytes_read,
                stats.bytes_written,
                stats.lines
            );

            report.record(&stats);
        }

        Ok(report)
    }

    fn run_one<W: Write>(
        &self,
        source: Box<dyn Read>,
        name: &str,
        out: &mut W,
    ) -> Result<RunStats, CliError> {
        let io_error = |source: io::Error| CliError::Io {
            name: name.to_string(),
            source,
        };

        let result = match self.headers {
            Some(style) => {
                let mut sink = HeaderWriter::new(&mut *out, name, style);
                sink.write_header().map_err(io_error)?;
                Transducer::new().process(source, &mut sink, |sink| sink.write_header())
            }
            None => gc_core::normalize_to(source, out),
        };

        let stats = result.map_err(|err| io_error(err.into_io_error()))?;
        out.flush().map_err(io_error)?;
        Ok(stats)
    }
}
