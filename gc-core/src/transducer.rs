//! Streaming whitespace and capitalization transducer
//!
//! A [`Transducer`] consumes one run (a file or standard input) a byte at a
//! time and decides, from a handful of carried flags, whether to drop the
//! byte, pass it through, or uppercase it. There is no lookahead and no
//! backtracking: every decision is final once the byte has been read.

use crate::byte_class::{is_lower, ByteClass};
use crate::error::{Error, Result};
use std::io::{self, BufRead, BufReader, Read, Write};

/// Read buffer size used by [`Transducer::process`]
pub const BUFFER_SIZE: usize = 64 * 1024;

/// Flags carried from one byte to the next within a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransducerState {
    /// A graphic byte has been emitted in this run
    pub seen_text_start: bool,
    /// The next lowercase letter starts a sentence
    pub seen_period: bool,
    /// Inside a run of collapsed whitespace
    pub seen_space: bool,
    /// Last byte written to the sink, cleared once a line start is reported
    pub last_emitted: Option<u8>,
}

/// Outcome of feeding one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write this byte to the sink
    Emit(u8),
    /// Nothing is written
    Drop,
}

/// Counters for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Bytes consumed from the source
    pub bytes_read: u64,
    /// Bytes written to the sink, not counting anything the hook wrote
    pub bytes_written: u64,
    /// Newlines written to the sink
    pub lines: u64,
    /// Number of times the line-start hook fired
    pub line_starts: u64,
}

/// Single-run normalizer
///
/// Create one per run. State is never shared across runs, so each file
/// starts capitalization and whitespace handling from scratch.
#[derive(Debug, Clone, Default)]
pub struct Transducer {
    state: TransducerState,
}

impl Transducer {
    /// Create a transducer at the start of a run
    pub fn new() -> Self {
        Self::default()
    }

    /// Current carried state
    pub fn state(&self) -> &TransducerState {
        &self.state
    }

    /// Report whether a line has just been completed
    ///
    /// Returns true once per emitted newline, and only when called again
    /// after that newline, i.e. when another input byte has arrived.
    pub fn take_line_start(&mut self) -> bool {
        if self.state.last_emitted == Some(b'\n') {
            self.state.last_emitted = None;
            true
        } else {
            false
        }
    }

    /// Feed one byte through the normalization rules
    ///
    /// The order of the checks below matters: leading whitespace is stripped
    /// before the collapse logic sees it, periods bypass capitalization, and
    /// the sentence-start flags are updated only after the case decision.
    pub fn step(&mut self, byte: u8) -> Action {
        let class = ByteClass::of(byte);
        let state = &mut self.state;

        if !state.seen_text_start && class == ByteClass::Whitespace {
            return Action::Drop;
        }

        if !state.seen_space && class == ByteClass::Whitespace {
            state.seen_space = true;
        } else if class == ByteClass::Graphic {
            state.seen_space = false;
        } else if class == ByteClass::Whitespace && byte != b'\n' {
            return Action::Drop;
        }

        if byte == b'.' {
            state.seen_period = true;
            state.last_emitted = Some(byte);
            return Action::Emit(byte);
        }

        let out = if (state.seen_period || !state.seen_text_start) && is_lower(byte) {
            byte.to_ascii_uppercase()
        } else {
            byte
        };

        if class == ByteClass::Graphic {
            state.seen_text_start = true;
            state.seen_period = false;
        }

        // A line break opens a new sentence. Only reachable once text has
        // started, since leading whitespace never gets this far.
        if out == b'\n' {
            state.seen_period = true;
        }

        state.last_emitted = Some(out);
        Action::Emit(out)
    }

    /// Stream `source` to end into `sink`
    ///
    /// `on_line_start` is called with the sink after a newline has been
    /// emitted and the next input byte has been read, before that byte is
    /// processed. A trailing newline therefore never triggers it. Anything
    /// the hook writes lands between the two lines.
    pub fn process<R, W, F>(
        &mut self,
        source: R,
        sink: &mut W,
        mut on_line_start: F,
    ) -> Result<RunStats>
    where
        R: Read,
        W: Write + ?Sized,
        F: FnMut(&mut W) -> io::Result<()>,
    {
        let mut reader = BufReader::with_capacity(BUFFER_SIZE, source);
        let mut pending = Vec::with_capacity(BUFFER_SIZE);
        let mut stats = RunStats::default();

        loop {
            let chunk = match reader.fill_buf() {
                Ok([]) => break,
                Ok(chunk) => chunk,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(Error::Read(err)),
            };
            let len = chunk.len();

            for &byte in chunk {
                if self.take_line_start() {
                    sink.write_all(&pending).map_err(Error::Write)?;
                    pending.clear();
                    on_line_start(&mut *sink).map_err(Error::Write)?;
                    stats.line_starts += 1;
                }

                if let Action::Emit(out) = self.step(byte) {
                    pending.push(out);
                    stats.bytes_written += 1;
                    if out == b'\n' {
                        stats.lines += 1;
                    }
                }
            }

            sink.write_all(&pending).map_err(Error::Write)?;
            pending.clear();
            stats.bytes_read += len as u64;
            reader.consume(len);
        }

        Ok(stats)
    }
}

/// Run a fresh transducer over `source` with a line-start hook
pub fn process<R, W, F>(source: R, sink: &mut W, on_line_start: F) -> Result<RunStats>
where
    R: Read,
    W: Write + ?Sized,
    F: FnMut(&mut W) -> io::Result<()>,
{
    Transducer::new().process(source, sink, on_line_start)
}

/// Run a fresh transducer over `source` without a line-start hook
pub fn normalize_to<R, W>(source: R, sink: &mut W) -> Result<RunStats>
where
    R: Read,
    W: Write + ?Sized,
{
    process(source, sink, |_| Ok(()))
}

/// Normalize an in-memory buffer as a single run
pub fn normalize(input: &[u8]) -> Vec<u8> {
    let mut transducer = Transducer::new();
    input
        .iter()
        .filter_map(|&byte| match transducer.step(byte) {
            Action::Emit(out) => Some(out),
            Action::Drop => None,
        })
        .collect()
}
