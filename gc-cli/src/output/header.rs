//! Filename header decorator
//!
//! When several files are streamed to a terminal, every output line is
//! prefixed with the name of the file it came from. The decorator only knows
//! how to write that prefix on request; deciding when is up to the caller.

use std::io::{self, Write};

const BOLD: &[u8] = b"\x1b[1m";
const RESET: &[u8] = b"\x1b[0m";

/// How a header is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    /// Wrap the name in ANSI bold
    pub bold: bool,
}

impl HeaderStyle {
    /// Render the header bytes for `name`
    pub fn render(&self, name: &str) -> Vec<u8> {
        let mut header = Vec::with_capacity(name.len() + BOLD.len() + RESET.len() + 2);
        if self.bold {
            header.extend_from_slice(BOLD);
            header.extend_from_slice(name.as_bytes());
            header.extend_from_slice(RESET);
        } else {
            header.extend_from_slice(name.as_bytes());
        }
        header.extend_from_slice(b": ");
        header
    }
}

/// Writer that can interleave a filename header into the stream
pub struct HeaderWriter<W: Write> {
    inner: W,
    header: Vec<u8>,
}

impl<W: Write> HeaderWriter<W> {
    /// Wrap `inner`, labelling output with `name`
    pub fn new(inner: W, name: &str, style: HeaderStyle) -> Self {
        Self {
            inner,
            header: style.render(name),
        }
    }

    /// Write the header at the current position
    pub fn write_header(&mut self) -> io::Result<()> {
        self.inner.write_all(&self.header)
    }
}

impl<W: Write> Write for HeaderWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_header() {
        let style = HeaderStyle { bold: true };
        assert_eq!(style.render("a.txt"), b"\x1b[1ma.txt\x1b[0m: ");
    }

    #[test]
    fn test_plain_header() {
        let style = HeaderStyle { bold: false };
        assert_eq!(style.render("a.txt"), b"a.txt: ");
    }

    #[test]
    fn test_passes_writes_through() {
        let mut buf = Vec::new();
        let mut writer = HeaderWriter::new(&mut buf, "a.txt", HeaderStyle { bold: false });
        writer.write_all(b"body").unwrap();
        writer.flush().unwrap();
        assert_eq!(buf, b"body");
    }

    #[test]
    fn test_header_between_lines() {
        let mut buf = Vec::new();
        let mut writer = HeaderWriter::new(&mut buf, "b", HeaderStyle { bold: false });
        writer.write_header().unwrap();
        writer.write_all(b"One\n").unwrap();
        writer.write_header().unwrap();
        writer.write_all(b"Two").unwrap();
        assert_eq!(buf, b"b: One\nb: Two");
    }

    #[test]
    fn test_wraps_borrowed_writer() {
        let mut buf = Vec::new();
        {
            let mut writer = HeaderWriter::new(&mut buf, "c", HeaderStyle { bold: true });
            writer.write_header().unwrap();
        }
        assert_eq!(buf, b"\x1b[1mc\x1b[0m: ");
    }
}
