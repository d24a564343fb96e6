//! Output handling module

pub mod header;

pub use header::{HeaderStyle, HeaderWriter};
