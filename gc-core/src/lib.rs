//! Whitespace and capitalization normalizer
//!
//! This crate implements a small finite-state transducer that cleans up plain
//! text in a single forward pass:
//!
//! - leading whitespace of a run is stripped,
//! - runs of whitespace collapse to their first byte, while every newline is
//!   kept as a line break,
//! - the first letter of the text, after a period, and after a line break is
//!   uppercased.
//!
//! Input is treated as raw bytes. See [`byte_class`] for the classification
//! the rules are built on.
//!
//! # Example
//!
//! ```rust
//! use gc_core::normalize;
//!
//! let out = normalize(b"  hello   world.the end");
//! assert_eq!(out, b"Hello world.The end");
//! ```
//!
//! Streaming with a line-start hook:
//!
//! ```rust
//! use gc_core::Transducer;
//!
//! let mut out = Vec::new();
//! Transducer::new()
//!     .process(&b"one\ntwo\n"[..], &mut out, |sink: &mut Vec<u8>| {
//!         sink.extend_from_slice(b"| ");
//!         Ok(())
//!     })
//!     .unwrap();
//! assert_eq!(out, b"One\n| Two\n");
//! ```

pub mod byte_class;
pub mod error;
pub mod transducer;

pub use byte_class::ByteClass;
pub use error::{Error, Result};
pub use transducer::{
    normalize, normalize_to, process, Action, RunStats, Transducer, TransducerState, BUFFER_SIZE,
};
