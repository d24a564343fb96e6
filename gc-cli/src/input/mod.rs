//! Input handling module

pub mod target;

pub use target::{Target, STDIN_ARG};
