//! Library side of the `trakx` command-line tool.
//!
//! Commands return plain reports so they can be rendered as tables or JSON
//! and exercised from tests without spawning the binary.

#![deny(unsafe_code)]

pub mod commands;
pub mod logging;
pub mod summary;
