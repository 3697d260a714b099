//! Common utilities for the Lynx selector toolkit.
//!
//! This crate provides shared infrastructure used by the selector crate and the CLI:
//! - **Warning System** - colored, deduplicated terminal output for questionable input

pub mod warning;
