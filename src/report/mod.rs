//! Report renderers for command results.
//!
//! - [`terminal`] — colored tables for identifiers, scan summaries, and routes;
//!   respects `--quiet`. JSON output is written directly by `main`.

pub mod terminal;
