//! Report renderers for scan results.
//!
//! - [`terminal`] — colored summary box and per-file tables; respects `--verbose` / `--quiet`.
//! - [`text`] — plain relevant/other blobs, ready for the downstream tokenizer.
//!
//! JSON output is a direct `serde_json` dump of the reports.

pub mod terminal;
pub mod text;
