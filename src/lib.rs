//! `license-literals` — reduce source files to the comments and string
//! literals that may carry license text.
//!
//! # Flow
//! 1. Resolve a [`models::MimeType`] ([`detector`]).
//! 2. Look up its syntax profile and lex the text ([`extractor`]).
//! 3. Merge adjacent comments and order everything by line.
//! 4. Split the literals into license-relevant and other text ([`relevance`]).
//!
//! [`scan`] runs the whole thing over files on disk for the CLI.

pub mod config;
pub mod detector;
pub mod error;
pub mod extractor;
pub mod models;
pub mod relevance;
pub mod scan;

pub use error::{ExtractError, Result};
pub use extractor::{extract, extract_or_empty, ExtractOptions, UnterminatedBlock};
pub use models::MimeType;
pub use relevance::{split_relevant, RelevanceSplit};
