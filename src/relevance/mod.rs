//! License-relevance filtering of extracted literals.
//!
//! - [`filter`] — splits literals into license-relevant and other text using a
//!   fixed trigger-word pattern.
//! - [`scoring`] — picks the single most license-like literal and chooses the
//!   text handed to the classifier.

pub mod filter;
pub mod scoring;

pub use filter::{is_license_relevant, split_relevant, RelevanceSplit};
pub use scoring::{best_license_comment, select_text};
