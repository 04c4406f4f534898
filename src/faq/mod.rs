//! Canned answers for frequently asked policy questions.
//!
//! Checked before retrieval so common questions skip embedding and generation.

pub mod entries;
pub mod matcher;

pub use entries::{default_entries, default_faq};
pub use matcher::{FaqEntry, FaqMatch, FaqMatcher, FaqResponse, DEFAULT_MIN_QUERY_LENGTH};
