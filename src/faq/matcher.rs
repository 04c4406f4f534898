//! Ordered guarded-rule matcher for canned FAQ answers.
//!
//! Each entry is a rule: include substrings, exclude substrings and a minimum
//! query length guard the canned payload. Rules are scanned once in list
//! order and the first qualifying entry wins. Overlapping triggers across
//! entries resolve by position, not by which pattern is more specific.

use serde::{Deserialize, Serialize};

use crate::corpus::SourceRef;

/// Queries shorter than this (after trimming) never match unless an entry overrides it.
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    /// Lower-case trigger substrings.
    pub patterns: Vec<String>,
    /// Lower-case substrings that disqualify the entry even when a trigger matches.
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
    #[serde(default)]
    pub min_query_length: Option<usize>,
    pub answer: String,
    pub sources: Vec<SourceRef>,
}

impl FaqEntry {
    pub fn min_query_length(&self) -> usize {
        self.min_query_length.unwrap_or(DEFAULT_MIN_QUERY_LENGTH)
    }

    /// `normalized` must already be trimmed and lower-cased.
    fn is_excluded(&self, normalized: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|exclude| normalized.contains(exclude.as_str()))
    }

    fn matching_pattern(&self, normalized: &str) -> Option<&str> {
        self.patterns
            .iter()
            .map(String::as_str)
            .find(|pattern| normalized.contains(pattern))
    }
}

/// A hit: the winning entry and the trigger that selected it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqMatch<'a> {
    pub entry: &'a FaqEntry,
    pub pattern: &'a str,
    pub position: usize,
}

/// Canned answer returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqResponse {
    pub answer: String,
    pub sources: Vec<SourceRef>,
}

#[derive(Debug, Clone, Default)]
pub struct FaqMatcher {
    entries: Vec<FaqEntry>,
}

impl FaqMatcher {
    /// `entries` are in priority order.
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, query: &str) -> Option<FaqMatch<'_>> {
        let normalized = query.trim().to_lowercase();
        let length = normalized.chars().count();

        for (position, entry) in self.entries.iter().enumerate() {
            if length < entry.min_query_length() {
                continue;
            }
            if entry.is_excluded(&normalized) {
                continue;
            }
            if let Some(pattern) = entry.matching_pattern(&normalized) {
                tracing::debug!("FAQ cache hit: entry {} matched \"{}\"", position, pattern);
                return Some(FaqMatch {
                    entry,
                    pattern,
                    position,
                });
            }
        }

        None
    }

    pub fn respond(&self, query: &str) -> Option<FaqResponse> {
        self.find(query).map(|hit| FaqResponse {
            answer: hit.entry.answer.clone(),
            sources: hit.entry.sources.clone(),
        })
    }
}
