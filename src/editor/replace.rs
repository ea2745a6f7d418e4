//! Replace All for Textswap
//!
//! Validates a search/replace pair against the current text and substitutes
//! every case-insensitive occurrence of the search term with the replacement,
//! inserted exactly as typed.
//!
//! Validation runs in a fixed order and stops at the first failure:
//! 1. both terms present
//! 2. terms differ (ignoring case)
//! 3. the search term occurs in the text

use std::fmt;

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::MatchMode;

// ─────────────────────────────────────────────────────────────────────────────
// Replace Query
// ─────────────────────────────────────────────────────────────────────────────

/// The search/replace term pair edited by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceQuery {
    /// Text to look for
    pub search: String,
    /// Text to put in its place
    pub replace: String,
}

impl ReplaceQuery {
    /// Reset both terms to empty.
    pub fn clear(&mut self) {
        self.search.clear();
        self.replace.clear();
    }

    /// Check the term-only rules (presence and distinctness).
    fn validate_terms(&self) -> Result<(), ReplaceError> {
        if self.search.is_empty() || self.replace.is_empty() {
            return Err(ReplaceError::EmptyQuery);
        }
        if self.search.to_lowercase() == self.replace.to_lowercase() {
            return Err(ReplaceError::IdenticalTerms);
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Why a Replace All request was refused.
///
/// These are user input problems, not faults: the text is never modified
/// when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceError {
    /// Search or replace field is blank
    EmptyQuery,
    /// Search and replace are equal ignoring case
    IdenticalTerms,
    /// The search term does not occur in the text
    TermNotFound { search: String },
    /// The search term is not a valid pattern (pattern mode only)
    InvalidPattern { message: String },
}

impl fmt::Display for ReplaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplaceError::EmptyQuery => {
                write!(f, "Please enter both search and replace values.")
            }
            ReplaceError::IdenticalTerms => {
                write!(f, "Search text and replace text cannot be the same.")
            }
            ReplaceError::TermNotFound { search } => {
                write!(f, "The text does not contain \"{}\".", search)
            }
            ReplaceError::InvalidPattern { message } => {
                write!(f, "The search pattern is not valid: {}", message)
            }
        }
    }
}

impl std::error::Error for ReplaceError {}

// ─────────────────────────────────────────────────────────────────────────────
// Replace All
// ─────────────────────────────────────────────────────────────────────────────

/// Output of a successful Replace All.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// The text with every occurrence substituted
    pub text: String,
    /// How many occurrences were substituted (always at least one)
    pub count: usize,
}

/// Replace every case-insensitive occurrence of `query.search` in `text`.
///
/// Matches are found left to right and never overlap. The replacement is
/// inserted literally: no case adjustment and no `$1`-style expansion, even
/// in pattern mode.
pub fn replace_all(
    text: &str,
    query: &ReplaceQuery,
    mode: MatchMode,
) -> Result<Replacement, ReplaceError> {
    query.validate_terms()?;

    let matcher = build_matcher(&query.search, mode)?;
    let matches = find_matches(&matcher, text);

    if matches.is_empty() {
        return Err(ReplaceError::TermNotFound {
            search: query.search.clone(),
        });
    }

    let mut new_text = String::with_capacity(text.len());
    let mut last_end = 0;

    for &(start, end) in &matches {
        new_text.push_str(&text[last_end..start]);
        new_text.push_str(&query.replace);
        last_end = end;
    }

    new_text.push_str(&text[last_end..]);

    debug!(
        "Replaced {} occurrence(s) of {:?} ({:?} mode)",
        matches.len(),
        query.search,
        mode
    );

    Ok(Replacement {
        text: new_text,
        count: matches.len(),
    })
}

/// Count case-insensitive literal occurrences of `search` in `text`.
///
/// Returns 0 for an empty search term.
pub fn count_occurrences(text: &str, search: &str) -> usize {
    if search.is_empty() {
        return 0;
    }
    match build_matcher(search, MatchMode::Literal) {
        Ok(matcher) => find_matches(&matcher, text).len(),
        Err(_) => 0,
    }
}

/// Compile the case-insensitive matcher for a search term.
fn build_matcher(search: &str, mode: MatchMode) -> Result<Regex, ReplaceError> {
    let pattern = match mode {
        MatchMode::Literal => regex::escape(search),
        MatchMode::Pattern => search.to_string(),
    };

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| {
            debug!("Invalid search pattern '{}': {}", search, e);
            ReplaceError::InvalidPattern {
                message: e.to_string(),
            }
        })
}

/// Collect non-empty matches as (start, end) byte positions.
///
/// Empty matches are dropped: a pattern like `x*` must not splice the
/// replacement between every character.
fn find_matches(matcher: &Regex, text: &str) -> Vec<(usize, usize)> {
    matcher
        .find_iter(text)
        .filter(|m| !m.is_empty())
        .map(|m| (m.start(), m.end()))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
