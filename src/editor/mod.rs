//! Editor module for Textswap
//!
//! Framework-independent text operations: Replace All with its validation
//! rules, and the statistics shown in the status bar.

mod replace;
mod stats;

pub use replace::{count_occurrences, replace_all, ReplaceError, ReplaceQuery, Replacement};
pub use stats::TextStats;
