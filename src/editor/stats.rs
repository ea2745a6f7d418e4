//! Text statistics for the status bar
//!
//! Counts words, characters and lines of the current text, plus how often
//! the current search term occurs in it.

use super::count_occurrences;

/// Statistics for the current text and search term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Number of words (runs of non-whitespace characters)
    pub words: usize,
    /// Number of characters including whitespace
    pub characters: usize,
    /// Number of characters excluding whitespace
    pub characters_no_spaces: usize,
    /// Number of lines; empty text counts as one line
    pub lines: usize,
    /// Case-insensitive occurrences of the search term
    pub matches: usize,
}

impl TextStats {
    /// Calculate statistics for `text` against the literal `search` term.
    pub fn from_text(text: &str, search: &str) -> Self {
        let characters = text.chars().count();
        let whitespace = text.chars().filter(|c| c.is_whitespace()).count();

        Self {
            words: text.split_whitespace().count(),
            characters,
            characters_no_spaces: characters - whitespace,
            lines: text.split('\n').count(),
            matches: count_occurrences(text, search),
        }
    }

    /// Format for the status bar, e.g. "12 words | 64 chars | 3 lines".
    ///
    /// The match count is appended only when a search term is present.
    pub fn format_compact(&self, has_search: bool) -> String {
        let mut out = format!(
            "{} words | {} chars | {} lines",
            self.words, self.characters, self.lines
        );
        if has_search {
            out.push_str(&format!(
                " | {} match{}",
                self.matches,
                if self.matches == 1 { "" } else { "es" }
            ));
        }
        out
    }
}
