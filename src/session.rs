//! Text editor session state for Textswap
//!
//! This module defines `Session`, the single owner of everything the user
//! edits during a run: the text buffer, the search/replace pair, the result
//! of the last replacement, and the transient UI state (theme and modal).
//!
//! All mutation goes through named operations so the interaction rules can
//! be tested without a rendering framework:
//!
//! - Only one modal is ever open; `Modal` is a single tagged value.
//! - A failed Replace All never touches the text, query or result.
//! - Editing the text drops the stored replacement result.
//! - Clear is two-step: `request_clear` then `confirm_clear`/`cancel_clear`.

use log::{debug, info};

use crate::config::{MatchMode, Theme};
use crate::editor::{replace_all, ReplaceError, ReplaceQuery, Replacement, TextStats};

// ─────────────────────────────────────────────────────────────────────────────
// Modal State
// ─────────────────────────────────────────────────────────────────────────────

/// The dialog currently blocking the window, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No dialog open
    #[default]
    None,
    /// Waiting for the user to confirm or cancel Clear
    ClearConfirm,
    /// Showing the most recent Replace All failure
    Error(ReplaceError),
}

impl Modal {
    /// Whether any dialog is open.
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::None)
    }
}

/// Transient presentation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Active display theme
    theme: Theme,
    /// Open dialog
    modal: Modal,
}

/// What happened when Replace All was invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The text was rewritten; carries the number of replaced occurrences
    Replaced(usize),
    /// Validation failed and the Error modal is now showing
    Rejected(ReplaceError),
    /// A pending clear confirmation must be resolved first; nothing evaluated
    Blocked,
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// All state of one editing session.
///
/// # Example
///
/// ```ignore
/// let mut session = Session::new(Theme::Light, MatchMode::Literal);
/// session.set_text("The Cat sat");
/// session.set_search("cat");
/// session.set_replace("dog");
/// assert_eq!(session.replace_all(), ReplaceOutcome::Replaced(1));
/// assert_eq!(session.displayed_text(), "The dog sat");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Current document text
    text: String,
    /// Search/replace pair
    query: ReplaceQuery,
    /// Output of the last successful replacement, dropped on the next edit
    result: Option<String>,
    /// How the search term is interpreted
    match_mode: MatchMode,
    /// Theme and modal
    ui: UiState,
}

impl Session {
    /// Create an empty session.
    pub fn new(theme: Theme, match_mode: MatchMode) -> Self {
        debug!("Session created: theme {:?}, {:?} matching", theme, match_mode);
        Self {
            match_mode,
            ui: UiState {
                theme,
                modal: Modal::None,
            },
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Current document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current search term.
    pub fn search(&self) -> &str {
        &self.query.search
    }

    /// Current replacement term.
    pub fn replace(&self) -> &str {
        &self.query.replace
    }

    /// Output of the last successful replacement, if still valid.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// The text shown in the "Replaced Text" view: the last result if there
    /// is one, otherwise the unmodified buffer.
    pub fn displayed_text(&self) -> &str {
        self.result.as_deref().unwrap_or(&self.text)
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.ui.theme
    }

    /// Open dialog.
    pub fn modal(&self) -> &Modal {
        &self.ui.modal
    }

    /// Search term interpretation used by Replace All.
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Statistics for the status bar.
    pub fn stats(&self) -> TextStats {
        TextStats::from_text(&self.text, &self.query.search)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the document text with a user edit.
    ///
    /// Any stored replacement result no longer describes the buffer and is
    /// dropped. Edits are accepted while a modal is open; the buffer itself
    /// is never locked.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.text = text;
        if self.result.take().is_some() {
            debug!("Text edited, replacement result invalidated");
        }
    }

    /// Update the search term.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    /// Update the replacement term.
    pub fn set_replace(&mut self, replace: impl Into<String>) {
        self.query.replace = replace.into();
    }

    /// Change how the search term is interpreted.
    pub fn set_match_mode(&mut self, mode: MatchMode) {
        if self.match_mode != mode {
            info!("Match mode changed from {:?} to {:?}", self.match_mode, mode);
            self.match_mode = mode;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Replace All
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace every occurrence of the search term in the text.
    ///
    /// On success the buffer and the result both become the new text, and an
    /// Error modal left over from an earlier failure is closed. On a
    /// validation failure the Error modal opens (overwriting any previous
    /// error) and nothing else changes. While a clear confirmation is
    /// pending the request is not evaluated at all.
    pub fn replace_all(&mut self) -> ReplaceOutcome {
        if self.ui.modal == Modal::ClearConfirm {
            debug!("Replace All ignored while clear confirmation is pending");
            return ReplaceOutcome::Blocked;
        }

        match replace_all(&self.text, &self.query, self.match_mode) {
            Ok(Replacement { text, count }) => {
                info!("Replaced {} occurrence(s)", count);
                self.result = Some(text.clone());
                self.text = text;
                if matches!(self.ui.modal, Modal::Error(_)) {
                    debug!("Stale error closed by successful Replace All");
                    self.ui.modal = Modal::None;
                }
                ReplaceOutcome::Replaced(count)
            }
            Err(err) => {
                debug!("Replace All rejected: {}", err);
                self.ui.modal = Modal::Error(err.clone());
                ReplaceOutcome::Rejected(err)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Clear (two-step confirm)
    // ─────────────────────────────────────────────────────────────────────────

    /// Ask for confirmation before clearing.
    ///
    /// Returns `false` if another dialog is already open.
    pub fn request_clear(&mut self) -> bool {
        if self.ui.modal.is_open() {
            debug!("Clear request ignored, {:?} is open", self.ui.modal);
            return false;
        }
        self.ui.modal = Modal::ClearConfirm;
        true
    }

    /// Confirm a pending clear: text, query and result are emptied.
    ///
    /// Returns `false` (and changes nothing) if no clear is pending.
    pub fn confirm_clear(&mut self) -> bool {
        if self.ui.modal != Modal::ClearConfirm {
            return false;
        }
        self.text.clear();
        self.query.clear();
        self.result = None;
        self.ui.modal = Modal::None;
        info!("Session cleared");
        true
    }

    /// Cancel a pending clear without touching any content.
    ///
    /// Returns `false` if no clear is pending.
    pub fn cancel_clear(&mut self) -> bool {
        if self.ui.modal != Modal::ClearConfirm {
            return false;
        }
        self.ui.modal = Modal::None;
        debug!("Clear cancelled");
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Error Notification
    // ─────────────────────────────────────────────────────────────────────────

    /// Close the Error modal.
    ///
    /// Returns `false` if no error is showing.
    pub fn dismiss_error(&mut self) -> bool {
        if !matches!(self.ui.modal, Modal::Error(_)) {
            return false;
        }
        self.ui.modal = Modal::None;
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────────────────────

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.ui.theme = self.ui.theme.toggle();
        info!("Theme toggled to {:?}", self.ui.theme);
        self.ui.theme
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(text: &str, search: &str, replace: &str) -> Session {
        let mut session = Session::new(Theme::Light, MatchMode::Literal);
        session.set_text(text);
        session.set_search(search);
        session.set_replace(replace);
        session
    }

    /// Snapshot of the four user-visible values.
    fn contents(session: &Session) -> (String, String, String, String) {
        (
            session.text().to_string(),
            session.search().to_string(),
            session.replace().to_string(),
            session.displayed_text().to_string(),
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_session_new_is_empty() {
        let session = Session::new(Theme::Dark, MatchMode::Literal);
        assert!(session.text().is_empty());
        assert!(session.search().is_empty());
        assert!(session.replace().is_empty());
        assert!(session.result().is_none());
        assert_eq!(session.theme(), Theme::Dark);
        assert_eq!(session.modal(), &Modal::None);
        assert!(!session.modal().is_open());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Replace All
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_replace_all_success_updates_text_and_result() {
        let mut session = session_with("The Cat sat", "cat", "dog");

        assert_eq!(session.replace_all(), ReplaceOutcome::Replaced(1));
        assert_eq!(session.text(), "The dog sat");
        assert_eq!(session.result(), Some("The dog sat"));
        assert_eq!(session.displayed_text(), "The dog sat");
        assert_eq!(session.modal(), &Modal::None);
    }

    #[test]
    fn test_replace_all_keeps_query() {
        let mut session = session_with("a b a", "a", "c");
        session.replace_all();
        assert_eq!(session.search(), "a");
        assert_eq!(session.replace(), "c");
    }

    #[test]
    fn test_replace_all_empty_query_opens_error() {
        let mut session = session_with("hello", "", "x");

        assert_eq!(
            session.replace_all(),
            ReplaceOutcome::Rejected(ReplaceError::EmptyQuery)
        );
        assert_eq!(session.text(), "hello");
        assert!(session.result().is_none());
        assert_eq!(session.modal(), &Modal::Error(ReplaceError::EmptyQuery));
    }

    #[test]
    fn test_replace_all_not_found() {
        let mut session = session_with("hello world", "xyz", "abc");
        let outcome = session.replace_all();
        assert!(matches!(
            outcome,
            ReplaceOutcome::Rejected(ReplaceError::TermNotFound { .. })
        ));
        assert_eq!(session.text(), "hello world");
    }

    #[test]
    fn test_replace_all_identical_terms() {
        let mut session = session_with("abc", "ABC", "abc");
        assert_eq!(
            session.replace_all(),
            ReplaceOutcome::Rejected(ReplaceError::IdenticalTerms)
        );
        assert_eq!(session.text(), "abc");
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let mut session = session_with("The Cat sat", "cat", "dog");
        session.replace_all();

        session.set_search("bird");
        session.replace_all();

        assert_eq!(session.result(), Some("The dog sat"));
        assert!(matches!(session.modal(), Modal::Error(_)));
    }

    #[test]
    fn test_second_failure_overwrites_error() {
        let mut session = session_with("hello", "", "x");
        session.replace_all();

        session.set_search("zzz");
        session.replace_all();

        assert_eq!(
            session.modal(),
            &Modal::Error(ReplaceError::TermNotFound {
                search: "zzz".to_string()
            })
        );
    }

    #[test]
    fn test_success_closes_stale_error() {
        let mut session = session_with("The Cat sat", "xyz", "dog");
        assert!(matches!(
            session.replace_all(),
            ReplaceOutcome::Rejected(ReplaceError::TermNotFound { .. })
        ));

        session.set_search("cat");
        assert_eq!(session.replace_all(), ReplaceOutcome::Replaced(1));
        assert_eq!(session.text(), "The dog sat");
        assert_eq!(session.modal(), &Modal::None);
    }

    #[test]
    fn test_replace_all_blocked_during_clear_confirm() {
        let mut session = session_with("The Cat sat", "cat", "dog");
        assert!(session.request_clear());

        assert_eq!(session.replace_all(), ReplaceOutcome::Blocked);
        assert_eq!(session.text(), "The Cat sat");
        assert_eq!(session.modal(), &Modal::ClearConfirm);
    }

    #[test]
    fn test_pattern_mode_session() {
        let mut session = session_with("a1b22", r"\d+", "#");
        session.set_match_mode(MatchMode::Pattern);
        assert_eq!(session.replace_all(), ReplaceOutcome::Replaced(2));
        assert_eq!(session.text(), "a#b#");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Result Invalidation
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_edit_invalidates_result() {
        let mut session = session_with("The Cat sat", "cat", "dog");
        session.replace_all();
        assert!(session.result().is_some());

        session.set_text("The dog sat down");

        assert!(session.result().is_none());
        assert_eq!(session.displayed_text(), "The dog sat down");
    }

    #[test]
    fn test_unchanged_edit_keeps_result() {
        let mut session = session_with("The Cat sat", "cat", "dog");
        session.replace_all();

        session.set_text("The dog sat");

        assert_eq!(session.result(), Some("The dog sat"));
    }

    #[test]
    fn test_displayed_text_without_result() {
        let session = session_with("plain", "", "");
        assert_eq!(session.displayed_text(), "plain");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Clear
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_clear_confirmed_resets_everything() {
        let mut session = session_with("The Cat sat", "cat", "dog");
        session.replace_all();

        assert!(session.request_clear());
        assert_eq!(session.modal(), &Modal::ClearConfirm);
        assert!(session.confirm_clear());

        assert_eq!(
            contents(&session),
            (String::new(), String::new(), String::new(), String::new())
        );
        assert!(session.result().is_none());
        assert_eq!(session.modal(), &Modal::None);
    }

    #[test]
    fn test_clear_cancelled_changes_nothing() {
        let mut session = session_with("The Cat sat", "cat", "dog");
        session.replace_all();
        let before = contents(&session);

        assert!(session.request_clear());
        assert!(session.cancel_clear());

        assert_eq!(contents(&session), before);
        assert_eq!(session.result(), Some("The dog sat"));
        assert_eq!(session.modal(), &Modal::None);
    }

    #[test]
    fn test_confirm_without_request_is_noop() {
        let mut session = session_with("keep me", "a", "b");
        assert!(!session.confirm_clear());
        assert!(!session.cancel_clear());
        assert_eq!(session.text(), "keep me");
    }

    #[test]
    fn test_clear_request_ignored_while_error_open() {
        let mut session = session_with("hello", "", "");
        session.replace_all();

        assert!(!session.request_clear());
        assert!(matches!(session.modal(), Modal::Error(_)));
    }

    #[test]
    fn test_edit_allowed_during_clear_confirm() {
        let mut session = session_with("draft", "", "");
        session.request_clear();

        session.set_text("draft 2");

        assert_eq!(session.text(), "draft 2");
        assert_eq!(session.modal(), &Modal::ClearConfirm);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Error Notification
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_dismiss_error() {
        let mut session = session_with("hello", "", "x");
        session.replace_all();

        assert!(session.dismiss_error());
        assert_eq!(session.modal(), &Modal::None);
        assert_eq!(session.text(), "hello");
    }

    #[test]
    fn test_dismiss_error_does_not_close_clear_confirm() {
        let mut session = session_with("hello", "", "");
        session.request_clear();

        assert!(!session.dismiss_error());
        assert_eq!(session.modal(), &Modal::ClearConfirm);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_toggle_theme_twice_restores() {
        let mut session = Session::new(Theme::Light, MatchMode::Literal);
        assert_eq!(session.toggle_theme(), Theme::Dark);
        assert_eq!(session.toggle_theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_theme_touches_nothing_else() {
        let mut session = session_with("hello", "", "x");
        session.replace_all();
        let modal = session.modal().clone();
        let before = contents(&session);

        session.toggle_theme();

        assert_eq!(contents(&session), before);
        assert_eq!(session.modal(), &modal);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Statistics
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_stats_follow_search_term() {
        let session = session_with("Cat cat CAT", "cat", "dog");
        let stats = session.stats();
        assert_eq!(stats.words, 3);
        assert_eq!(stats.matches, 3);
    }
}
