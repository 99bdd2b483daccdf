//! Local UI chrome state (theme, language, result banner, input draft).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the wheel engine so the engine stays
//! free of browser types and the components stay free of wheel rules.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use wheel::i18n::{Language, Strings};
use wheel::options::WheelOption;
use wheel::palette::Theme;

/// Text color on top of a palette fill.
pub const RESULT_TEXT_COLOR: &str = "#ffffff";

/// The winner announcement shown under the wheel.
///
/// Holds only the winner; the language prefix is added when displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultBanner {
    pub winner: String,
    pub color: &'static str,
}

/// UI state for the page chrome.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    pub language: Language,
    pub result: Option<ResultBanner>,
    /// Current contents of the option input.
    pub draft: String,
    /// Bumped whenever the canvas must be redrawn from scratch.
    pub redraw_seq: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Theme::default(), Language::default())
    }
}

impl UiState {
    #[must_use]
    pub fn new(theme: Theme, language: Language) -> Self {
        Self { theme, language, result: None, draft: String::new(), redraw_seq: 0 }
    }

    #[must_use]
    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    pub fn request_redraw(&mut self) {
        self.redraw_seq = self.redraw_seq.wrapping_add(1);
    }

    /// Announce `winner`.
    pub fn show_result(&mut self, winner: &WheelOption) {
        self.result = Some(ResultBanner { winner: winner.text.clone(), color: winner.color() });
    }

    /// Banner text in the current language.
    #[must_use]
    pub fn result_text(&self) -> Option<String> {
        self.result
            .as_ref()
            .map(|banner| format!("{}{}", self.strings().result_prefix, banner.winner))
    }

    pub fn hide_result(&mut self) {
        self.result = None;
    }

    /// Switch language. Returns `false` if it was already active.
    pub fn set_language(&mut self, language: Language) -> bool {
        if self.language == language {
            return false;
        }
        self.language = language;
        self.request_redraw();
        true
    }

    /// Flip the theme and return the new one.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.request_redraw();
        self.theme
    }

    /// Take the draft for submission, leaving the input empty.
    ///
    /// Returns `None` for blank drafts, which are left untouched.
    pub fn take_draft(&mut self) -> Option<String> {
        if self.draft.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.draft))
    }
}
