//! Openchat link sub-screen state.

use crate::cell::{Cell, Notifier};

/// Where the in-app guide for creating an open chat lives.
pub const OPENCHAT_GUIDE_URL: &str = "https://bappy.app/guides/openchat";

const MIN_LINK_LENGTH: usize = 4;

/// State for the openchat link input.
///
/// The rule hint shows until the entered link passes validation; the
/// validity cell deduplicates, so subscribers only hear actual flips.
pub struct OpenchatState {
    text: Cell<String>,
    is_valid: Cell<bool>,
    open_guide: Notifier<String>,
}

impl OpenchatState {
    pub fn new() -> Self {
        Self {
            text: Cell::new(String::new()),
            is_valid: Cell::new(false),
            open_guide: Notifier::new(),
        }
    }

    /// Text field changed.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        let valid = validation(&text);
        self.text.set(text);
        self.is_valid.set_if_changed(valid);
    }

    /// Guide button tapped: open the guide page.
    pub fn guide_button_tapped(&self) {
        self.open_guide.emit(OPENCHAT_GUIDE_URL.to_string());
    }

    /// The rule hint hides once the link validates.
    pub fn rule_hidden(&self) -> bool {
        self.is_valid.get()
    }

    /// The entered link, only once valid.
    pub fn openchat_text(&self) -> Option<String> {
        let text = self.text.get();
        validation(&text).then_some(text)
    }

    pub fn is_valid(&self) -> &Cell<bool> {
        &self.is_valid
    }

    pub fn open_guide(&self) -> &Notifier<String> {
        &self.open_guide
    }
}

impl Default for OpenchatState {
    fn default() -> Self {
        Self::new()
    }
}

fn validation(text: &str) -> bool {
    text.chars().count() >= MIN_LINK_LENGTH
}
