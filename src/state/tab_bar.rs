//! Root tab bar state.
//!
//! Owns the Home and Profile screen states, constructing them with the
//! shared repositories, and routes tab taps: switching tabs on a fresh
//! tap, scrolling the already-active tab's list to its top on a repeat
//! tap.

use std::sync::Arc;

use crate::cell::{Cell, Notifier};
use crate::diagnostics::DiagnosticSender;
use crate::models::BappyUser;
use crate::state::{Authorization, HomeListState, ProfileState};
use crate::traits::{AuthRepository, HangoutRepository};

/// Tab slots.
pub const HOME_TAB: usize = 0;
/// Tab slot of the profile screen.
pub const PROFILE_TAB: usize = 1;

/// State container for the root tab bar.
pub struct TabBarState {
    selected_index: Cell<usize>,
    show_write: Notifier<()>,
    home: Arc<HomeListState>,
    profile: Arc<ProfileState>,
}

impl TabBarState {
    /// Build the tab bar and its child screens around the signed-in user
    /// and the shared repositories.
    pub fn new(
        user: BappyUser,
        auth_repository: Arc<dyn AuthRepository>,
        hangout_repository: Arc<dyn HangoutRepository>,
        diagnostics: Option<DiagnosticSender>,
    ) -> Self {
        let mut home = HomeListState::new(
            Arc::clone(&auth_repository),
            Arc::clone(&hangout_repository),
        );
        let mut profile = ProfileState::new(
            user,
            Authorization::Edit,
            auth_repository,
            hangout_repository,
        );
        if let Some(sink) = diagnostics {
            home = home.with_diagnostics(sink.clone());
            profile = profile.with_diagnostics(sink);
        }

        Self {
            selected_index: Cell::new(HOME_TAB),
            show_write: Notifier::new(),
            home: Arc::new(home),
            profile: Arc::new(profile),
        }
    }

    /// Home tab tapped: switch to it, or scroll its list to the top if
    /// it was already active.
    pub fn home_button_tapped(&self) {
        let previous = self.selected_index.get();
        self.selected_index.set(HOME_TAB);
        if previous == HOME_TAB {
            self.home.scroll_to_top();
        }
    }

    /// Profile tab tapped, same repeat-tap behavior.
    pub fn profile_button_tapped(&self) {
        let previous = self.selected_index.get();
        self.selected_index.set(PROFILE_TAB);
        if previous == PROFILE_TAB {
            self.profile.scroll_to_top();
        }
    }

    /// Center write button: open the make-hangout flow.
    pub fn write_button_tapped(&self) {
        self.show_write.emit(());
    }

    pub fn selected_index(&self) -> &Cell<usize> {
        &self.selected_index
    }

    pub fn is_home_button_selected(&self) -> bool {
        self.selected_index.get() == HOME_TAB
    }

    pub fn is_profile_button_selected(&self) -> bool {
        self.selected_index.get() == PROFILE_TAB
    }

    pub fn show_write(&self) -> &Notifier<()> {
        &self.show_write
    }

    pub fn home(&self) -> &Arc<HomeListState> {
        &self.home
    }

    pub fn profile(&self) -> &Arc<ProfileState> {
        &self.profile
    }
}
