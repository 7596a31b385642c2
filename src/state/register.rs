//! Registration flow state.
//!
//! Four paged inputs (name, gender, birth, nationality) behind one
//! continue button. The button only enables once the current page's
//! field validates; finishing the last page runs the account-creation
//! effect.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::cell::{Cell, Notifier};
use crate::diagnostics::{self, DiagnosticSender};
use crate::models::{BappyUser, Gender};
use crate::traits::AuthRepository;

/// Pages of the registration flow, in order.
pub const REGISTER_PAGE_COUNT: usize = 4;

const NAME_PAGE: usize = 0;
const GENDER_PAGE: usize = 1;
const BIRTH_PAGE: usize = 2;
const NATIONALITY_PAGE: usize = 3;

/// State container for the registration flow.
pub struct RegisterState {
    auth_repository: Arc<dyn AuthRepository>,

    page: Cell<usize>,
    progression: Cell<f32>,
    name: Cell<String>,
    gender: Cell<Option<Gender>>,
    birth: Cell<Option<NaiveDate>>,
    country_code: Cell<Option<String>>,
    creating: Cell<bool>,

    keyboard_hide: Notifier<()>,
    pop_view: Notifier<()>,
    registered: Notifier<BappyUser>,

    diagnostics: Option<DiagnosticSender>,
}

impl RegisterState {
    pub fn new(auth_repository: Arc<dyn AuthRepository>) -> Self {
        Self {
            auth_repository,
            page: Cell::new(NAME_PAGE),
            progression: Cell::new(1.0 / REGISTER_PAGE_COUNT as f32),
            name: Cell::new(String::new()),
            gender: Cell::new(None),
            birth: Cell::new(None),
            country_code: Cell::new(None),
            creating: Cell::new(false),
            keyboard_hide: Notifier::new(),
            pop_view: Notifier::new(),
            registered: Notifier::new(),
            diagnostics: None,
        }
    }

    /// Attach a diagnostic sink for swallowed failures.
    pub fn with_diagnostics(mut self, sink: DiagnosticSender) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    // --- field inputs ------------------------------------------------------

    pub fn set_name(&self, name: impl Into<String>) {
        self.name.set(name.into());
    }

    pub fn set_gender(&self, gender: Gender) {
        self.gender.set(Some(gender));
    }

    pub fn set_birth(&self, birth: NaiveDate) {
        self.birth.set(Some(birth));
    }

    pub fn set_country_code(&self, code: impl Into<String>) {
        self.country_code.set(Some(code.into()));
    }

    // --- derived -----------------------------------------------------------

    /// Whether the current page's field validates.
    pub fn continue_button_enabled(&self) -> bool {
        match self.page.get() {
            NAME_PAGE => self.name_valid(),
            GENDER_PAGE => self.gender.get().is_some(),
            BIRTH_PAGE => self.birth.get().is_some(),
            NATIONALITY_PAGE => self.country_code.get().is_some(),
            _ => false,
        }
    }

    fn name_valid(&self) -> bool {
        self.name.get().trim().chars().count() >= 3
    }

    // --- navigation --------------------------------------------------------

    /// Advance to the next page, or run the creation effect from the
    /// last one. Ignored while the current page is invalid.
    pub async fn continue_tapped(&self) {
        if !self.continue_button_enabled() || self.creating.get() {
            return;
        }
        self.keyboard_hide.emit(());

        let page = self.page.get();
        if page < NATIONALITY_PAGE {
            self.set_page(page + 1);
        } else {
            self.create_user().await;
        }
    }

    /// Step back a page, or leave the flow from the first one.
    pub fn back_tapped(&self) {
        self.keyboard_hide.emit(());
        let page = self.page.get();
        if page == NAME_PAGE {
            self.pop_view.emit(());
        } else {
            self.set_page(page - 1);
        }
    }

    fn set_page(&self, page: usize) {
        self.page.set(page);
        self.progression
            .set((page + 1) as f32 / REGISTER_PAGE_COUNT as f32);
    }

    async fn create_user(&self) {
        // Every field has passed its page's validation by the time the
        // last continue fires.
        let (Some(gender), Some(birth), Some(country)) = (
            self.gender.get(),
            self.birth.get(),
            self.country_code.get(),
        ) else {
            return;
        };
        let name = self.name.get().trim().to_string();

        self.creating.set(true);
        let result = self
            .auth_repository
            .create_user(&name, gender, birth, &country)
            .await;
        self.creating.set(false);

        match result {
            Ok(user) => self.registered.emit(user),
            Err(err) => diagnostics::report(
                self.diagnostics.as_ref(),
                "register.create_user",
                err.to_string(),
            ),
        }
    }

    // --- outputs -----------------------------------------------------------

    pub fn page(&self) -> &Cell<usize> {
        &self.page
    }

    /// Progress bar fill, ¼ per completed page.
    pub fn progression(&self) -> &Cell<f32> {
        &self.progression
    }

    pub fn creating(&self) -> &Cell<bool> {
        &self.creating
    }

    pub fn keyboard_hide(&self) -> &Notifier<()> {
        &self.keyboard_hide
    }

    pub fn pop_view(&self) -> &Notifier<()> {
        &self.pop_view
    }

    pub fn registered(&self) -> &Notifier<BappyUser> {
        &self.registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockAuthRepository;
    use crate::error::RepositoryError;

    fn filled_state(repo: MockAuthRepository) -> RegisterState {
        let state = RegisterState::new(Arc::new(repo));
        state.set_name("Lily");
        state.set_gender(Gender::Female);
        state.set_birth(NaiveDate::from_ymd_opt(1998, 4, 12).unwrap());
        state.set_country_code("US");
        state
    }

    #[tokio::test]
    async fn test_progression_steps_by_quarter() {
        let state = filled_state(MockAuthRepository::new());
        assert_eq!(state.progression().get(), 0.25);

        state.continue_tapped().await;
        assert_eq!(state.progression().get(), 0.5);
        state.continue_tapped().await;
        assert_eq!(state.progression().get(), 0.75);
        state.continue_tapped().await;
        assert_eq!(state.progression().get(), 1.0);
    }

    #[tokio::test]
    async fn test_continue_blocked_by_invalid_field() {
        let state = RegisterState::new(Arc::new(MockAuthRepository::new()));
        state.set_name("ab");
        assert!(!state.continue_button_enabled());

        state.continue_tapped().await;
        assert_eq!(state.page().get(), 0);

        state.set_name("  abc  ");
        assert!(state.continue_button_enabled());
        state.continue_tapped().await;
        assert_eq!(state.page().get(), 1);
    }

    #[tokio::test]
    async fn test_back_from_first_page_pops() {
        let state = filled_state(MockAuthRepository::new());
        let mut pops = state.pop_view().subscribe();

        state.continue_tapped().await;
        state.back_tapped();
        assert_eq!(state.page().get(), 0);
        assert!(pops.try_recv().is_err());

        state.back_tapped();
        assert!(pops.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_last_page_creates_user_once() {
        let repo = MockAuthRepository::new();
        let state = filled_state(repo.clone());
        let mut registrations = state.registered().subscribe();

        for _ in 0..4 {
            state.continue_tapped().await;
        }

        let created = repo.created_users();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].name.as_deref(), Some("Lily"));
        assert_eq!(created[0].gender, Some(Gender::Female));
        assert_eq!(created[0].nationality.as_deref(), Some("US"));
        assert_eq!(registrations.try_recv().unwrap().id, created[0].id);
    }

    #[tokio::test]
    async fn test_failed_creation_reports_and_stays() {
        let repo = MockAuthRepository::new();
        repo.push_user_result(Err(RepositoryError::HttpStatus {
            status: 500,
            message: "oops".to_string(),
        }));
        let (diag_tx, mut diag_rx) = crate::diagnostics::create_diagnostic_channel(8);
        let state = filled_state(repo).with_diagnostics(diag_tx);
        let mut registrations = state.registered().subscribe();

        for _ in 0..4 {
            state.continue_tapped().await;
        }

        assert!(registrations.try_recv().is_err());
        let event = diag_rx.try_recv().unwrap();
        assert_eq!(event.source, "register.create_user");
        assert_eq!(state.page().get(), 3);
    }

    #[tokio::test]
    async fn test_keyboard_hides_on_navigation() {
        let state = filled_state(MockAuthRepository::new());
        let mut hides = state.keyboard_hide().subscribe();

        state.continue_tapped().await;
        assert!(hides.try_recv().is_ok());
        state.back_tapped();
        assert!(hides.try_recv().is_ok());
    }
}
