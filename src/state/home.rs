//! Home screen state: the paged hangout browse list.

use std::sync::Arc;

use crate::cell::{Cell, Notifier};
use crate::diagnostics::{self, DiagnosticSender};
use crate::models::{Category, Coordinates, Hangout, SortingOrder};
use crate::traits::{AuthRepository, HangoutRepository};

/// State container for the home browse list.
///
/// Fetches are paged; a refresh replaces the list with page one, a
/// next-page fetch appends. Distance-based sort orders pass the current
/// user's coordinates along. Failures leave the list unchanged.
pub struct HomeListState {
    auth_repository: Arc<dyn AuthRepository>,
    hangout_repository: Arc<dyn HangoutRepository>,

    hangouts: Cell<Vec<Hangout>>,
    page: Cell<i32>,
    total_page: Cell<i32>,
    sorting: Cell<SortingOrder>,
    category: Cell<Category>,
    loading: Cell<bool>,
    scroll_to_top: Notifier<()>,

    diagnostics: Option<DiagnosticSender>,
}

impl HomeListState {
    pub fn new(
        auth_repository: Arc<dyn AuthRepository>,
        hangout_repository: Arc<dyn HangoutRepository>,
    ) -> Self {
        Self {
            auth_repository,
            hangout_repository,
            hangouts: Cell::new(Vec::new()),
            page: Cell::new(0),
            total_page: Cell::new(1),
            sorting: Cell::new(SortingOrder::Newest),
            category: Cell::new(Category::All),
            loading: Cell::new(false),
            scroll_to_top: Notifier::new(),
            diagnostics: None,
        }
    }

    /// Attach a diagnostic sink for swallowed failures.
    pub fn with_diagnostics(mut self, sink: DiagnosticSender) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Replace the list with page one of the current sorting/category.
    pub async fn refresh(&self) {
        self.loading.set(true);
        let result = self
            .hangout_repository
            .fetch_hangouts(
                1,
                self.sorting.get(),
                self.category.get(),
                self.user_coordinates(),
            )
            .await;
        self.loading.set(false);

        match result {
            Ok(page) => {
                self.page.set(1);
                self.total_page.set(page.total_page);
                self.hangouts.set(page.hangouts);
            }
            Err(err) => {
                diagnostics::report(self.diagnostics.as_ref(), "home.refresh", err.to_string())
            }
        }
    }

    /// Append the next page, if any remains and no fetch is in flight.
    pub async fn load_next_page(&self) {
        if self.loading.get() || self.page.get() >= self.total_page.get() {
            return;
        }
        let next = self.page.get() + 1;

        self.loading.set(true);
        let result = self
            .hangout_repository
            .fetch_hangouts(
                next,
                self.sorting.get(),
                self.category.get(),
                self.user_coordinates(),
            )
            .await;
        self.loading.set(false);

        match result {
            Ok(page) => {
                self.page.set(next);
                self.total_page.set(page.total_page);
                self.hangouts.update(|all| all.extend(page.hangouts));
            }
            Err(err) => diagnostics::report(
                self.diagnostics.as_ref(),
                "home.next_page",
                err.to_string(),
            ),
        }
    }

    /// Change the sort order and reload from page one.
    pub async fn set_sorting(&self, sorting: SortingOrder) {
        if self.sorting.set_if_changed(sorting) {
            self.refresh().await;
        }
    }

    /// Change the category filter and reload from page one.
    pub async fn set_category(&self, category: Category) {
        if self.category.set_if_changed(category) {
            self.refresh().await;
        }
    }

    /// Replace the list with the first page of search results.
    pub async fn search(&self, query: &str) {
        self.loading.set(true);
        let result = self.hangout_repository.search_hangouts(query, 1).await;
        self.loading.set(false);

        match result {
            Ok(page) => {
                self.page.set(1);
                self.total_page.set(page.total_page);
                self.hangouts.set(page.hangouts);
            }
            Err(err) => {
                diagnostics::report(self.diagnostics.as_ref(), "home.search", err.to_string())
            }
        }
    }

    /// Parent asks the list to scroll to its top.
    pub fn scroll_to_top(&self) {
        self.scroll_to_top.emit(());
    }

    pub fn hangouts(&self) -> &Cell<Vec<Hangout>> {
        &self.hangouts
    }

    pub fn sorting(&self) -> &Cell<SortingOrder> {
        &self.sorting
    }

    pub fn category(&self) -> &Cell<Category> {
        &self.category
    }

    pub fn loading(&self) -> &Cell<bool> {
        &self.loading
    }

    pub fn scroll_to_top_events(&self) -> &Notifier<()> {
        &self.scroll_to_top
    }

    fn user_coordinates(&self) -> Option<Coordinates> {
        self.auth_repository
            .current_user()
            .get()
            .and_then(|user| user.coordinates)
    }
}
