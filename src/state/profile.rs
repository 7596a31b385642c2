//! Profile screen state.
//!
//! Holds the three per-user hangout lists, the tab selection, and the
//! merged visible list the UI renders. The visible list always reflects
//! the last known value of whichever list matches the current tab: a tab
//! switch republishes that slot's stored value, and a list update is
//! published only while its slot is the selected one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cell::{Cell, Notifier};
use crate::diagnostics::{self, DiagnosticSender};
use crate::models::{BappyUser, Hangout, NotificationSetting, ProfileListKind, UserState};
use crate::traits::{AuthRepository, HangoutRepository};

/// Who is looking at the profile.
///
/// `Edit` is the owner's own profile (settings reachable, no back
/// button); `View` is somebody else's (back button, no settings). Set at
/// construction, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    View,
    Edit,
}

/// State container for the profile screen.
pub struct ProfileState {
    auth_repository: Arc<dyn AuthRepository>,
    hangout_repository: Arc<dyn HangoutRepository>,
    authorization: Authorization,

    user: Cell<Option<BappyUser>>,
    selected_index: Cell<usize>,
    joined: Cell<Vec<Hangout>>,
    made: Cell<Vec<Hangout>>,
    liked: Cell<Vec<Hangout>>,
    visible: Cell<Vec<Hangout>>,
    num_joined: Cell<Option<i32>>,
    num_made: Cell<Option<i32>>,
    num_liked: Cell<Option<i32>>,
    holder_hidden: Cell<bool>,
    loader_visible: Cell<bool>,

    guest_alert: Notifier<()>,
    show_settings: Notifier<NotificationSetting>,
    show_profile_detail: Notifier<BappyUser>,
    pop_view: Notifier<()>,
    scroll_to_top: Notifier<()>,

    appeared_once: AtomicBool,
    diagnostics: Option<DiagnosticSender>,
}

impl ProfileState {
    /// Create the state for one profile.
    ///
    /// The count cells seed from the user's aggregate counts; the real
    /// lists overwrite them once fetched.
    pub fn new(
        user: BappyUser,
        authorization: Authorization,
        auth_repository: Arc<dyn AuthRepository>,
        hangout_repository: Arc<dyn HangoutRepository>,
    ) -> Self {
        let num_joined = Cell::new(user.num_joined_hangouts);
        let num_made = Cell::new(user.num_made_hangouts);
        let num_liked = Cell::new(user.num_liked_hangouts);

        Self {
            auth_repository,
            hangout_repository,
            authorization,
            user: Cell::new(Some(user)),
            selected_index: Cell::new(0),
            joined: Cell::new(Vec::new()),
            made: Cell::new(Vec::new()),
            liked: Cell::new(Vec::new()),
            visible: Cell::new(Vec::new()),
            num_joined,
            num_made,
            num_liked,
            holder_hidden: Cell::new(false),
            loader_visible: Cell::new(false),
            guest_alert: Notifier::new(),
            show_settings: Notifier::new(),
            show_profile_detail: Notifier::new(),
            pop_view: Notifier::new(),
            scroll_to_top: Notifier::new(),
            appeared_once: AtomicBool::new(false),
            diagnostics: None,
        }
    }

    /// Attach a diagnostic sink for swallowed failures.
    pub fn with_diagnostics(mut self, sink: DiagnosticSender) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    // --- derived flags -----------------------------------------------------

    /// Settings are reachable only on one's own profile.
    pub fn settings_button_hidden(&self) -> bool {
        self.authorization == Authorization::View
    }

    /// The back button exists only when viewing somebody else.
    pub fn back_button_hidden(&self) -> bool {
        self.authorization == Authorization::Edit
    }

    /// The empty-state placeholder hides as soon as the visible list has
    /// content.
    pub fn no_hangouts_view_hidden(&self) -> bool {
        !self.visible.get().is_empty()
    }

    // --- inputs ------------------------------------------------------------

    /// Switch the visible list to the given tab slot (0 = joined,
    /// 1 = made, 2 = liked). The slot's last known value is published
    /// immediately, even if its fetch has not resolved yet.
    pub fn select_tab(&self, index: usize) {
        let Some(kind) = ProfileListKind::from_slot(index) else {
            return;
        };
        if self.selected_index.set_if_changed(index) {
            self.visible.set(self.list_cell(kind).get());
        }
    }

    /// Screen became visible. The first call with an anonymous user
    /// raises the guest alert; every call with a normal user re-fetches
    /// the three lists concurrently. Failures leave the lists unchanged.
    pub async fn view_appeared(&self) {
        let first = !self.appeared_once.swap(true, Ordering::SeqCst);
        let Some(user) = self.user.get() else {
            return;
        };

        match user.state {
            UserState::Anonymous => {
                if first {
                    self.guest_alert.emit(());
                }
            }
            UserState::Normal => {
                futures::join!(
                    self.fetch_list(&user.id, ProfileListKind::Joined),
                    self.fetch_list(&user.id, ProfileListKind::Made),
                    self.fetch_list(&user.id, ProfileListKind::Liked),
                );
            }
        }
    }

    /// Settings button: fetch the notification toggles behind a loader,
    /// then hand them to the settings screen.
    pub async fn open_settings(&self) {
        self.loader_visible.set(true);
        let result = self.auth_repository.fetch_notification_setting().await;
        self.loader_visible.set(false);

        match result {
            Ok(setting) => self.show_settings.emit(setting),
            Err(err) => diagnostics::report(
                self.diagnostics.as_ref(),
                "profile.notification_setting",
                err.to_string(),
            ),
        }
    }

    /// More button: open the detail view for the profiled user.
    pub fn more_button_tapped(&self) {
        if let Some(user) = self.user.get() {
            self.show_profile_detail.emit(user);
        }
    }

    /// Back button.
    pub fn back_button_tapped(&self) {
        self.pop_view.emit(());
    }

    /// Parent asks the list to scroll to its top.
    pub fn scroll_to_top(&self) {
        self.scroll_to_top.emit(());
    }

    /// Resolve a row of the visible list into the (viewer, hangout) pair
    /// the detail screen needs.
    pub fn detail_selection(&self, row: usize) -> Option<(BappyUser, Hangout)> {
        let user = self.user.get()?;
        let hangout = self.visible.get().get(row).cloned()?;
        Some((user, hangout))
    }

    // --- outputs -----------------------------------------------------------

    pub fn user(&self) -> &Cell<Option<BappyUser>> {
        &self.user
    }

    pub fn selected_index(&self) -> &Cell<usize> {
        &self.selected_index
    }

    /// The merged visible list (the list of the currently selected tab).
    pub fn visible_hangouts(&self) -> &Cell<Vec<Hangout>> {
        &self.visible
    }

    pub fn num_joined_hangouts(&self) -> &Cell<Option<i32>> {
        &self.num_joined
    }

    pub fn num_made_hangouts(&self) -> &Cell<Option<i32>> {
        &self.num_made
    }

    pub fn num_liked_hangouts(&self) -> &Cell<Option<i32>> {
        &self.num_liked
    }

    /// Placeholder covering the screen until the first joined fetch
    /// resolves.
    pub fn holder_hidden(&self) -> &Cell<bool> {
        &self.holder_hidden
    }

    pub fn loader_visible(&self) -> &Cell<bool> {
        &self.loader_visible
    }

    pub fn guest_alert(&self) -> &Notifier<()> {
        &self.guest_alert
    }

    pub fn show_settings(&self) -> &Notifier<NotificationSetting> {
        &self.show_settings
    }

    pub fn show_profile_detail(&self) -> &Notifier<BappyUser> {
        &self.show_profile_detail
    }

    pub fn pop_view(&self) -> &Notifier<()> {
        &self.pop_view
    }

    pub fn scroll_to_top_events(&self) -> &Notifier<()> {
        &self.scroll_to_top
    }

    // --- internals ---------------------------------------------------------

    fn list_cell(&self, kind: ProfileListKind) -> &Cell<Vec<Hangout>> {
        match kind {
            ProfileListKind::Joined => &self.joined,
            ProfileListKind::Made => &self.made,
            ProfileListKind::Liked => &self.liked,
        }
    }

    fn count_cell(&self, kind: ProfileListKind) -> &Cell<Option<i32>> {
        match kind {
            ProfileListKind::Joined => &self.num_joined,
            ProfileListKind::Made => &self.num_made,
            ProfileListKind::Liked => &self.num_liked,
        }
    }

    /// Store a freshly fetched list: its slot cell and count always
    /// update; the visible list only when the slot is selected.
    fn apply_list_update(&self, kind: ProfileListKind, hangouts: Vec<Hangout>) {
        self.count_cell(kind).set(Some(hangouts.len() as i32));
        self.list_cell(kind).set(hangouts.clone());
        if self.selected_index.get() == kind.slot() {
            self.visible.set(hangouts);
        }
    }

    async fn fetch_list(&self, user_id: &str, kind: ProfileListKind) {
        let result = self
            .hangout_repository
            .fetch_profile_hangouts(user_id, kind)
            .await;

        // The holder covers the screen until the joined list resolves,
        // successfully or not.
        if kind == ProfileListKind::Joined {
            self.holder_hidden.set(true);
        }

        match result {
            Ok(hangouts) => self.apply_list_update(kind, hangouts),
            Err(err) => diagnostics::report(
                self.diagnostics.as_ref(),
                match kind {
                    ProfileListKind::Joined => "profile.fetch_joined",
                    ProfileListKind::Made => "profile.fetch_made",
                    ProfileListKind::Liked => "profile.fetch_liked",
                },
                err.to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockAuthRepository, MockHangoutRepository};
    use crate::models::{Coordinates, HangoutState, UserState};
    use chrono::{TimeZone, Utc};

    fn hangout(id: &str) -> Hangout {
        Hangout {
            id: id.to_string(),
            state: HangoutState::Available,
            title: format!("hangout {id}"),
            meet_time: Utc.with_ymd_and_hms(2022, 7, 1, 19, 0, 0).unwrap(),
            language: "English".to_string(),
            place_id: "place".to_string(),
            place_name: "Pusan University".to_string(),
            plan: "plan".to_string(),
            limit_number: 5,
            coordinates: Coordinates::new(35.23, 129.08),
            post_image_url: None,
            openchat_url: None,
            map_image_url: None,
            participants: Vec::new(),
            user_has_liked: false,
        }
    }

    fn user_with_counts() -> BappyUser {
        BappyUser {
            num_joined_hangouts: Some(12),
            num_made_hangouts: Some(7),
            num_liked_hangouts: Some(4),
            ..BappyUser::new("u1", UserState::Normal)
        }
    }

    fn state(authorization: Authorization) -> ProfileState {
        ProfileState::new(
            user_with_counts(),
            authorization,
            Arc::new(MockAuthRepository::new()),
            Arc::new(MockHangoutRepository::new()),
        )
    }

    #[test]
    fn test_authorization_gating() {
        let view = state(Authorization::View);
        assert!(view.settings_button_hidden());
        assert!(!view.back_button_hidden());

        let edit = state(Authorization::Edit);
        assert!(!edit.settings_button_hidden());
        assert!(edit.back_button_hidden());
    }

    #[test]
    fn test_visible_tracks_selected_slot() {
        let state = state(Authorization::Edit);

        state.apply_list_update(ProfileListKind::Joined, vec![hangout("a"), hangout("b")]);
        assert_eq!(state.visible_hangouts().get().len(), 2);

        // An update to a non-selected slot leaves the visible list alone.
        state.apply_list_update(ProfileListKind::Liked, vec![hangout("x")]);
        assert_eq!(state.visible_hangouts().get().len(), 2);
        assert_eq!(state.visible_hangouts().get()[0].id, "a");

        // Switching tabs republishes that slot's last known value.
        state.select_tab(2);
        assert_eq!(state.visible_hangouts().get().len(), 1);
        assert_eq!(state.visible_hangouts().get()[0].id, "x");

        state.select_tab(1);
        assert!(state.visible_hangouts().get().is_empty());
    }

    #[test]
    fn test_visible_never_shows_non_matching_slot() {
        let state = state(Authorization::Edit);
        let updates = [
            (ProfileListKind::Made, vec![hangout("m1")]),
            (ProfileListKind::Liked, vec![hangout("l1"), hangout("l2")]),
            (ProfileListKind::Joined, vec![hangout("j1")]),
            (ProfileListKind::Made, vec![]),
            (ProfileListKind::Joined, vec![hangout("j2"), hangout("j3")]),
        ];

        for (step, (kind, hangouts)) in updates.into_iter().enumerate() {
            state.select_tab(step % 3);
            state.apply_list_update(kind, hangouts);

            let selected =
                ProfileListKind::from_slot(state.selected_index().get()).unwrap();
            assert_eq!(
                state.visible_hangouts().get(),
                state.list_cell(selected).get(),
                "visible diverged from slot {selected:?} after step {step}",
            );
        }
    }

    #[test]
    fn test_counts_seed_then_supersede() {
        let state = state(Authorization::Edit);
        assert_eq!(state.num_joined_hangouts().get(), Some(12));
        assert_eq!(state.num_made_hangouts().get(), Some(7));
        assert_eq!(state.num_liked_hangouts().get(), Some(4));

        state.apply_list_update(ProfileListKind::Joined, vec![hangout("a")]);
        assert_eq!(state.num_joined_hangouts().get(), Some(1));
        // Other seeds survive until their own lists update.
        assert_eq!(state.num_made_hangouts().get(), Some(7));

        state.apply_list_update(ProfileListKind::Made, Vec::new());
        assert_eq!(state.num_made_hangouts().get(), Some(0));
    }

    #[test]
    fn test_out_of_range_tab_is_ignored() {
        let state = state(Authorization::Edit);
        state.select_tab(3);
        assert_eq!(state.selected_index().get(), 0);
    }

    #[test]
    fn test_detail_selection() {
        let state = state(Authorization::Edit);
        state.apply_list_update(ProfileListKind::Joined, vec![hangout("a"), hangout("b")]);

        let (user, selected) = state.detail_selection(1).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(selected.id, "b");
        assert!(state.detail_selection(2).is_none());
    }

    #[test]
    fn test_no_hangouts_placeholder() {
        let state = state(Authorization::Edit);
        assert!(!state.no_hangouts_view_hidden());
        state.apply_list_update(ProfileListKind::Joined, vec![hangout("a")]);
        assert!(state.no_hangouts_view_hidden());
    }

    #[tokio::test]
    async fn test_guest_alert_fires_only_on_first_appearance() {
        let state = ProfileState::new(
            BappyUser::new("guest", UserState::Anonymous),
            Authorization::Edit,
            Arc::new(MockAuthRepository::new()),
            Arc::new(MockHangoutRepository::new()),
        );
        let mut alerts = state.guest_alert().subscribe();

        state.view_appeared().await;
        state.view_appeared().await;

        assert!(alerts.try_recv().is_ok());
        assert!(alerts.try_recv().is_err());
    }
}
