// Integration tests for the profile screen flow: concurrent list
// fetches, the merged visible list, count projection, and failure
// routing.

mod common;

use std::sync::Arc;
use std::time::Duration;

use bappy::adapters::mock::{MockAuthRepository, MockHangoutRepository, RecordedHangoutCall};
use bappy::diagnostics::create_diagnostic_channel;
use bappy::error::RepositoryError;
use bappy::models::ProfileListKind;
use bappy::state::{Authorization, ProfileState};

use common::{anonymous_user, hangout, ids, normal_user};

fn profile_state(repo: MockHangoutRepository) -> ProfileState {
    ProfileState::new(
        normal_user(),
        Authorization::Edit,
        Arc::new(MockAuthRepository::new()),
        Arc::new(repo),
    )
}

#[tokio::test]
async fn appearance_fetches_all_three_lists_for_the_user() {
    let repo = MockHangoutRepository::new();
    repo.push_profile_result(ProfileListKind::Joined, Ok(vec![hangout("j1")]));
    repo.push_profile_result(ProfileListKind::Liked, Ok(vec![hangout("l1"), hangout("l2")]));
    let state = profile_state(repo.clone());

    state.view_appeared().await;

    let mut kinds: Vec<ProfileListKind> = repo
        .calls()
        .iter()
        .filter_map(|call| match call {
            RecordedHangoutCall::FetchProfileHangouts { user_id, kind } => {
                assert_eq!(user_id, "u1");
                Some(*kind)
            }
            _ => None,
        })
        .collect();
    kinds.sort_by_key(|k| k.slot());
    assert_eq!(
        kinds,
        vec![
            ProfileListKind::Joined,
            ProfileListKind::Made,
            ProfileListKind::Liked,
        ]
    );

    // Tab 0 is selected, so the joined list is the visible one.
    assert_eq!(ids(&state.visible_hangouts().get()), vec!["j1"]);

    // Counts no longer show the stale aggregate seeds.
    assert_eq!(state.num_joined_hangouts().get(), Some(1));
    assert_eq!(state.num_made_hangouts().get(), Some(0));
    assert_eq!(state.num_liked_hangouts().get(), Some(2));
}

#[tokio::test(start_paused = true)]
async fn tab_switch_shows_stale_list_until_late_fetch_lands() {
    let repo = MockHangoutRepository::new();
    repo.push_profile_result(ProfileListKind::Joined, Ok(vec![hangout("a"), hangout("b")]));
    repo.push_profile_result(ProfileListKind::Liked, Ok(vec![hangout("l")]));
    repo.set_profile_delay(ProfileListKind::Liked, Duration::from_millis(500));
    let state = Arc::new(profile_state(repo));

    let appearance = tokio::spawn({
        let state = Arc::clone(&state);
        async move { state.view_appeared().await }
    });

    // Joined and made resolve immediately; liked is still in flight.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(ids(&state.visible_hangouts().get()), vec!["a", "b"]);

    // Switching to the liked tab mid-flight shows that slot's last known
    // value, the initial empty list.
    state.select_tab(2);
    assert!(state.visible_hangouts().get().is_empty());

    // Once the liked fetch lands, the visible list switches over.
    appearance.await.unwrap();
    assert_eq!(ids(&state.visible_hangouts().get()), vec!["l"]);
}

#[tokio::test]
async fn failed_fetch_keeps_prior_value_and_reports_once() {
    common::init_tracing();
    let repo = MockHangoutRepository::new();
    repo.push_profile_result(ProfileListKind::Liked, Ok(vec![hangout("l1")]));
    repo.push_profile_result(
        ProfileListKind::Liked,
        Err(RepositoryError::HttpStatus {
            status: 500,
            message: "boom".to_string(),
        }),
    );
    let (diag_tx, mut diag_rx) = create_diagnostic_channel(16);
    let state = profile_state(repo).with_diagnostics(diag_tx);
    state.select_tab(2);

    state.view_appeared().await;
    assert_eq!(ids(&state.visible_hangouts().get()), vec!["l1"]);

    state.view_appeared().await;

    // The liked cell keeps its prior value.
    assert_eq!(ids(&state.visible_hangouts().get()), vec!["l1"]);
    assert_eq!(state.num_liked_hangouts().get(), Some(1));

    // Exactly one diagnostic, from the liked fetch.
    let event = diag_rx.try_recv().unwrap();
    assert_eq!(event.source, "profile.fetch_liked");
    assert!(diag_rx.try_recv().is_err());
}

#[tokio::test]
async fn holder_hides_once_joined_resolves_even_on_failure() {
    let repo = MockHangoutRepository::new();
    repo.push_profile_result(
        ProfileListKind::Joined,
        Err(RepositoryError::Network {
            message: "down".to_string(),
        }),
    );
    let state = profile_state(repo);
    assert!(!state.holder_hidden().get());

    state.view_appeared().await;
    assert!(state.holder_hidden().get());
}

#[tokio::test]
async fn anonymous_user_alerts_once_and_never_fetches() {
    let repo = MockHangoutRepository::new();
    let state = ProfileState::new(
        anonymous_user(),
        Authorization::Edit,
        Arc::new(MockAuthRepository::new()),
        Arc::new(repo.clone()),
    );
    let mut alerts = state.guest_alert().subscribe();

    state.view_appeared().await;
    state.view_appeared().await;

    assert!(alerts.try_recv().is_ok());
    assert!(alerts.try_recv().is_err());
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn settings_flow_wraps_fetch_in_loader() {
    let auth = MockAuthRepository::new();
    let state = ProfileState::new(
        normal_user(),
        Authorization::Edit,
        Arc::new(auth),
        Arc::new(MockHangoutRepository::new()),
    );
    let mut settings = state.show_settings().subscribe();
    let mut loader = state.loader_visible().subscribe();
    loader.borrow_and_update();

    state.open_settings().await;

    assert!(settings.try_recv().is_ok());
    assert!(!state.loader_visible().get());
    // The loader flipped at least once during the fetch.
    assert!(loader.has_changed().unwrap());
}
