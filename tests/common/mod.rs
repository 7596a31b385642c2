//! Common test fixtures for integration tests.

use chrono::{TimeZone, Utc};

use bappy::models::{
    BappyUser, Coordinates, Hangout, HangoutState, Participant, UserState,
};

/// Install the test tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A signed-in user with stale aggregate counts, as the profile screen
/// receives one from a previous fetch.
pub fn normal_user() -> BappyUser {
    BappyUser {
        name: Some("Lily".to_string()),
        num_joined_hangouts: Some(9),
        num_made_hangouts: Some(2),
        num_liked_hangouts: Some(5),
        ..BappyUser::new("u1", UserState::Normal)
    }
}

/// A guest user.
pub fn anonymous_user() -> BappyUser {
    BappyUser::new("guest", UserState::Anonymous)
}

/// A minimal available hangout with the given id.
pub fn hangout(id: &str) -> Hangout {
    Hangout {
        id: id.to_string(),
        state: HangoutState::Available,
        title: format!("hangout {id}"),
        meet_time: Utc.with_ymd_and_hms(2022, 7, 1, 19, 0, 0).unwrap(),
        language: "English".to_string(),
        place_id: "ChIJddvJ8eqTaDURk21no4Umdvo".to_string(),
        place_name: "Pusan University".to_string(),
        plan: "Let's meet!".to_string(),
        limit_number: 5,
        coordinates: Coordinates::new(35.2342279, 129.0860221),
        post_image_url: None,
        openchat_url: None,
        map_image_url: None,
        participants: vec![Participant::new("abc", None)],
        user_has_liked: false,
    }
}

/// Ids of a hangout list, for compact assertions.
pub fn ids(hangouts: &[Hangout]) -> Vec<String> {
    hangouts.iter().map(|h| h.id.clone()).collect()
}
