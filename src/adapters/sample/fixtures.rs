//! Fixture data served by the sample repositories.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    BappyUser, Coordinates, Hangout, HangoutState, Location, Participant, UserState,
};

const SAMPLE_POST_IMAGE1: &str = "https://images.bappy.app/sample/picnic1.jpg";
const SAMPLE_POST_IMAGE2: &str = "https://images.bappy.app/sample/picnic2.jpg";
const SAMPLE_POST_IMAGE3: &str = "https://images.bappy.app/sample/picnic3.jpg";
const SAMPLE_MAP_IMAGE: &str = "https://images.bappy.app/sample/map_pusan.png";
const SAMPLE_OPENCHAT_URL: &str = "https://open.kakao.com/o/gyeerYje";
const SAMPLE_PLACE_ID: &str = "ChIJddvJ8eqTaDURk21no4Umdvo";
const SAMPLE_PLACE_NAME: &str = "Pusan University";
const SAMPLE_PLAN: &str =
    "Hey guys, this is Lily. I want to go on a picnic this Saturday to Haeundae. Anyone wanna join?";

fn meet_time(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 7, day, hour, 0, 0).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn hangout(
    id: &str,
    state: HangoutState,
    day: u32,
    hour: u32,
    language: &str,
    post_image: &str,
    participant_image: &str,
    user_has_liked: bool,
) -> Hangout {
    Hangout {
        id: id.to_string(),
        state,
        title: "Who wants to go eat?".to_string(),
        meet_time: meet_time(day, hour),
        language: language.to_string(),
        place_id: SAMPLE_PLACE_ID.to_string(),
        place_name: SAMPLE_PLACE_NAME.to_string(),
        plan: SAMPLE_PLAN.to_string(),
        limit_number: 5,
        coordinates: Coordinates::new(35.2342279, 129.0860221),
        post_image_url: Some(post_image.to_string()),
        openchat_url: Some(SAMPLE_OPENCHAT_URL.to_string()),
        map_image_url: Some(SAMPLE_MAP_IMAGE.to_string()),
        participants: vec![
            Participant::new(id, None),
            Participant::new(id, Some(participant_image.to_string())),
        ],
        user_has_liked,
    }
}

/// The browse-page fixture: two open hangouts, one closed, one expired.
pub fn browse_hangouts() -> Vec<Hangout> {
    vec![
        hangout(
            "abc",
            HangoutState::Available,
            1,
            19,
            "English",
            SAMPLE_POST_IMAGE1,
            SAMPLE_POST_IMAGE1,
            true,
        ),
        hangout(
            "def",
            HangoutState::Available,
            3,
            18,
            "Korean",
            SAMPLE_POST_IMAGE2,
            SAMPLE_POST_IMAGE1,
            false,
        ),
        hangout(
            "def",
            HangoutState::Closed,
            2,
            18,
            "English",
            SAMPLE_POST_IMAGE2,
            SAMPLE_POST_IMAGE3,
            false,
        ),
        hangout(
            "abc",
            HangoutState::Expired,
            1,
            19,
            "English",
            SAMPLE_POST_IMAGE1,
            SAMPLE_POST_IMAGE1,
            true,
        ),
    ]
}

/// The joined-list fixture.
pub fn joined_hangouts() -> Vec<Hangout> {
    vec![
        hangout(
            "abc",
            HangoutState::Available,
            1,
            19,
            "English",
            SAMPLE_POST_IMAGE1,
            SAMPLE_POST_IMAGE1,
            true,
        ),
        hangout(
            "def",
            HangoutState::Available,
            3,
            15,
            "Korean",
            SAMPLE_POST_IMAGE2,
            SAMPLE_POST_IMAGE1,
            false,
        ),
        hangout(
            "def",
            HangoutState::Closed,
            2,
            18,
            "English",
            SAMPLE_POST_IMAGE3,
            SAMPLE_POST_IMAGE3,
            false,
        ),
    ]
}

/// The made-list fixture. The sample user has created nothing.
pub fn made_hangouts() -> Vec<Hangout> {
    Vec::new()
}

/// The liked-list fixture.
pub fn liked_hangouts() -> Vec<Hangout> {
    vec![
        hangout(
            "abc",
            HangoutState::Available,
            1,
            11,
            "English",
            SAMPLE_POST_IMAGE3,
            SAMPLE_POST_IMAGE1,
            true,
        ),
        hangout(
            "def",
            HangoutState::Available,
            3,
            18,
            "Korean",
            SAMPLE_POST_IMAGE1,
            SAMPLE_POST_IMAGE1,
            false,
        ),
    ]
}

/// The signed-in sample user, aggregate counts matching the fixtures.
pub fn sample_user() -> BappyUser {
    BappyUser {
        name: Some("Lily".to_string()),
        nationality: Some("US".to_string()),
        languages: Some(vec!["English".to_string()]),
        num_joined_hangouts: Some(3),
        num_made_hangouts: Some(0),
        num_liked_hangouts: Some(2),
        ..BappyUser::new("abc", UserState::Normal)
    }
}

/// The sample user's saved locations.
pub fn sample_locations() -> Vec<Location> {
    vec![
        Location::new(
            "Pusan National University",
            "2 Busandaehak-ro 63beon-gil, Geumjeong-gu, Busan",
            Coordinates::new(35.2339681, 129.0825522),
            true,
        ),
        Location::new(
            "Haeundae Beach",
            "264 Haeundaehaebyeon-ro, Haeundae-gu, Busan",
            Coordinates::new(35.1586975, 129.1603842),
            false,
        ),
    ]
}
