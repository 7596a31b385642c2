use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic coordinates of a meetup place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Lifecycle state of a hangout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HangoutState {
    /// Open for joining.
    #[default]
    Available,
    /// Full or closed by the owner.
    Closed,
    /// Meet time has passed.
    Expired,
}

impl HangoutState {
    /// Parse a lifecycle state from its wire tag. Unknown tags map to
    /// `Available`.
    pub fn parse(s: &str) -> HangoutState {
        match s {
            "closed" => HangoutState::Closed,
            "expired" => HangoutState::Expired,
            _ => HangoutState::Available,
        }
    }
}

/// Hangout categories, doubling as user interests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    All,
    Travel,
    Cafe,
    Hiking,
    Food,
    Bar,
    Cook,
    Study,
    Volunteer,
    Language,
    Crafting,
}

impl Category {
    /// Parse a category from its wire tag.
    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "all" => Some(Category::All),
            "travel" => Some(Category::Travel),
            "cafe" => Some(Category::Cafe),
            "hiking" => Some(Category::Hiking),
            "food" => Some(Category::Food),
            "bar" => Some(Category::Bar),
            "cook" => Some(Category::Cook),
            "study" => Some(Category::Study),
            "volunteer" => Some(Category::Volunteer),
            "language" => Some(Category::Language),
            "crafting" => Some(Category::Crafting),
            _ => None,
        }
    }

    /// Wire tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Travel => "travel",
            Category::Cafe => "cafe",
            Category::Hiking => "hiking",
            Category::Food => "food",
            Category::Bar => "bar",
            Category::Cook => "cook",
            Category::Study => "study",
            Category::Volunteer => "volunteer",
            Category::Language => "language",
            Category::Crafting => "crafting",
        }
    }
}

/// Sort order for the browse list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortingOrder {
    #[default]
    Newest,
    Nearest,
    ManyViews,
    ManyHearts,
    LessSeats,
}

impl SortingOrder {
    /// Wire tag for this sort order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortingOrder::Newest => "newest",
            SortingOrder::Nearest => "nearest",
            SortingOrder::ManyViews => "many_views",
            SortingOrder::ManyHearts => "many_hearts",
            SortingOrder::LessSeats => "less_seats",
        }
    }
}

/// Which of a user's hangout lists to fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProfileListKind {
    /// Hangouts the user participates in.
    Joined,
    /// Hangouts the user created.
    Made,
    /// Hangouts the user liked.
    Liked,
}

impl ProfileListKind {
    /// Tab slot this list occupies on the profile screen.
    pub fn slot(&self) -> usize {
        match self {
            ProfileListKind::Joined => 0,
            ProfileListKind::Made => 1,
            ProfileListKind::Liked => 2,
        }
    }

    /// Inverse of [`slot`](Self::slot).
    pub fn from_slot(slot: usize) -> Option<ProfileListKind> {
        match slot {
            0 => Some(ProfileListKind::Joined),
            1 => Some(ProfileListKind::Made),
            2 => Some(ProfileListKind::Liked),
            _ => None,
        }
    }

    /// Wire tag for this list kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileListKind::Joined => "joined",
            ProfileListKind::Made => "made",
            ProfileListKind::Liked => "liked",
        }
    }
}

/// A participant entry on a hangout: id plus avatar URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Participant {
    pub fn new(id: impl Into<String>, image_url: Option<String>) -> Self {
        Self {
            id: id.into(),
            image_url,
        }
    }
}

/// A user-created meetup event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hangout {
    pub id: String,
    pub state: HangoutState,
    pub title: String,
    pub meet_time: DateTime<Utc>,
    /// Language the hangout is held in.
    pub language: String,
    pub place_id: String,
    pub place_name: String,
    /// Free-form description written by the owner.
    pub plan: String,
    /// Maximum number of participants.
    pub limit_number: i32,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub post_image_url: Option<String>,
    #[serde(default)]
    pub openchat_url: Option<String>,
    #[serde(default)]
    pub map_image_url: Option<String>,
    pub participants: Vec<Participant>,
    /// Whether the viewing user has liked this hangout.
    pub user_has_liked: bool,
}

impl Hangout {
    /// Whether the given user is on the participant list.
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p.id == user_id)
    }

    /// Whether another participant still fits.
    pub fn has_capacity(&self) -> bool {
        (self.participants.len() as i32) < self.limit_number
    }
}

/// One page of a paginated hangout fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HangoutPage {
    pub total_page: i32,
    pub hangouts: Vec<Hangout>,
}

/// Payload of a hangout report submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HangoutReport {
    pub hangout_id: String,
    pub report_type: String,
    pub detail: String,
    /// Optional attached evidence images.
    pub images: Vec<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn hangout_with(limit: i32, participant_ids: &[&str]) -> Hangout {
        Hangout {
            id: "h1".to_string(),
            state: HangoutState::Available,
            title: "Picnic".to_string(),
            meet_time: Utc.with_ymd_and_hms(2022, 7, 1, 19, 0, 0).unwrap(),
            language: "English".to_string(),
            place_id: "place".to_string(),
            place_name: "Pusan University".to_string(),
            plan: "Let's go".to_string(),
            limit_number: limit,
            coordinates: Coordinates::new(35.23, 129.08),
            post_image_url: None,
            openchat_url: None,
            map_image_url: None,
            participants: participant_ids
                .iter()
                .map(|id| Participant::new(*id, None))
                .collect(),
            user_has_liked: false,
        }
    }

    #[test]
    fn test_state_parse_unknown_is_available() {
        assert_eq!(HangoutState::parse("available"), HangoutState::Available);
        assert_eq!(HangoutState::parse("closed"), HangoutState::Closed);
        assert_eq!(HangoutState::parse("expired"), HangoutState::Expired);
        assert_eq!(HangoutState::parse("???"), HangoutState::Available);
    }

    #[test]
    fn test_profile_list_kind_slots() {
        for kind in [
            ProfileListKind::Joined,
            ProfileListKind::Made,
            ProfileListKind::Liked,
        ] {
            assert_eq!(ProfileListKind::from_slot(kind.slot()), Some(kind));
        }
        assert_eq!(ProfileListKind::from_slot(3), None);
    }

    #[test]
    fn test_capacity_and_membership() {
        let hangout = hangout_with(2, &["a"]);
        assert!(hangout.has_capacity());
        assert!(hangout.has_participant("a"));
        assert!(!hangout.has_participant("b"));

        let full = hangout_with(1, &["a"]);
        assert!(!full.has_capacity());
    }

    #[test]
    fn test_category_round_trip() {
        for c in [
            Category::All,
            Category::Travel,
            Category::Cafe,
            Category::Hiking,
            Category::Food,
            Category::Bar,
            Category::Cook,
            Category::Study,
            Category::Volunteer,
            Category::Language,
            Category::Crafting,
        ] {
            assert_eq!(Category::parse(c.as_str()), Some(c));
        }
        assert_eq!(Category::parse("sports"), None);
    }
}
