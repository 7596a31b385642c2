use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::hangout::{Category, Coordinates};

/// Membership state of an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserState {
    /// Signed-in member.
    #[default]
    Normal,
    /// Guest browsing without an account.
    Anonymous,
}

impl UserState {
    /// Parse a membership state from its wire tag. Unknown tags map to
    /// `Normal`, matching the lenient decoding of the original client.
    pub fn parse(s: &str) -> UserState {
        match s {
            "anonymous" => UserState::Anonymous,
            _ => UserState::Normal,
        }
    }
}

/// Self-reported gender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse a gender from its wire tag.
    pub fn parse(s: &str) -> Option<Gender> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }

    /// Wire tag for this gender.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// Personality traits a user can pick for their profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Spontaneous,
    Planning,
    Talkative,
    Shy,
    Calm,
    Polite,
}

impl Personality {
    /// Parse a personality from its wire tag.
    pub fn parse(s: &str) -> Option<Personality> {
        match s {
            "spontaneous" => Some(Personality::Spontaneous),
            "planning" => Some(Personality::Planning),
            "talkative" => Some(Personality::Talkative),
            "shy" => Some(Personality::Shy),
            "calm" => Some(Personality::Calm),
            "polite" => Some(Personality::Polite),
            _ => None,
        }
    }

    /// Wire tag for this personality.
    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Spontaneous => "spontaneous",
            Personality::Planning => "planning",
            Personality::Talkative => "talkative",
            Personality::Shy => "shy",
            Personality::Calm => "calm",
            Personality::Polite => "polite",
        }
    }
}

/// A Bappy account with its profile attributes and aggregate counts.
///
/// Everything beyond `id` and `state` is optional: anonymous users carry
/// no profile, and freshly registered users fill fields in over time. The
/// aggregate counts seed the profile screen's count cells before the real
/// lists are fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BappyUser {
    pub id: String,
    pub state: UserState,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub birth: Option<NaiveDate>,
    /// ISO country code.
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub introduce: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub personalities: Option<Vec<Personality>>,
    #[serde(default)]
    pub interests: Option<Vec<Category>>,
    #[serde(default)]
    pub gps_enabled: Option<bool>,
    #[serde(default)]
    pub num_joined_hangouts: Option<i32>,
    #[serde(default)]
    pub num_made_hangouts: Option<i32>,
    #[serde(default)]
    pub num_liked_hangouts: Option<i32>,
}

impl BappyUser {
    /// A bare user with the given id and membership state, all profile
    /// fields unset.
    pub fn new(id: impl Into<String>, state: UserState) -> Self {
        Self {
            id: id.into(),
            state,
            coordinates: None,
            name: None,
            gender: None,
            birth: None,
            nationality: None,
            profile_image_url: None,
            introduce: None,
            affiliation: None,
            languages: None,
            personalities: None,
            interests: None,
            gps_enabled: None,
            num_joined_hangouts: None,
            num_made_hangouts: None,
            num_liked_hangouts: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_state_parse() {
        assert_eq!(UserState::parse("anonymous"), UserState::Anonymous);
        assert_eq!(UserState::parse("normal"), UserState::Normal);
        assert_eq!(UserState::parse("something-else"), UserState::Normal);
    }

    #[test]
    fn test_gender_round_trip() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(Gender::parse(gender.as_str()), Some(gender));
        }
        assert_eq!(Gender::parse("unknown"), None);
    }

    #[test]
    fn test_personality_round_trip() {
        for p in [
            Personality::Spontaneous,
            Personality::Planning,
            Personality::Talkative,
            Personality::Shy,
            Personality::Calm,
            Personality::Polite,
        ] {
            assert_eq!(Personality::parse(p.as_str()), Some(p));
        }
        assert_eq!(Personality::parse(""), None);
    }

    #[test]
    fn test_new_user_is_bare() {
        let user = BappyUser::new("u1", UserState::Anonymous);
        assert_eq!(user.id, "u1");
        assert_eq!(user.state, UserState::Anonymous);
        assert!(user.name.is_none());
        assert!(user.num_joined_hangouts.is_none());
    }
}
