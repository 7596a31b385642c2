use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{BappyUser, Category, Gender, Personality, Profile, UserState};

/// Response envelope of the user profile endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfileResponse {
    #[serde(rename = "data")]
    pub user: UserDto,
}

/// Wire shape of a user record.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    #[serde(rename = "userInfoID", default)]
    pub id: Option<String>,
    #[serde(rename = "userName", default)]
    pub name: Option<String>,
    #[serde(rename = "userNationality", default)]
    pub nationality: Option<String>,
    #[serde(rename = "userGender", default)]
    pub gender: Option<String>,
    #[serde(rename = "userBirth", default)]
    pub birth: Option<String>,
    #[serde(rename = "userAffiliation", default)]
    pub affiliation: Option<String>,
    #[serde(rename = "userIntroduce", default)]
    pub introduce: Option<String>,
    #[serde(rename = "userProfileImageURL", default)]
    pub profile_image_url: Option<String>,
    #[serde(rename = "userState")]
    pub state: String,
    #[serde(rename = "userLanguages", default)]
    pub languages: Option<Vec<String>>,
    #[serde(rename = "userPersonalities", default)]
    pub personalities: Option<Vec<String>>,
    #[serde(rename = "userInterests", default)]
    pub interests: Option<Vec<String>>,
}

impl UserDto {
    /// Convert into a domain user.
    ///
    /// Absent id yields a freshly generated identifier; absent optionals
    /// stay `None`. Enum-valued strings parse leniently, dropping unknown
    /// tokens rather than failing the decode. Birth dates use the
    /// `YYYY-MM-DD` wire format.
    pub fn to_domain(&self) -> BappyUser {
        BappyUser {
            id: self
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            state: UserState::parse(&self.state),
            coordinates: None,
            name: self.name.clone(),
            gender: self.gender.as_deref().and_then(Gender::parse),
            birth: self
                .birth
                .as_deref()
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()),
            nationality: self.nationality.clone(),
            profile_image_url: self.profile_image_url.clone(),
            introduce: self.introduce.clone(),
            affiliation: self.affiliation.clone(),
            languages: self.languages.clone(),
            personalities: self.personalities.as_ref().map(|tags| {
                tags.iter()
                    .filter_map(|t| Personality::parse(t))
                    .collect()
            }),
            interests: self
                .interests
                .as_ref()
                .map(|tags| tags.iter().filter_map(|t| Category::parse(t)).collect()),
            gps_enabled: None,
            num_joined_hangouts: None,
            num_made_hangouts: None,
            num_liked_hangouts: None,
        }
    }
}

impl UserProfileResponse {
    /// Convert into a domain profile with empty hangout lists.
    pub fn to_domain(&self) -> Profile {
        Profile::new(self.user.to_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_present_map_exactly() {
        let json = r#"{
            "data": {
                "userInfoID": "u-42",
                "userName": "Lily",
                "userNationality": "KR",
                "userGender": "female",
                "userBirth": "1998-04-12",
                "userAffiliation": "Pusan University",
                "userIntroduce": "Hi!",
                "userProfileImageURL": "https://img.example.com/lily.png",
                "userState": "normal",
                "userLanguages": ["English", "Korean"],
                "userPersonalities": ["talkative", "spontaneous"],
                "userInterests": ["travel", "food"]
            }
        }"#;

        let response: UserProfileResponse = serde_json::from_str(json).unwrap();
        let profile = response.to_domain();
        let user = &profile.user;

        assert_eq!(user.id, "u-42");
        assert_eq!(user.state, UserState::Normal);
        assert_eq!(user.name.as_deref(), Some("Lily"));
        assert_eq!(user.nationality.as_deref(), Some("KR"));
        assert_eq!(user.gender, Some(Gender::Female));
        assert_eq!(
            user.birth,
            Some(NaiveDate::from_ymd_opt(1998, 4, 12).unwrap())
        );
        assert_eq!(user.affiliation.as_deref(), Some("Pusan University"));
        assert_eq!(user.introduce.as_deref(), Some("Hi!"));
        assert_eq!(
            user.profile_image_url.as_deref(),
            Some("https://img.example.com/lily.png")
        );
        assert_eq!(
            user.languages,
            Some(vec!["English".to_string(), "Korean".to_string()])
        );
        assert_eq!(
            user.personalities,
            Some(vec![Personality::Talkative, Personality::Spontaneous])
        );
        assert_eq!(
            user.interests,
            Some(vec![Category::Travel, Category::Food])
        );
        assert!(profile.joined_hangouts.is_empty());
        assert!(profile.made_hangouts.is_empty());
        assert!(profile.liked_hangouts.is_empty());
    }

    #[test]
    fn test_all_optionals_absent_use_defaults() {
        let json = r#"{ "data": { "userState": "anonymous" } }"#;

        let response: UserProfileResponse = serde_json::from_str(json).unwrap();
        let user = response.user.to_domain();

        assert!(!user.id.is_empty());
        assert_eq!(user.state, UserState::Anonymous);
        assert!(user.name.is_none());
        assert!(user.gender.is_none());
        assert!(user.birth.is_none());
        assert!(user.nationality.is_none());
        assert!(user.affiliation.is_none());
        assert!(user.introduce.is_none());
        assert!(user.profile_image_url.is_none());
        assert!(user.languages.is_none());
        assert!(user.personalities.is_none());
        assert!(user.interests.is_none());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let json = r#"{ "data": { "userState": "normal" } }"#;
        let a: UserProfileResponse = serde_json::from_str(json).unwrap();
        let b: UserProfileResponse = serde_json::from_str(json).unwrap();
        assert_ne!(a.user.to_domain().id, b.user.to_domain().id);
    }

    #[test]
    fn test_unknown_enum_tokens_are_dropped() {
        let json = r#"{
            "data": {
                "userState": "normal",
                "userGender": "robot",
                "userPersonalities": ["talkative", "grumpy"],
                "userInterests": ["skydiving", "cafe"]
            }
        }"#;

        let response: UserProfileResponse = serde_json::from_str(json).unwrap();
        let user = response.user.to_domain();

        assert!(user.gender.is_none());
        assert_eq!(user.personalities, Some(vec![Personality::Talkative]));
        assert_eq!(user.interests, Some(vec![Category::Cafe]));
    }

    #[test]
    fn test_unparseable_birth_is_none() {
        let json = r#"{ "data": { "userState": "normal", "userBirth": "12.04.1998" } }"#;
        let response: UserProfileResponse = serde_json::from_str(json).unwrap();
        assert!(response.user.to_domain().birth.is_none());
    }
}
