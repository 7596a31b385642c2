use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{Coordinates, Hangout, HangoutPage, HangoutState, Participant};

/// Wire shape of a participant entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantDto {
    #[serde(rename = "participantID")]
    pub id: String,
    #[serde(rename = "participantImageURL", default)]
    pub image_url: Option<String>,
}

/// Wire shape of a hangout record.
#[derive(Debug, Clone, Deserialize)]
pub struct HangoutDto {
    #[serde(rename = "hangoutInfoID", default)]
    pub id: Option<String>,
    #[serde(rename = "hangoutState", default)]
    pub state: Option<String>,
    #[serde(rename = "hangoutTitle")]
    pub title: String,
    #[serde(rename = "hangoutMeetTime", default)]
    pub meet_time: Option<DateTime<Utc>>,
    #[serde(rename = "hangoutLanguage", default)]
    pub language: Option<String>,
    #[serde(rename = "hangoutPlaceID", default)]
    pub place_id: Option<String>,
    #[serde(rename = "hangoutPlaceName", default)]
    pub place_name: Option<String>,
    #[serde(rename = "hangoutPlan", default)]
    pub plan: Option<String>,
    #[serde(rename = "hangoutLimitNumber", default = "default_limit")]
    pub limit_number: i32,
    #[serde(rename = "hangoutLatitude", default)]
    pub latitude: f64,
    #[serde(rename = "hangoutLongitude", default)]
    pub longitude: f64,
    #[serde(rename = "hangoutPostImageURL", default)]
    pub post_image_url: Option<String>,
    #[serde(rename = "hangoutOpenchatURL", default)]
    pub openchat_url: Option<String>,
    #[serde(rename = "hangoutMapImageURL", default)]
    pub map_image_url: Option<String>,
    #[serde(rename = "hangoutParticipants", default)]
    pub participants: Vec<ParticipantDto>,
    #[serde(rename = "userHasLiked", default)]
    pub user_has_liked: bool,
}

fn default_limit() -> i32 {
    1
}

impl HangoutDto {
    /// Convert into a domain hangout.
    ///
    /// Absent id yields a generated identifier, unknown or absent state
    /// maps to `Available`, and an absent meet time falls back to the
    /// epoch.
    pub fn to_domain(&self) -> Hangout {
        Hangout {
            id: self
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            state: self
                .state
                .as_deref()
                .map(HangoutState::parse)
                .unwrap_or_default(),
            title: self.title.clone(),
            meet_time: self.meet_time.unwrap_or(DateTime::UNIX_EPOCH),
            language: self.language.clone().unwrap_or_default(),
            place_id: self.place_id.clone().unwrap_or_default(),
            place_name: self.place_name.clone().unwrap_or_default(),
            plan: self.plan.clone().unwrap_or_default(),
            limit_number: self.limit_number,
            coordinates: Coordinates::new(self.latitude, self.longitude),
            post_image_url: self.post_image_url.clone(),
            openchat_url: self.openchat_url.clone(),
            map_image_url: self.map_image_url.clone(),
            participants: self
                .participants
                .iter()
                .map(|p| Participant::new(p.id.clone(), p.image_url.clone()))
                .collect(),
            user_has_liked: self.user_has_liked,
        }
    }
}

/// Response envelope of the paged browse/search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct HangoutPageResponse {
    #[serde(rename = "data")]
    pub hangouts: Vec<HangoutDto>,
    #[serde(rename = "totalPage", default = "default_total_page")]
    pub total_page: i32,
}

fn default_total_page() -> i32 {
    1
}

impl HangoutPageResponse {
    /// Convert into a domain page.
    pub fn to_domain(&self) -> HangoutPage {
        HangoutPage {
            total_page: self.total_page,
            hangouts: self.hangouts.iter().map(HangoutDto::to_domain).collect(),
        }
    }
}

/// Response envelope of the per-user hangout list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HangoutListResponse {
    #[serde(rename = "data")]
    pub hangouts: Vec<HangoutDto>,
}

impl HangoutListResponse {
    /// Convert into a domain hangout list.
    pub fn to_domain(&self) -> Vec<Hangout> {
        self.hangouts.iter().map(HangoutDto::to_domain).collect()
    }
}

/// Response envelope of the boolean mutation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AcknowledgeResponse {
    #[serde(rename = "data")]
    pub success: bool,
}

impl AcknowledgeResponse {
    pub fn to_domain(&self) -> bool {
        self.success
    }
}
