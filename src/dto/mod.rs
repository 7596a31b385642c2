//! Wire-format DTOs for backend responses and requests.
//!
//! Responses decode with a fixed key mapping (top-level `data` envelope,
//! `userInfoID`-style nested keys) and convert into domain models through
//! explicit `to_domain` methods that supply defaults for absent optional
//! fields. Request DTOs serialize with the same key convention.

mod hangout;
mod requests;
mod user_profile;

pub use hangout::{
    AcknowledgeResponse, HangoutDto, HangoutListResponse, HangoutPageResponse, ParticipantDto,
};
pub use requests::{
    FetchHangoutsRequest, ParticipationUpdateRequest, ReportHangoutRequest, SearchHangoutsRequest,
};
pub use user_profile::{UserDto, UserProfileResponse};
