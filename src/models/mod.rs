//! Domain models for the Bappy client.
//!
//! These are the in-memory shapes the state containers operate on. Wire
//! formats live in [`crate::dto`] and convert into these via `to_domain`.

mod hangout;
mod location;
mod profile;
mod user;

pub use hangout::{
    Category, Coordinates, Hangout, HangoutPage, HangoutReport, HangoutState, Participant,
    ProfileListKind, SortingOrder,
};
pub use location::Location;
pub use profile::{NotificationSetting, Profile, ProfileUpdate};
pub use user::{BappyUser, Gender, Personality, UserState};
