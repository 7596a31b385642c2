//! Sample-data repositories.
//!
//! These mirror what the backend will eventually serve: fixed fixture
//! records, resolved after artificial delays configured through
//! [`crate::config::SampleConfig`].

mod auth;
mod fixtures;
mod hangout;

pub use auth::SampleAuthRepository;
pub use fixtures::{
    browse_hangouts, joined_hangouts, liked_hangouts, made_hangouts, sample_locations,
    sample_user,
};
pub use hangout::SampleHangoutRepository;
