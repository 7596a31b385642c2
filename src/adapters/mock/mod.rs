//! Recording repositories for tests.
//!
//! Each mock records every call and returns configurable queued results,
//! so tests can verify repository interactions without the sample
//! fixtures or their delays.

mod auth;
mod hangout;

pub use auth::MockAuthRepository;
pub use hangout::{MockHangoutRepository, RecordedHangoutCall};
