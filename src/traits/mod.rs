//! Repository trait abstractions.
//!
//! These traits are the seam between the state containers and the remote
//! API. Implementations are injected as `Arc<dyn …>`: the sample adapters
//! in production (until the real backend is wired), recording mocks in
//! tests.

mod auth;
mod hangout;

pub use auth::AuthRepository;
pub use hangout::HangoutRepository;
