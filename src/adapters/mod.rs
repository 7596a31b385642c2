//! Repository implementations.
//!
//! - [`sample`]: in-memory repositories returning fixture data after
//!   artificial delays, standing in for the remote API.
//! - [`mock`]: recording repositories with configurable results, for
//!   tests.

pub mod mock;
pub mod sample;
