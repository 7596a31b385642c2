//! Bappy core - state and data layers for the Bappy social meetup client
//!
//! This library holds everything below the rendering layer: domain models,
//! wire DTO decoding, repository interfaces with their in-memory sample
//! implementations, observable state cells, and the per-screen state
//! containers that drive the UI.

pub mod adapters;
pub mod cell;
pub mod config;
pub mod diagnostics;
pub mod dto;
pub mod error;
pub mod models;
pub mod state;
pub mod traits;
