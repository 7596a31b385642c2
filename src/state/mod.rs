//! Per-screen state containers.
//!
//! Each container holds the observable cells for one screen, derives
//! dependent values imperatively whenever an input changes, and runs the
//! repository effects its triggers fire. The UI layer subscribes to the
//! cells and notifiers; nothing here renders.
//!
//! Containers receive their repositories as `Arc<dyn …>` through their
//! constructors; parents construct their children with the same shared
//! instances.

mod hangout_detail;
mod home;
pub mod make;
mod profile;
mod register;
mod tab_bar;

pub use hangout_detail::HangoutDetailState;
pub use home::HomeListState;
pub use profile::{Authorization, ProfileState};
pub use register::{RegisterState, REGISTER_PAGE_COUNT};
pub use tab_bar::TabBarState;
