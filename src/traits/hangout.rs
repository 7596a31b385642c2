//! Hangout repository trait.

use async_trait::async_trait;

use crate::error::RepositoryResult;
use crate::models::{
    Category, Coordinates, Hangout, HangoutPage, HangoutReport, ProfileListKind, SortingOrder,
};

/// Operations on hangout data.
///
/// Every call resolves asynchronously to a tagged success/failure value.
/// Mutations resolve to the server's acknowledgement boolean.
#[async_trait]
pub trait HangoutRepository: Send + Sync {
    /// Fetch one page of the browse list.
    ///
    /// `coordinates` is the reference point for distance-based sort
    /// orders; it may be absent.
    async fn fetch_hangouts(
        &self,
        page: i32,
        sorting: SortingOrder,
        category: Category,
        coordinates: Option<Coordinates>,
    ) -> RepositoryResult<HangoutPage>;

    /// Fetch one of a user's hangout lists (joined/made/liked).
    async fn fetch_profile_hangouts(
        &self,
        user_id: &str,
        kind: ProfileListKind,
    ) -> RepositoryResult<Vec<Hangout>>;

    /// Create a hangout with its post image.
    async fn create_hangout(&self, hangout: &Hangout, image: &[u8]) -> RepositoryResult<bool>;

    /// Delete a hangout the user owns.
    async fn delete_hangout(&self, hangout_id: &str) -> RepositoryResult<bool>;

    /// Set or clear the viewer's like on a hangout.
    async fn like_hangout(&self, hangout_id: &str, has_user_liked: bool)
        -> RepositoryResult<bool>;

    /// Join a hangout as the current user.
    async fn join_hangout(&self, hangout_id: &str) -> RepositoryResult<bool>;

    /// Cancel the current user's participation.
    async fn cancel_hangout(&self, hangout_id: &str) -> RepositoryResult<bool>;

    /// Report a hangout.
    async fn report_hangout(&self, report: &HangoutReport) -> RepositoryResult<bool>;

    /// Full-text search over hangouts, paged.
    async fn search_hangouts(&self, query: &str, page: i32) -> RepositoryResult<HangoutPage>;
}
