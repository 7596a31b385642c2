//! Auth repository trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::cell::Cell;
use crate::error::RepositoryResult;
use crate::models::{BappyUser, Gender, Location, NotificationSetting, ProfileUpdate};

/// Account and profile operations.
///
/// The repository owns the current-user cell; fetches and registration
/// write into it, so every holder of the cell observes sign-in state
/// changes.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// The observable current-user cell. `None` until a user is fetched.
    fn current_user(&self) -> Cell<Option<BappyUser>>;

    /// Fetch the signed-in user's record and publish it to the cell.
    async fn fetch_current_user(&self) -> RepositoryResult<BappyUser>;

    /// Produce a guest user for anonymous browsing. Cannot fail.
    async fn fetch_anonymous_user(&self) -> BappyUser;

    /// Register a new account.
    async fn create_user(
        &self,
        name: &str,
        gender: Gender,
        birth: NaiveDate,
        country_code: &str,
    ) -> RepositoryResult<BappyUser>;

    /// Apply a partial profile update to the current user.
    async fn update_profile(&self, update: &ProfileUpdate) -> RepositoryResult<bool>;

    /// Toggle GPS-based location usage.
    async fn update_gps_setting(&self, enabled: bool) -> RepositoryResult<bool>;

    /// Register the device's push token.
    async fn update_fcm_token(&self, token: &str) -> RepositoryResult<bool>;

    /// Fetch the user's saved locations.
    async fn fetch_user_locations(&self) -> RepositoryResult<Vec<Location>>;

    /// Fetch the user's notification toggles.
    async fn fetch_notification_setting(&self) -> RepositoryResult<NotificationSetting>;
}
