//! Sample auth repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::time::sleep;
use uuid::Uuid;

use super::fixtures;
use crate::cell::Cell;
use crate::config::SampleConfig;
use crate::error::RepositoryResult;
use crate::models::{
    BappyUser, Gender, Location, NotificationSetting, ProfileUpdate, UserState,
};
use crate::traits::AuthRepository;

/// In-memory auth repository maintaining the current-user cell.
#[derive(Debug, Clone)]
pub struct SampleAuthRepository {
    config: SampleConfig,
    current_user: Cell<Option<BappyUser>>,
}

impl SampleAuthRepository {
    pub fn new(config: SampleConfig) -> Self {
        Self {
            config,
            current_user: Cell::new(None),
        }
    }
}

impl Default for SampleAuthRepository {
    fn default() -> Self {
        Self::new(SampleConfig::default())
    }
}

#[async_trait]
impl AuthRepository for SampleAuthRepository {
    fn current_user(&self) -> Cell<Option<BappyUser>> {
        self.current_user.clone()
    }

    async fn fetch_current_user(&self) -> RepositoryResult<BappyUser> {
        sleep(self.config.profile_fetch_delay).await;
        let user = fixtures::sample_user();
        self.current_user.set(Some(user.clone()));
        Ok(user)
    }

    async fn fetch_anonymous_user(&self) -> BappyUser {
        sleep(self.config.mutation_delay).await;
        let user = BappyUser::new(Uuid::new_v4().to_string(), UserState::Anonymous);
        self.current_user.set(Some(user.clone()));
        user
    }

    async fn create_user(
        &self,
        name: &str,
        gender: Gender,
        birth: NaiveDate,
        country_code: &str,
    ) -> RepositoryResult<BappyUser> {
        sleep(self.config.slow_mutation_delay).await;
        let user = BappyUser {
            name: Some(name.to_string()),
            gender: Some(gender),
            birth: Some(birth),
            nationality: Some(country_code.to_string()),
            num_joined_hangouts: Some(0),
            num_made_hangouts: Some(0),
            num_liked_hangouts: Some(0),
            ..BappyUser::new(Uuid::new_v4().to_string(), UserState::Normal)
        };
        self.current_user.set(Some(user.clone()));
        Ok(user)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> RepositoryResult<bool> {
        sleep(self.config.mutation_delay).await;
        self.current_user.update(|current| {
            if let Some(user) = current {
                if update.affiliation.is_some() {
                    user.affiliation = update.affiliation.clone();
                }
                if update.introduce.is_some() {
                    user.introduce = update.introduce.clone();
                }
                if update.languages.is_some() {
                    user.languages = update.languages.clone();
                }
                if update.personalities.is_some() {
                    user.personalities = update.personalities.clone();
                }
                if update.interests.is_some() {
                    user.interests = update.interests.clone();
                }
            }
        });
        Ok(true)
    }

    async fn update_gps_setting(&self, enabled: bool) -> RepositoryResult<bool> {
        sleep(self.config.mutation_delay).await;
        self.current_user.update(|current| {
            if let Some(user) = current {
                user.gps_enabled = Some(enabled);
            }
        });
        Ok(true)
    }

    async fn update_fcm_token(&self, _token: &str) -> RepositoryResult<bool> {
        sleep(self.config.mutation_delay).await;
        Ok(true)
    }

    async fn fetch_user_locations(&self) -> RepositoryResult<Vec<Location>> {
        sleep(self.config.profile_fetch_delay).await;
        Ok(fixtures::sample_locations())
    }

    async fn fetch_notification_setting(&self) -> RepositoryResult<NotificationSetting> {
        sleep(self.config.mutation_delay).await;
        Ok(NotificationSetting::default())
    }
}
