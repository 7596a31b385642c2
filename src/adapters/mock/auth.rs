//! Mock auth repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::cell::Cell;
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{
    BappyUser, Gender, Location, NotificationSetting, ProfileUpdate, UserState,
};
use crate::traits::AuthRepository;

/// Mock auth repository.
///
/// Tests seed the current-user cell directly via [`current_user`]
/// (`AuthRepository::current_user`). Unconfigured fetches fall back to
/// the cell's value or `NotAuthenticated`.
#[derive(Debug, Clone, Default)]
pub struct MockAuthRepository {
    current_user: Cell<Option<BappyUser>>,
    user_results: Arc<Mutex<VecDeque<RepositoryResult<BappyUser>>>>,
    setting_results: Arc<Mutex<VecDeque<RepositoryResult<NotificationSetting>>>>,
    ack_results: Arc<Mutex<VecDeque<RepositoryResult<bool>>>>,
    created_users: Arc<Mutex<Vec<BappyUser>>>,
}

impl MockAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose cell is pre-seeded with the given user.
    pub fn with_user(user: BappyUser) -> Self {
        let mock = Self::new();
        mock.current_user.set(Some(user));
        mock
    }

    /// Queue the next result for `fetch_current_user` or `create_user`.
    pub fn push_user_result(&self, result: RepositoryResult<BappyUser>) {
        self.user_results.lock().unwrap().push_back(result);
    }

    /// Queue the next result for `fetch_notification_setting`.
    pub fn push_setting_result(&self, result: RepositoryResult<NotificationSetting>) {
        self.setting_results.lock().unwrap().push_back(result);
    }

    /// Queue the next acknowledgement for any boolean mutation.
    pub fn push_ack_result(&self, result: RepositoryResult<bool>) {
        self.ack_results.lock().unwrap().push_back(result);
    }

    /// Users passed to `create_user`, in call order.
    pub fn created_users(&self) -> Vec<BappyUser> {
        self.created_users.lock().unwrap().clone()
    }

    fn next_ack(&self) -> RepositoryResult<bool> {
        self.ack_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(true))
    }
}

#[async_trait]
impl AuthRepository for MockAuthRepository {
    fn current_user(&self) -> Cell<Option<BappyUser>> {
        self.current_user.clone()
    }

    async fn fetch_current_user(&self) -> RepositoryResult<BappyUser> {
        if let Some(result) = self.user_results.lock().unwrap().pop_front() {
            if let Ok(user) = &result {
                self.current_user.set(Some(user.clone()));
            }
            return result;
        }
        self.current_user
            .get()
            .ok_or(RepositoryError::NotAuthenticated)
    }

    async fn fetch_anonymous_user(&self) -> BappyUser {
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
        let result = match self.user_results.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(BappyUser {
                name: Some(name.to_string()),
                gender: Some(gender),
                birth: Some(birth),
                nationality: Some(country_code.to_string()),
                ..BappyUser::new(Uuid::new_v4().to_string(), UserState::Normal)
            }),
        };
        if let Ok(user) = &result {
            self.created_users.lock().unwrap().push(user.clone());
            self.current_user.set(Some(user.clone()));
        }
        result
    }

    async fn update_profile(&self, _update: &ProfileUpdate) -> RepositoryResult<bool> {
        self.next_ack()
    }

    async fn update_gps_setting(&self, _enabled: bool) -> RepositoryResult<bool> {
        self.next_ack()
    }

    async fn update_fcm_token(&self, _token: &str) -> RepositoryResult<bool> {
        self.next_ack()
    }

    async fn fetch_user_locations(&self) -> RepositoryResult<Vec<Location>> {
        Ok(Vec::new())
    }

    async fn fetch_notification_setting(&self) -> RepositoryResult<NotificationSetting> {
        self.setting_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(NotificationSetting::default()))
    }
}
