//! Sample hangout repository.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tokio::time::sleep;

use super::fixtures;
use crate::config::SampleConfig;
use crate::error::RepositoryResult;
use crate::models::{
    Category, Coordinates, Hangout, HangoutPage, HangoutReport, ProfileListKind, SortingOrder,
};
use crate::traits::HangoutRepository;

/// In-memory hangout repository serving fixture data after artificial
/// delays.
#[derive(Debug, Clone)]
pub struct SampleHangoutRepository {
    config: SampleConfig,
}

impl SampleHangoutRepository {
    pub fn new(config: SampleConfig) -> Self {
        Self { config }
    }

    /// The browse fixture doubled and shuffled, as one page of three.
    fn sample_page(&self) -> HangoutPage {
        let base = fixtures::browse_hangouts();
        let mut hangouts = base.clone();
        hangouts.extend(base);
        hangouts.shuffle(&mut rand::rng());
        HangoutPage {
            total_page: 3,
            hangouts,
        }
    }
}

impl Default for SampleHangoutRepository {
    fn default() -> Self {
        Self::new(SampleConfig::default())
    }
}

#[async_trait]
impl HangoutRepository for SampleHangoutRepository {
    async fn fetch_hangouts(
        &self,
        _page: i32,
        _sorting: SortingOrder,
        _category: Category,
        _coordinates: Option<Coordinates>,
    ) -> RepositoryResult<HangoutPage> {
        sleep(self.config.page_fetch_delay).await;
        Ok(self.sample_page())
    }

    async fn fetch_profile_hangouts(
        &self,
        _user_id: &str,
        kind: ProfileListKind,
    ) -> RepositoryResult<Vec<Hangout>> {
        sleep(self.config.profile_fetch_delay).await;
        Ok(match kind {
            ProfileListKind::Joined => fixtures::joined_hangouts(),
            ProfileListKind::Made => fixtures::made_hangouts(),
            ProfileListKind::Liked => fixtures::liked_hangouts(),
        })
    }

    async fn create_hangout(&self, _hangout: &Hangout, _image: &[u8]) -> RepositoryResult<bool> {
        sleep(self.config.slow_mutation_delay).await;
        Ok(true)
    }

    async fn delete_hangout(&self, _hangout_id: &str) -> RepositoryResult<bool> {
        sleep(self.config.mutation_delay).await;
        Ok(true)
    }

    async fn like_hangout(
        &self,
        _hangout_id: &str,
        _has_user_liked: bool,
    ) -> RepositoryResult<bool> {
        sleep(self.config.mutation_delay).await;
        Ok(true)
    }

    async fn join_hangout(&self, _hangout_id: &str) -> RepositoryResult<bool> {
        sleep(self.config.mutation_delay).await;
        Ok(true)
    }

    async fn cancel_hangout(&self, _hangout_id: &str) -> RepositoryResult<bool> {
        sleep(self.config.mutation_delay).await;
        Ok(true)
    }

    async fn report_hangout(&self, _report: &HangoutReport) -> RepositoryResult<bool> {
        sleep(self.config.slow_mutation_delay).await;
        Ok(true)
    }

    async fn search_hangouts(&self, _query: &str, _page: i32) -> RepositoryResult<HangoutPage> {
        sleep(self.config.page_fetch_delay).await;
        Ok(self.sample_page())
    }
}
