//! Mock hangout repository.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::error::RepositoryResult;
use crate::models::{
    Category, Coordinates, Hangout, HangoutPage, HangoutReport, ProfileListKind, SortingOrder,
};
use crate::traits::HangoutRepository;

/// A recorded hangout repository call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedHangoutCall {
    FetchHangouts {
        page: i32,
        sorting: SortingOrder,
        category: Category,
    },
    FetchProfileHangouts {
        user_id: String,
        kind: ProfileListKind,
    },
    CreateHangout {
        hangout_id: String,
    },
    DeleteHangout {
        hangout_id: String,
    },
    LikeHangout {
        hangout_id: String,
        has_user_liked: bool,
    },
    JoinHangout {
        hangout_id: String,
    },
    CancelHangout {
        hangout_id: String,
    },
    ReportHangout {
        hangout_id: String,
    },
    SearchHangouts {
        query: String,
        page: i32,
    },
}

/// Mock hangout repository with queued results and call recording.
///
/// Unconfigured calls resolve to benign defaults: empty lists, an empty
/// single page, `Ok(true)` acknowledgements. Per-kind delays let tests
/// stage in-flight races under paused time.
#[derive(Debug, Clone, Default)]
pub struct MockHangoutRepository {
    calls: Arc<Mutex<Vec<RecordedHangoutCall>>>,
    profile_results: Arc<Mutex<HashMap<ProfileListKind, VecDeque<RepositoryResult<Vec<Hangout>>>>>>,
    profile_delays: Arc<Mutex<HashMap<ProfileListKind, Duration>>>,
    page_results: Arc<Mutex<VecDeque<RepositoryResult<HangoutPage>>>>,
    ack_results: Arc<Mutex<VecDeque<RepositoryResult<bool>>>>,
}

impl MockHangoutRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next result for one profile list kind.
    pub fn push_profile_result(
        &self,
        kind: ProfileListKind,
        result: RepositoryResult<Vec<Hangout>>,
    ) {
        self.profile_results
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push_back(result);
    }

    /// Delay resolution of fetches for one profile list kind.
    pub fn set_profile_delay(&self, kind: ProfileListKind, delay: Duration) {
        self.profile_delays.lock().unwrap().insert(kind, delay);
    }

    /// Queue the next result for paged browse/search fetches.
    pub fn push_page_result(&self, result: RepositoryResult<HangoutPage>) {
        self.page_results.lock().unwrap().push_back(result);
    }

    /// Queue the next acknowledgement for any mutation.
    pub fn push_ack_result(&self, result: RepositoryResult<bool>) {
        self.ack_results.lock().unwrap().push_back(result);
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<RecordedHangoutCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedHangoutCall) {
        self.calls.lock().unwrap().push(call);
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
impl HangoutRepository for MockHangoutRepository {
    async fn fetch_hangouts(
        &self,
        page: i32,
        sorting: SortingOrder,
        category: Category,
        _coordinates: Option<Coordinates>,
    ) -> RepositoryResult<HangoutPage> {
        self.record(RecordedHangoutCall::FetchHangouts {
            page,
            sorting,
            category,
        });
        self.page_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(HangoutPage {
                    total_page: 1,
                    hangouts: Vec::new(),
                })
            })
    }

    async fn fetch_profile_hangouts(
        &self,
        user_id: &str,
        kind: ProfileListKind,
    ) -> RepositoryResult<Vec<Hangout>> {
        self.record(RecordedHangoutCall::FetchProfileHangouts {
            user_id: user_id.to_string(),
            kind,
        });
        let delay = self.profile_delays.lock().unwrap().get(&kind).copied();
        if let Some(delay) = delay {
            sleep(delay).await;
        }
        self.profile_results
            .lock()
            .unwrap()
            .get_mut(&kind)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_hangout(&self, hangout: &Hangout, _image: &[u8]) -> RepositoryResult<bool> {
        self.record(RecordedHangoutCall::CreateHangout {
            hangout_id: hangout.id.clone(),
        });
        self.next_ack()
    }

    async fn delete_hangout(&self, hangout_id: &str) -> RepositoryResult<bool> {
        self.record(RecordedHangoutCall::DeleteHangout {
            hangout_id: hangout_id.to_string(),
        });
        self.next_ack()
    }

    async fn like_hangout(
        &self,
        hangout_id: &str,
        has_user_liked: bool,
    ) -> RepositoryResult<bool> {
        self.record(RecordedHangoutCall::LikeHangout {
            hangout_id: hangout_id.to_string(),
            has_user_liked,
        });
        self.next_ack()
    }

    async fn join_hangout(&self, hangout_id: &str) -> RepositoryResult<bool> {
        self.record(RecordedHangoutCall::JoinHangout {
            hangout_id: hangout_id.to_string(),
        });
        self.next_ack()
    }

    async fn cancel_hangout(&self, hangout_id: &str) -> RepositoryResult<bool> {
        self.record(RecordedHangoutCall::CancelHangout {
            hangout_id: hangout_id.to_string(),
        });
        self.next_ack()
    }

    async fn report_hangout(&self, report: &HangoutReport) -> RepositoryResult<bool> {
        self.record(RecordedHangoutCall::ReportHangout {
            hangout_id: report.hangout_id.clone(),
        });
        self.next_ack()
    }

    async fn search_hangouts(&self, query: &str, page: i32) -> RepositoryResult<HangoutPage> {
        self.record(RecordedHangoutCall::SearchHangouts {
            query: query.to_string(),
            page,
        });
        self.page_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(HangoutPage {
                    total_page: 1,
                    hangouts: Vec::new(),
                })
            })
    }
}
