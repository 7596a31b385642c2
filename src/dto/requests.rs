use serde::Serialize;

use crate::models::{Category, Coordinates, SortingOrder};

/// Query payload of the paged browse endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct FetchHangoutsRequest {
    pub page: i32,
    pub sorting: String,
    pub category: String,
    /// `"lat,lng"` when the sort order needs a reference point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
}

impl FetchHangoutsRequest {
    pub fn new(
        page: i32,
        sorting: SortingOrder,
        category: Category,
        coordinates: Option<Coordinates>,
    ) -> Self {
        Self {
            page,
            sorting: sorting.as_str().to_string(),
            category: category.as_str().to_string(),
            coordinates: coordinates.map(|c| format!("{},{}", c.latitude, c.longitude)),
        }
    }
}

/// Query payload of the search endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHangoutsRequest {
    pub query: String,
    pub page: i32,
}

/// Body of the participation update endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipationUpdateRequest {
    /// `"join"` or `"cancel"`.
    pub action: String,
}

impl ParticipationUpdateRequest {
    pub fn join() -> Self {
        Self {
            action: "join".to_string(),
        }
    }

    pub fn cancel() -> Self {
        Self {
            action: "cancel".to_string(),
        }
    }
}

/// Body of the report endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ReportHangoutRequest {
    #[serde(rename = "hangoutID")]
    pub hangout_id: String,
    #[serde(rename = "reportTitle")]
    pub report_title: String,
    #[serde(rename = "reportDetail")]
    pub report_detail: String,
}
