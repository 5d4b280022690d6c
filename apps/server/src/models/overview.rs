//! Run overview: query parameters, per-run tallies and summary rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::TestOutcome;

use super::empty_as_none;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 200;

/// Raw overview query string. Empty values count as absent.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub run_id: Option<i32>,
    #[serde(default, alias = "suiteId", deserialize_with = "empty_as_none")]
    pub test_suite_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<i64>,
}

/// Normalized overview filter with pagination already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewFilter {
    pub run_id: Option<i32>,
    pub test_suite_id: Option<i32>,
    pub page: u64,
    pub page_size: u64,
}

impl OverviewFilter {
    /// Rows skipped before the requested page.
    ///
    /// Saturates at `i64::MAX`, the largest offset the database drivers bind.
    /// Pages past the last row come back empty.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.page_size)
            .min(i64::MAX as u64)
    }
}

impl From<&OverviewQuery> for OverviewFilter {
    /// Pages below 1 become 1. A page size outside 1..=200 falls back to the
    /// default of 20 rather than being pinned to the nearest bound.
    fn from(query: &OverviewQuery) -> Self {
        let page = query.page.filter(|p| *p >= 1).unwrap_or(1) as u64;
        let page_size = query
            .page_size
            .filter(|size| (1..=MAX_PAGE_SIZE as i64).contains(size))
            .map(|size| size as u64)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            run_id: query.run_id,
            test_suite_id: query.test_suite_id,
            page,
            page_size,
        }
    }
}

/// Result counts for a single run.
///
/// Every recorded result lands in exactly one outcome bucket, so the four
/// counts always add up to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    pub total: i64,
    pub passed: i64,
    pub failed: i64,
    pub blocked: i64,
    pub not_run: i64,
    pub last_executed_at: Option<DateTime<Utc>>,
}

impl RunTally {
    /// Count one result.
    pub fn record(&mut self, outcome: TestOutcome, executed_at: Option<DateTime<Utc>>) {
        self.total += 1;
        match outcome {
            TestOutcome::Passed => self.passed += 1,
            TestOutcome::Failed => self.failed += 1,
            TestOutcome::Blocked => self.blocked += 1,
            TestOutcome::NotRun => self.not_run += 1,
        }
        if executed_at > self.last_executed_at {
            self.last_executed_at = executed_at;
        }
    }
}

/// One row of the run overview.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub id: i32,
    pub test_suite_id: i32,
    pub test_suite_name: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub last_executed_at: Option<DateTime<Utc>>,
    pub total_tests: i64,
    pub passed_count: i64,
    pub failed_count: i64,
    pub blocked_count: i64,
    pub not_run_count: i64,
}
