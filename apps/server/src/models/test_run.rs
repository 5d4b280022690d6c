//! Test run and run result request/response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::test_run_results::ResultUpdate;
use crate::db::test_runs::{NewTestRun, ResultWithCase};
use crate::entity::{TestOutcome, test_run, test_run_result};

use super::TestCaseResponse;

/// Pick the name for a new run: the caller's name verbatim when it has any
/// non-whitespace content, otherwise `"Run yyyy-MM-dd HH:mm"` in UTC.
pub fn resolve_run_name(requested: Option<&str>, now: DateTime<Utc>) -> String {
    match requested {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => format!("Run {}", now.format("%Y-%m-%d %H:%M")),
    }
}

/// Request body for starting a run. Both fields are optional.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestRunRequest {
    pub name: Option<String>,
    pub created_by: Option<String>,
}

impl From<CreateTestRunRequest> for NewTestRun {
    fn from(req: CreateTestRunRequest) -> Self {
        NewTestRun {
            name: req.name,
            created_by: req.created_by,
        }
    }
}

/// Request body for recording a result. Omitted fields are stored as empty,
/// so callers always send the complete desired state.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestRunResultRequest {
    #[serde(default)]
    pub result: TestOutcome,
    pub comment: Option<String>,
    pub executed_by: Option<String>,
}

impl From<UpdateTestRunResultRequest> for ResultUpdate {
    fn from(req: UpdateTestRunResultRequest) -> Self {
        ResultUpdate {
            result: req.result,
            comment: req.comment,
            executed_by: req.executed_by,
        }
    }
}

/// A test run as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestRunResponse {
    pub id: i32,
    pub test_suite_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

impl From<test_run::Model> for TestRunResponse {
    fn from(m: test_run::Model) -> Self {
        Self {
            id: m.id,
            test_suite_id: m.test_suite_id,
            name: m.name,
            created_at: m.created_at,
            created_by: m.created_by,
        }
    }
}

/// One result row, optionally carrying the test case it belongs to.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestRunResultResponse {
    pub id: i32,
    pub test_run_id: i32,
    pub test_case_id: i32,
    pub result: TestOutcome,
    pub comment: Option<String>,
    pub executed_by: Option<String>,
    pub executed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_case: Option<TestCaseResponse>,
}

impl From<test_run_result::Model> for TestRunResultResponse {
    fn from(m: test_run_result::Model) -> Self {
        Self {
            id: m.id,
            test_run_id: m.test_run_id,
            test_case_id: m.test_case_id,
            result: m.result,
            comment: m.comment,
            executed_by: m.executed_by,
            executed_at: m.executed_at,
            test_case: None,
        }
    }
}

impl From<ResultWithCase> for TestRunResultResponse {
    fn from((result, case): ResultWithCase) -> Self {
        let mut response = Self::from(result);
        response.test_case = case.map(TestCaseResponse::from);
        response
    }
}

/// A run together with all of its results.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestRunDetailResponse {
    #[serde(flatten)]
    pub run: TestRunResponse,
    pub results: Vec<TestRunResultResponse>,
}
