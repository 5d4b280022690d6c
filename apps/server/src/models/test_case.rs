//! Test case request/response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::test_cases::{NewTestCase, TestCaseEdit};
use crate::entity::{TestOutcome, test_case};
use crate::error::AppResult;

use super::{empty_as_none, require_non_blank};

/// Request body for creating or editing a test case.
///
/// A missing or blank `status` means `NotRun` on create and "keep the current
/// status" on edit.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseRequest {
    pub title: String,
    pub steps: Option<String>,
    pub expected_result: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<TestOutcome>,
}

impl TestCaseRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_non_blank("title", &self.title)
    }

    pub fn into_new(self) -> NewTestCase {
        NewTestCase {
            title: self.title,
            steps: self.steps,
            expected_result: self.expected_result,
            status: self.status,
        }
    }

    pub fn into_edit(self) -> TestCaseEdit {
        TestCaseEdit {
            title: self.title,
            steps: self.steps,
            expected_result: self.expected_result,
            status: self.status,
        }
    }
}

/// A test case as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseResponse {
    pub id: i32,
    pub title: String,
    pub steps: Option<String>,
    pub expected_result: Option<String>,
    pub status: TestOutcome,
    pub test_suite_id: i32,
}

impl From<test_case::Model> for TestCaseResponse {
    fn from(m: test_case::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            steps: m.steps,
            expected_result: m.expected_result,
            status: m.status,
            test_suite_id: m.test_suite_id,
        }
    }
}
