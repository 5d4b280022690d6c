//! Test suite request/response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::test_suite;
use crate::error::AppResult;

use super::require_non_blank;

/// Request body for creating a test suite. The owning project comes from the path.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestSuiteRequest {
    pub name: String,
    pub description: Option<String>,
}

impl CreateTestSuiteRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_non_blank("name", &self.name)
    }
}

/// A test suite as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestSuiteResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub project_id: i32,
}

impl From<test_suite::Model> for TestSuiteResponse {
    fn from(m: test_suite::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            created_at: m.created_at,
            project_id: m.project_id,
        }
    }
}
