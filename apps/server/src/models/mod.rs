//! Request and response models for the manual test suite API.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};

use crate::error::{AppError, AppResult};

pub mod overview;
pub mod project;
pub mod test_case;
pub mod test_run;
pub mod test_suite;

// Re-export commonly used types
pub use overview::{OverviewFilter, OverviewQuery, RunSummary, RunTally};
pub use project::{CreateProjectRequest, ProjectResponse};
pub use test_case::{TestCaseRequest, TestCaseResponse};
pub use test_run::{
    CreateTestRunRequest, TestRunDetailResponse, TestRunResponse, TestRunResultResponse,
    UpdateTestRunResultRequest, resolve_run_name,
};
pub use test_suite::{CreateTestSuiteRequest, TestSuiteResponse};

/// Deserialize an optional value where an empty or whitespace-only string
/// means "not provided".
///
/// Used for query strings (`?runId=`) and for JSON fields the browser client
/// sends as `""` when a form input is left empty.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

/// Reject a missing or blank required text field.
pub(crate) fn require_non_blank(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be blank", field)));
    }
    Ok(())
}
