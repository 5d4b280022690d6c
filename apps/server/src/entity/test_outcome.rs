//! Closed set of outcomes shared by test cases and run results.

use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of executing a test case. `NotRun` is the "nothing recorded yet" state.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TestOutcome {
    #[default]
    #[sea_orm(string_value = "NotRun")]
    NotRun,
    #[sea_orm(string_value = "Passed")]
    Passed,
    #[sea_orm(string_value = "Failed")]
    Failed,
    #[sea_orm(string_value = "Blocked")]
    Blocked,
}

impl TestOutcome {
    /// Wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotRun => "NotRun",
            Self::Passed => "Passed",
            Self::Failed => "Failed",
            Self::Blocked => "Blocked",
        }
    }
}

impl std::fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NotRun" => Ok(Self::NotRun),
            "Passed" => Ok(Self::Passed),
            "Failed" => Ok(Self::Failed),
            "Blocked" => Ok(Self::Blocked),
            other => Err(format!(
                "unknown outcome '{}', expected one of NotRun, Passed, Failed, Blocked",
                other
            )),
        }
    }
}
