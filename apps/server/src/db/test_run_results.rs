//! Editing individual run results.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use tracing::info;

use crate::entity::TestOutcome;
use crate::entity::test_run_result::{self, ActiveModel as TestRunResultActiveModel};
use crate::error::AppResult;

use super::{DbPool, scope};

/// Full replacement state for a run result. Every field is written as given;
/// `None` clears the stored value.
#[derive(Debug, Clone)]
pub struct ResultUpdate {
    pub result: TestOutcome,
    pub comment: Option<String>,
    pub executed_by: Option<String>,
}

impl DbPool {
    /// Overwrite a run result and stamp `executed_at` with the current time.
    ///
    /// The project -> suite -> run -> result chain is verified before anything
    /// is written. Any outcome may replace any other, including itself.
    pub async fn update_test_run_result(
        &self,
        project_id: i32,
        suite_id: i32,
        run_id: i32,
        result_id: i32,
        update: ResultUpdate,
    ) -> AppResult<test_run_result::Model> {
        let existing =
            scope::result_in_run(self.connection(), project_id, suite_id, run_id, result_id)
                .await?;

        let previous = existing.result;
        let mut active: TestRunResultActiveModel = existing.into();
        active.result = Set(update.result);
        active.comment = Set(update.comment);
        active.executed_by = Set(update.executed_by);
        active.executed_at = Set(Some(Utc::now()));

        let updated = active.update(self.connection()).await?;

        info!(
            run_id,
            result_id,
            from = %previous,
            to = %updated.result,
            "Test run result updated"
        );

        Ok(updated)
    }
}
