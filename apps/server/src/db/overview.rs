//! Run overview aggregation.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::entity::{test_run, test_run_result, test_suite};
use crate::error::AppResult;
use crate::models::{OverviewFilter, RunSummary, RunTally};

use super::DbPool;

impl DbPool {
    /// Page through runs, newest first, and summarize each run's results.
    ///
    /// `run_id` and `test_suite_id` combine with AND. Unknown IDs simply
    /// produce an empty page.
    pub async fn get_run_overview(&self, filter: &OverviewFilter) -> AppResult<Vec<RunSummary>> {
        let mut select = test_run::Entity::find();

        if let Some(run_id) = filter.run_id {
            select = select.filter(test_run::Column::Id.eq(run_id));
        }

        if let Some(suite_id) = filter.test_suite_id {
            select = select.filter(test_run::Column::TestSuiteId.eq(suite_id));
        }

        let runs = select
            .find_also_related(test_suite::Entity)
            .order_by_desc(test_run::Column::CreatedAt)
            .order_by_desc(test_run::Column::Id)
            .offset(filter.offset())
            .limit(filter.page_size)
            .all(self.connection())
            .await?;

        if runs.is_empty() {
            return Ok(Vec::new());
        }

        let run_ids: Vec<i32> = runs.iter().map(|(run, _)| run.id).collect();
        let tallies = self.tally_results(&run_ids).await?;

        let summaries = runs
            .into_iter()
            .map(|(run, suite)| {
                let tally = tallies.get(&run.id).copied().unwrap_or_default();
                RunSummary {
                    id: run.id,
                    test_suite_id: run.test_suite_id,
                    test_suite_name: suite.map(|s| s.name).unwrap_or_default(),
                    name: run.name,
                    created_at: run.created_at,
                    created_by: run.created_by,
                    last_executed_at: tally.last_executed_at,
                    total_tests: tally.total,
                    passed_count: tally.passed,
                    failed_count: tally.failed,
                    blocked_count: tally.blocked,
                    not_run_count: tally.not_run,
                }
            })
            .collect();

        Ok(summaries)
    }

    /// Count results by outcome for each of the given runs.
    async fn tally_results(&self, run_ids: &[i32]) -> AppResult<HashMap<i32, RunTally>> {
        let results = test_run_result::Entity::find()
            .filter(test_run_result::Column::TestRunId.is_in(run_ids.iter().copied()))
            .all(self.connection())
            .await?;

        let mut tallies: HashMap<i32, RunTally> = HashMap::with_capacity(run_ids.len());
        for result in results {
            tallies
                .entry(result.test_run_id)
                .or_default()
                .record(result.result, result.executed_at);
        }

        Ok(tallies)
    }
}
