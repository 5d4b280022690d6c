//! Test run creation (suite snapshot) and run queries.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use tracing::info;

use crate::entity::test_run::{self, ActiveModel as TestRunActiveModel, Entity as TestRun};
use crate::entity::test_run_result::{self, ActiveModel as TestRunResultActiveModel};
use crate::entity::{TestOutcome, test_case};
use crate::error::AppResult;
use crate::models::resolve_run_name;

use super::{DbPool, scope};

/// Represents a test run to be created.
#[derive(Debug, Default)]
pub struct NewTestRun {
    /// Blank or missing names are replaced with a timestamped default.
    pub name: Option<String>,
    pub created_by: Option<String>,
}

/// A run result joined with the test case it was created for.
pub type ResultWithCase = (test_run_result::Model, Option<test_case::Model>);

impl DbPool {
    /// List the runs of a suite, newest first.
    pub async fn list_test_runs(
        &self,
        project_id: i32,
        suite_id: i32,
    ) -> AppResult<Vec<test_run::Model>> {
        scope::suite_in_project(self.connection(), project_id, suite_id).await?;

        let runs = TestRun::find()
            .filter(test_run::Column::TestSuiteId.eq(suite_id))
            .order_by_desc(test_run::Column::CreatedAt)
            .order_by_desc(test_run::Column::Id)
            .all(self.connection())
            .await?;

        Ok(runs)
    }

    /// Create a run and snapshot the suite's current test cases into it.
    ///
    /// One `NotRun` result is written per case present when the case list is
    /// read. The run row, the case read and the result rows share a single
    /// transaction, so the run is never observable with a partial snapshot.
    /// Cases added later never join this run.
    pub async fn create_test_run(
        &self,
        project_id: i32,
        suite_id: i32,
        run: NewTestRun,
    ) -> AppResult<(test_run::Model, Vec<test_run_result::Model>)> {
        let txn = self.connection().begin().await?;

        scope::suite_in_project(&txn, project_id, suite_id).await?;

        let now = Utc::now();
        let created = TestRunActiveModel {
            test_suite_id: Set(suite_id),
            name: Set(resolve_run_name(run.name.as_deref(), now)),
            created_at: Set(now),
            created_by: Set(run.created_by),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let results = snapshot_suite_cases(&txn, suite_id, created.id).await?;

        txn.commit().await?;

        info!(
            run_id = created.id,
            suite_id,
            results = results.len(),
            "Test run created"
        );

        Ok((created, results))
    }

    /// Get a run together with its results and their test cases,
    /// ordered by test case ID.
    pub async fn get_test_run_with_results(
        &self,
        project_id: i32,
        suite_id: i32,
        run_id: i32,
    ) -> AppResult<(test_run::Model, Vec<ResultWithCase>)> {
        let run = scope::run_in_suite(self.connection(), project_id, suite_id, run_id).await?;
        let results = self.results_with_cases(run.id).await?;
        Ok((run, results))
    }

    /// List the results of a run, each with its test case.
    pub async fn list_test_run_results(
        &self,
        project_id: i32,
        suite_id: i32,
        run_id: i32,
    ) -> AppResult<Vec<ResultWithCase>> {
        scope::run_in_suite(self.connection(), project_id, suite_id, run_id).await?;
        self.results_with_cases(run_id).await
    }

    async fn results_with_cases(&self, run_id: i32) -> AppResult<Vec<ResultWithCase>> {
        let results = test_run_result::Entity::find()
            .filter(test_run_result::Column::TestRunId.eq(run_id))
            .find_also_related(test_case::Entity)
            .order_by_asc(test_run_result::Column::TestCaseId)
            .all(self.connection())
            .await?;

        Ok(results)
    }
}

/// Read the suite's case IDs and write one `NotRun` result per case.
async fn snapshot_suite_cases<C>(
    conn: &C,
    suite_id: i32,
    run_id: i32,
) -> AppResult<Vec<test_run_result::Model>>
where
    C: ConnectionTrait,
{
    let case_ids: Vec<i32> = test_case::Entity::find()
        .select_only()
        .column(test_case::Column::Id)
        .filter(test_case::Column::TestSuiteId.eq(suite_id))
        .order_by_asc(test_case::Column::Id)
        .into_tuple()
        .all(conn)
        .await?;

    let mut results = Vec::with_capacity(case_ids.len());
    for case_id in case_ids {
        let result = TestRunResultActiveModel {
            test_run_id: Set(run_id),
            test_case_id: Set(case_id),
            result: Set(TestOutcome::NotRun),
            comment: Set(None),
            executed_by: Set(None),
            executed_at: Set(None),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        results.push(result);
    }

    Ok(results)
}
