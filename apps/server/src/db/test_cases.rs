//! Database queries for test cases.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::entity::test_case::{self, ActiveModel as TestCaseActiveModel, Entity as TestCase};
use crate::entity::{TestOutcome, test_run_result};
use crate::error::AppResult;

use super::{DbPool, scope};

/// Represents a test case to be inserted.
pub struct NewTestCase {
    pub title: String,
    pub steps: Option<String>,
    pub expected_result: Option<String>,
    /// `None` stores `NotRun`.
    pub status: Option<TestOutcome>,
}

/// Replacement values for an existing test case.
pub struct TestCaseEdit {
    pub title: String,
    pub steps: Option<String>,
    pub expected_result: Option<String>,
    /// `None` keeps the stored status.
    pub status: Option<TestOutcome>,
}

impl DbPool {
    /// List the cases of a suite ordered by ID.
    pub async fn list_test_cases(
        &self,
        project_id: i32,
        suite_id: i32,
    ) -> AppResult<Vec<test_case::Model>> {
        scope::suite_in_project(self.connection(), project_id, suite_id).await?;

        let cases = TestCase::find()
            .filter(test_case::Column::TestSuiteId.eq(suite_id))
            .order_by_asc(test_case::Column::Id)
            .all(self.connection())
            .await?;

        Ok(cases)
    }

    /// Insert a new case into a suite.
    pub async fn insert_test_case(
        &self,
        project_id: i32,
        suite_id: i32,
        test_case: NewTestCase,
    ) -> AppResult<test_case::Model> {
        scope::suite_in_project(self.connection(), project_id, suite_id).await?;

        let model = TestCaseActiveModel {
            title: Set(test_case.title),
            steps: Set(test_case.steps),
            expected_result: Set(test_case.expected_result),
            status: Set(test_case.status.unwrap_or_default()),
            test_suite_id: Set(suite_id),
            ..Default::default()
        };

        let inserted = model.insert(self.connection()).await?;
        Ok(inserted)
    }

    /// Update a case in place. Title, steps and expected result are always
    /// overwritten; status only when a new one is supplied.
    pub async fn update_test_case(
        &self,
        project_id: i32,
        suite_id: i32,
        case_id: i32,
        edit: TestCaseEdit,
    ) -> AppResult<test_case::Model> {
        let existing =
            scope::case_in_suite(self.connection(), project_id, suite_id, case_id).await?;

        let mut active: TestCaseActiveModel = existing.into();
        active.title = Set(edit.title);
        active.steps = Set(edit.steps);
        active.expected_result = Set(edit.expected_result);
        if let Some(status) = edit.status {
            active.status = Set(status);
        }

        let updated = active.update(self.connection()).await?;
        Ok(updated)
    }

    /// Delete a case together with every run result that references it.
    /// Returns the number of run results removed.
    pub async fn delete_test_case(
        &self,
        project_id: i32,
        suite_id: i32,
        case_id: i32,
    ) -> AppResult<u64> {
        let txn = self.connection().begin().await?;

        scope::case_in_suite(&txn, project_id, suite_id, case_id).await?;

        let removed = test_run_result::Entity::delete_many()
            .filter(test_run_result::Column::TestCaseId.eq(case_id))
            .exec(&txn)
            .await?
            .rows_affected;

        TestCase::delete_by_id(case_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(removed)
    }
}
