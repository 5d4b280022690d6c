//! Database queries for test suites.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entity::test_suite::{self, ActiveModel as TestSuiteActiveModel, Entity as TestSuite};
use crate::error::AppResult;

use super::{DbPool, scope};

/// Represents a test suite to be inserted.
pub struct NewTestSuite {
    pub name: String,
    pub description: Option<String>,
}

impl DbPool {
    /// List the suites of a project ordered by ID.
    pub async fn list_test_suites(&self, project_id: i32) -> AppResult<Vec<test_suite::Model>> {
        scope::project(self.connection(), project_id).await?;

        let suites = TestSuite::find()
            .filter(test_suite::Column::ProjectId.eq(project_id))
            .order_by_asc(test_suite::Column::Id)
            .all(self.connection())
            .await?;

        Ok(suites)
    }

    /// Insert a new suite under a project.
    pub async fn insert_test_suite(
        &self,
        project_id: i32,
        suite: NewTestSuite,
    ) -> AppResult<test_suite::Model> {
        scope::project(self.connection(), project_id).await?;

        let model = TestSuiteActiveModel {
            name: Set(suite.name),
            description: Set(suite.description),
            created_at: Set(Utc::now()),
            project_id: Set(project_id),
            ..Default::default()
        };

        let inserted = model.insert(self.connection()).await?;
        Ok(inserted)
    }
}
