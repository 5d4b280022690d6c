//! Scoped lookups for nested resources.
//!
//! Every nested route names an ancestor chain (project -> suite -> case/run ->
//! result). These helpers walk that chain left to right and fail with
//! `AppError::NotFound` at the first broken link. A record that exists but
//! hangs off a different parent produces exactly the same error as a record
//! that does not exist.
//!
//! The helpers are generic over `ConnectionTrait` so they run both against the
//! pool and inside a transaction.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::entity::{project, test_case, test_run, test_run_result, test_suite};
use crate::error::{AppError, AppResult};

/// Find a project by ID.
pub async fn project<C>(conn: &C, project_id: i32) -> AppResult<project::Model>
where
    C: ConnectionTrait,
{
    project::Entity::find_by_id(project_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {}", project_id)))
}

/// Find a suite that belongs to the given project.
pub async fn suite_in_project<C>(
    conn: &C,
    project_id: i32,
    suite_id: i32,
) -> AppResult<test_suite::Model>
where
    C: ConnectionTrait,
{
    project(conn, project_id).await?;

    test_suite::Entity::find_by_id(suite_id)
        .filter(test_suite::Column::ProjectId.eq(project_id))
        .one(conn)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Test suite {} for project {}",
                suite_id, project_id
            ))
        })
}

/// Find a test case through its project and suite.
pub async fn case_in_suite<C>(
    conn: &C,
    project_id: i32,
    suite_id: i32,
    case_id: i32,
) -> AppResult<test_case::Model>
where
    C: ConnectionTrait,
{
    suite_in_project(conn, project_id, suite_id).await?;

    test_case::Entity::find_by_id(case_id)
        .filter(test_case::Column::TestSuiteId.eq(suite_id))
        .one(conn)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Test case {} in suite {}", case_id, suite_id))
        })
}

/// Find a test run through its project and suite.
pub async fn run_in_suite<C>(
    conn: &C,
    project_id: i32,
    suite_id: i32,
    run_id: i32,
) -> AppResult<test_run::Model>
where
    C: ConnectionTrait,
{
    suite_in_project(conn, project_id, suite_id).await?;

    test_run::Entity::find_by_id(run_id)
        .filter(test_run::Column::TestSuiteId.eq(suite_id))
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Test run {} in suite {}", run_id, suite_id)))
}

/// Find a run result through the full project -> suite -> run chain.
pub async fn result_in_run<C>(
    conn: &C,
    project_id: i32,
    suite_id: i32,
    run_id: i32,
    result_id: i32,
) -> AppResult<test_run_result::Model>
where
    C: ConnectionTrait,
{
    run_in_suite(conn, project_id, suite_id, run_id).await?;

    test_run_result::Entity::find_by_id(result_id)
        .filter(test_run_result::Column::TestRunId.eq(run_id))
        .one(conn)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Test run result {} in run {}", result_id, run_id))
        })
}
