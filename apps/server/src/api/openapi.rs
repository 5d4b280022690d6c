//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, entity, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Manual Test Suite Server",
        version = "0.1.0",
        description = "API for organizing manual test cases into suites and recording test runs"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Projects
        api::projects::list_projects,
        api::projects::get_project,
        api::projects::create_project,
        // Test suites
        api::test_suites::list_test_suites,
        api::test_suites::create_test_suite,
        // Test cases
        api::test_cases::list_test_cases,
        api::test_cases::create_test_case,
        api::test_cases::update_test_case,
        api::test_cases::delete_test_case,
        // Test runs
        api::test_runs::list_test_runs,
        api::test_runs::create_test_run,
        api::test_runs::get_test_run,
        api::test_runs::list_test_run_results,
        api::test_run_results::update_test_run_result,
        api::overview::get_run_overview,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            entity::TestOutcome,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Projects and suites
            models::CreateProjectRequest,
            models::ProjectResponse,
            models::CreateTestSuiteRequest,
            models::TestSuiteResponse,
            // Test cases
            models::TestCaseRequest,
            models::TestCaseResponse,
            // Test runs
            models::CreateTestRunRequest,
            models::TestRunResponse,
            models::TestRunDetailResponse,
            models::TestRunResultResponse,
            models::UpdateTestRunResultRequest,
            models::RunSummary,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Projects", description = "Top-level containers for test suites"),
        (name = "Test Suites", description = "Groups of test cases within a project"),
        (name = "Test Cases", description = "Documented manual test procedures"),
        (name = "Test Runs", description = "Execution passes over a suite and their results")
    )
)]
pub struct ApiDoc;
