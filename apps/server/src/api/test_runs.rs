//! Test run API handlers: listing, starting and inspecting runs of a suite.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{
    CreateTestRunRequest, TestRunDetailResponse, TestRunResponse, TestRunResultResponse,
};

/// List the runs of a suite, newest first.
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/testsuites/{suite_id}/runs",
    tag = "Test Runs",
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("suite_id" = i32, Path, description = "Test suite ID")
    ),
    responses(
        (status = 200, description = "Runs ordered by creation time, newest first", body = [TestRunResponse]),
        (status = 404, description = "Suite not found in project", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_test_runs(
    pool: web::Data<DbPool>,
    path: web::Path<(i32, i32)>,
) -> AppResult<HttpResponse> {
    let (project_id, suite_id) = path.into_inner();

    let runs: Vec<TestRunResponse> = pool
        .list_test_runs(project_id, suite_id)
        .await?
        .into_iter()
        .map(TestRunResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(runs))
}

/// Start a run: snapshot every current test case of the suite as `NotRun`.
///
/// The body is optional; without a usable `name` the run is named
/// `"Run yyyy-MM-dd HH:mm"` (UTC).
#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/testsuites/{suite_id}/runs",
    tag = "Test Runs",
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("suite_id" = i32, Path, description = "Test suite ID")
    ),
    request_body(content = CreateTestRunRequest, description = "Optional run name and author"),
    responses(
        (status = 201, description = "Run created with one result per test case", body = TestRunResponse),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse),
        (status = 404, description = "Suite not found in project", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_test_run(
    pool: web::Data<DbPool>,
    path: web::Path<(i32, i32)>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let (project_id, suite_id) = path.into_inner();

    let req: CreateTestRunRequest = if body.iter().all(u8::is_ascii_whitespace) {
        CreateTestRunRequest::default()
    } else {
        serde_json::from_slice(&body)?
    };

    let (run, _results) = pool
        .create_test_run(project_id, suite_id, req.into())
        .await?;

    Ok(HttpResponse::Created().json(TestRunResponse::from(run)))
}

/// Get a run with all of its results and their test cases.
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/testsuites/{suite_id}/runs/{run_id}",
    tag = "Test Runs",
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("suite_id" = i32, Path, description = "Test suite ID"),
        ("run_id" = i32, Path, description = "Test run ID")
    ),
    responses(
        (status = 200, description = "Run with results", body = TestRunDetailResponse),
        (status = 404, description = "Run not found in suite", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_test_run(
    pool: web::Data<DbPool>,
    path: web::Path<(i32, i32, i32)>,
) -> AppResult<HttpResponse> {
    let (project_id, suite_id, run_id) = path.into_inner();

    let (run, results) = pool
        .get_test_run_with_results(project_id, suite_id, run_id)
        .await?;

    let response = TestRunDetailResponse {
        run: TestRunResponse::from(run),
        results: results.into_iter().map(TestRunResultResponse::from).collect(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// List the results of a run, each with its test case.
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/testsuites/{suite_id}/runs/{run_id}/results",
    tag = "Test Runs",
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("suite_id" = i32, Path, description = "Test suite ID"),
        ("run_id" = i32, Path, description = "Test run ID")
    ),
    responses(
        (status = 200, description = "Results ordered by test case ID", body = [TestRunResultResponse]),
        (status = 404, description = "Run not found in suite", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_test_run_results(
    pool: web::Data<DbPool>,
    path: web::Path<(i32, i32, i32)>,
) -> AppResult<HttpResponse> {
    let (project_id, suite_id, run_id) = path.into_inner();

    let results: Vec<TestRunResultResponse> = pool
        .list_test_run_results(project_id, suite_id, run_id)
        .await?
        .into_iter()
        .map(TestRunResultResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(results))
}

/// Configure test run routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects/{project_id}/testsuites/{suite_id}/runs")
            .route(web::get().to(list_test_runs))
            .route(web::post().to(create_test_run)),
    )
    .service(
        web::resource("/projects/{project_id}/testsuites/{suite_id}/runs/{run_id}")
            .route(web::get().to(get_test_run)),
    )
    .service(
        web::resource("/projects/{project_id}/testsuites/{suite_id}/runs/{run_id}/results")
            .route(web::get().to(list_test_run_results)),
    );
}
