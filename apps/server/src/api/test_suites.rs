//! Test suite API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::db::test_suites::NewTestSuite;
use crate::error::AppResult;
use crate::models::{CreateTestSuiteRequest, TestSuiteResponse};

/// List the test suites of a project.
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/testsuites",
    tag = "Test Suites",
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Suites ordered by ID", body = [TestSuiteResponse]),
        (status = 404, description = "Project not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_test_suites(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let suites: Vec<TestSuiteResponse> = pool
        .list_test_suites(path.into_inner())
        .await?
        .into_iter()
        .map(TestSuiteResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(suites))
}

/// Create a test suite in a project.
#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/testsuites",
    tag = "Test Suites",
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    request_body = CreateTestSuiteRequest,
    responses(
        (status = 201, description = "Suite created", body = TestSuiteResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Project not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_test_suite(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<CreateTestSuiteRequest>,
) -> AppResult<HttpResponse> {
    let project_id = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let suite = pool
        .insert_test_suite(
            project_id,
            NewTestSuite {
                name: req.name,
                description: req.description,
            },
        )
        .await?;

    info!(project_id, suite_id = suite.id, "Test suite created");

    Ok(HttpResponse::Created().json(TestSuiteResponse::from(suite)))
}

/// Configure test suite routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects/{project_id}/testsuites")
            .route(web::get().to(list_test_suites))
            .route(web::post().to(create_test_suite)),
    );
}
