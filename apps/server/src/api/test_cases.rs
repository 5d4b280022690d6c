//! Test case API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{TestCaseRequest, TestCaseResponse};

/// List the test cases of a suite.
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/testsuites/{suite_id}/testcases",
    tag = "Test Cases",
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("suite_id" = i32, Path, description = "Test suite ID")
    ),
    responses(
        (status = 200, description = "Cases ordered by ID", body = [TestCaseResponse]),
        (status = 404, description = "Suite not found in project", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_test_cases(
    pool: web::Data<DbPool>,
    path: web::Path<(i32, i32)>,
) -> AppResult<HttpResponse> {
    let (project_id, suite_id) = path.into_inner();

    let cases: Vec<TestCaseResponse> = pool
        .list_test_cases(project_id, suite_id)
        .await?
        .into_iter()
        .map(TestCaseResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(cases))
}

/// Create a test case in a suite.
#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/testsuites/{suite_id}/testcases",
    tag = "Test Cases",
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("suite_id" = i32, Path, description = "Test suite ID")
    ),
    request_body = TestCaseRequest,
    responses(
        (status = 201, description = "Case created", body = TestCaseResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Suite not found in project", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_test_case(
    pool: web::Data<DbPool>,
    path: web::Path<(i32, i32)>,
    body: web::Json<TestCaseRequest>,
) -> AppResult<HttpResponse> {
    let (project_id, suite_id) = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let test_case = pool
        .insert_test_case(project_id, suite_id, req.into_new())
        .await?;

    info!(suite_id, case_id = test_case.id, "Test case created");

    Ok(HttpResponse::Created().json(TestCaseResponse::from(test_case)))
}

/// Edit a test case. A blank status keeps the current one.
#[utoipa::path(
    put,
    path = "/api/projects/{project_id}/testsuites/{suite_id}/testcases/{case_id}",
    tag = "Test Cases",
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("suite_id" = i32, Path, description = "Test suite ID"),
        ("case_id" = i32, Path, description = "Test case ID")
    ),
    request_body = TestCaseRequest,
    responses(
        (status = 200, description = "Case updated", body = TestCaseResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Case not found in suite", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_test_case(
    pool: web::Data<DbPool>,
    path: web::Path<(i32, i32, i32)>,
    body: web::Json<TestCaseRequest>,
) -> AppResult<HttpResponse> {
    let (project_id, suite_id, case_id) = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let test_case = pool
        .update_test_case(project_id, suite_id, case_id, req.into_edit())
        .await?;

    Ok(HttpResponse::Ok().json(TestCaseResponse::from(test_case)))
}

/// Delete a test case and its run results.
#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}/testsuites/{suite_id}/testcases/{case_id}",
    tag = "Test Cases",
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("suite_id" = i32, Path, description = "Test suite ID"),
        ("case_id" = i32, Path, description = "Test case ID")
    ),
    responses(
        (status = 204, description = "Case deleted"),
        (status = 404, description = "Case not found in suite", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_test_case(
    pool: web::Data<DbPool>,
    path: web::Path<(i32, i32, i32)>,
) -> AppResult<HttpResponse> {
    let (project_id, suite_id, case_id) = path.into_inner();

    let removed_results = pool
        .delete_test_case(project_id, suite_id, case_id)
        .await?;

    info!(suite_id, case_id, removed_results, "Test case deleted");

    Ok(HttpResponse::NoContent().finish())
}

/// Configure test case routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects/{project_id}/testsuites/{suite_id}/testcases")
            .route(web::get().to(list_test_cases))
            .route(web::post().to(create_test_case)),
    )
    .service(
        web::resource("/projects/{project_id}/testsuites/{suite_id}/testcases/{case_id}")
            .route(web::put().to(update_test_case))
            .route(web::delete().to(delete_test_case)),
    );
}
