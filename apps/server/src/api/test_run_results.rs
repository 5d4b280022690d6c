//! Recording the outcome of a single test case within a run.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::UpdateTestRunResultRequest;

/// Overwrite a run result and stamp its execution time.
///
/// Every field is replaced: omitted `comment`/`executedBy` are cleared and an
/// omitted `result` is stored as `NotRun`.
#[utoipa::path(
    put,
    path = "/api/projects/{project_id}/testsuites/{suite_id}/runs/{run_id}/results/{result_id}",
    tag = "Test Runs",
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("suite_id" = i32, Path, description = "Test suite ID"),
        ("run_id" = i32, Path, description = "Test run ID"),
        ("result_id" = i32, Path, description = "Test run result ID")
    ),
    request_body = UpdateTestRunResultRequest,
    responses(
        (status = 204, description = "Result updated"),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Result not found in run", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_test_run_result(
    pool: web::Data<DbPool>,
    path: web::Path<(i32, i32, i32, i32)>,
    body: web::Json<UpdateTestRunResultRequest>,
) -> AppResult<HttpResponse> {
    let (project_id, suite_id, run_id, result_id) = path.into_inner();

    pool.update_test_run_result(
        project_id,
        suite_id,
        run_id,
        result_id,
        body.into_inner().into(),
    )
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure run result routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(
            "/projects/{project_id}/testsuites/{suite_id}/runs/{run_id}/results/{result_id}",
        )
        .route(web::put().to(update_test_run_result)),
    );
}
