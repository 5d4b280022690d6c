//! Cross-suite run overview.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{OverviewFilter, OverviewQuery, RunSummary};

/// Summarize runs with per-outcome result counts, newest first.
#[utoipa::path(
    get,
    path = "/api/test-runs/overview",
    tag = "Test Runs",
    params(
        ("runId" = Option<i32>, Query, description = "Restrict to one run"),
        ("testSuiteId" = Option<i32>, Query, description = "Restrict to runs of one suite (alias: suiteId)"),
        ("page" = Option<i64>, Query, description = "Page number, values below 1 are treated as 1"),
        ("pageSize" = Option<i64>, Query, description = "Runs per page (1-200, default 20)")
    ),
    responses(
        (status = 200, description = "Run summaries", body = [RunSummary]),
        (status = 400, description = "Malformed query", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_run_overview(
    pool: web::Data<DbPool>,
    query: web::Query<OverviewQuery>,
) -> AppResult<HttpResponse> {
    let filter = OverviewFilter::from(&query.into_inner());
    let summaries = pool.get_run_overview(&filter).await?;
    Ok(HttpResponse::Ok().json(summaries))
}

/// Configure overview routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/test-runs/overview").route(web::get().to(get_run_overview)));
}
