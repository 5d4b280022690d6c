//! API endpoint modules.

pub mod health;
pub mod openapi;
pub mod overview;
pub mod projects;
pub mod test_cases;
pub mod test_run_results;
pub mod test_runs;
pub mod test_suites;

use actix_web::web;

use crate::error::AppError;

pub use health::configure_health_routes;
pub use openapi::ApiDoc;

/// Register every resource route plus extractor configuration so malformed
/// JSON bodies and query strings answer with `INVALID_INPUT`, and non-numeric
/// IDs in the path answer with `NOT_FOUND`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|_err, req| AppError::NotFound(format!("Resource {}", req.path())).into()),
    )
    .configure(configure_health_routes)
    .configure(projects::configure_routes)
    .configure(test_suites::configure_routes)
    .configure(test_cases::configure_routes)
    .configure(test_runs::configure_routes)
    .configure(test_run_results::configure_routes)
    .configure(overview::configure_routes);
}
