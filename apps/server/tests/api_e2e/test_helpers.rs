//! Shared test helpers for API E2E tests.

use actix_web::{App, dev::ServiceResponse, test, web};
use manual_test_suite_lib::api;
use manual_test_suite_lib::config::{Config, DatabaseConfig, Environment};
use manual_test_suite_lib::db::DbPool;
use serde_json::Value;

/// Create a migrated pool over a private in-memory SQLite database.
///
/// A single pooled connection keeps every query on the same in-memory
/// database.
pub async fn create_test_pool() -> DbPool {
    let config = Config {
        environment: Environment::Development,
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_secs: 5,
        },
        static_dir: None,
    };

    let pool = DbPool::new(&config)
        .await
        .expect("Failed to open in-memory SQLite database");
    pool.run_migrations()
        .await
        .expect("Failed to run migrations");
    pool
}

/// Create a test app mounted under `/api` like the real server.
pub async fn create_test_app(
    pool: &DbPool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .service(web::scope("/api").configure(api::configure_routes)),
    )
    .await
}

/// Send a request and return the status plus the JSON body (`Null` when empty).
pub async fn send<S>(app: &S, req: actix_http::Request) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let bytes = test::read_body(resp).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

pub async fn get<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, test::TestRequest::get().uri(uri).to_request()).await
}

pub async fn post<S>(app: &S, uri: &str, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, test::TestRequest::post().uri(uri).set_json(body).to_request()).await
}

pub async fn put<S>(app: &S, uri: &str, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, test::TestRequest::put().uri(uri).set_json(body).to_request()).await
}

pub async fn delete<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    send(app, test::TestRequest::delete().uri(uri).to_request()).await
}

/// Create a project and return its ID.
pub async fn create_project<S>(app: &S, name: &str) -> i64
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let (status, body) = post(app, "/api/projects", serde_json::json!({ "name": name })).await;
    assert_eq!(status, 201, "Failed to create project: {}", body);
    body["id"].as_i64().unwrap()
}

/// Create a suite under a project and return its ID.
pub async fn create_suite<S>(app: &S, project_id: i64, name: &str) -> i64
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let (status, body) = post(
        app,
        &format!("/api/projects/{}/testsuites", project_id),
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(status, 201, "Failed to create suite: {}", body);
    body["id"].as_i64().unwrap()
}

/// Create a test case under a suite and return its ID.
pub async fn create_case<S>(app: &S, project_id: i64, suite_id: i64, title: &str) -> i64
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let (status, body) = post(
        app,
        &format!("/api/projects/{}/testsuites/{}/testcases", project_id, suite_id),
        serde_json::json!({ "title": title, "steps": "1. do it", "expectedResult": "it works" }),
    )
    .await;
    assert_eq!(status, 201, "Failed to create case: {}", body);
    body["id"].as_i64().unwrap()
}

/// Start a run on a suite and return the created run body.
pub async fn create_run<S>(app: &S, project_id: i64, suite_id: i64, body: Value) -> Value
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let (status, run) = post(app, &runs_uri(project_id, suite_id), body).await;
    assert_eq!(status, 201, "Failed to create run: {}", run);
    run
}

/// Fetch a run with its results.
pub async fn get_run<S>(app: &S, project_id: i64, suite_id: i64, run_id: i64) -> Value
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let (status, run) = get(app, &format!("{}/{}", runs_uri(project_id, suite_id), run_id)).await;
    assert_eq!(status, 200, "Failed to get run: {}", run);
    run
}

pub fn runs_uri(project_id: i64, suite_id: i64) -> String {
    format!("/api/projects/{}/testsuites/{}/runs", project_id, suite_id)
}

pub fn case_uri(project_id: i64, suite_id: i64, case_id: i64) -> String {
    format!(
        "/api/projects/{}/testsuites/{}/testcases/{}",
        project_id, suite_id, case_id
    )
}

pub fn result_uri(project_id: i64, suite_id: i64, run_id: i64, result_id: i64) -> String {
    format!(
        "{}/{}/results/{}",
        runs_uri(project_id, suite_id),
        run_id,
        result_id
    )
}
