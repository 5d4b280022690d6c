//! Result editor tests.

use serde_json::json;

use crate::test_helpers::*;

/// Project, suite, one case and one run. Returns (project, suite, run, result).
async fn single_result_run<S>(app: &S) -> (i64, i64, i64, i64)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let p = create_project(app, "Web").await;
    let s = create_suite(app, p, "Login").await;
    create_case(app, p, s, "Valid credentials").await;
    let run = create_run(app, p, s, json!({ "name": "Smoke" })).await;
    let run_id = run["id"].as_i64().unwrap();
    let detail = get_run(app, p, s, run_id).await;
    let result_id = detail["results"][0]["id"].as_i64().unwrap();
    (p, s, run_id, result_id)
}

#[actix_rt::test]
async fn test_update_result_records_execution() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let (p, s, run, result) = single_result_run(&app).await;

    let (status, body) = put(
        &app,
        &result_uri(p, s, run, result),
        json!({ "result": "Failed", "comment": "500 on submit", "executedBy": "ana" }),
    )
    .await;
    assert_eq!(status, 204);
    assert!(body.is_null());

    let detail = get_run(&app, p, s, run).await;
    let edited = &detail["results"][0];
    assert_eq!(edited["result"], "Failed");
    assert_eq!(edited["comment"], "500 on submit");
    assert_eq!(edited["executedBy"], "ana");
    assert!(edited["executedAt"].is_string());
}

#[actix_rt::test]
async fn test_update_result_overwrites_every_field() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let (p, s, run, result) = single_result_run(&app).await;
    let uri = result_uri(p, s, run, result);

    let (status, _) = put(
        &app,
        &uri,
        json!({ "result": "Failed", "comment": "flaky", "executedBy": "ana" }),
    )
    .await;
    assert_eq!(status, 204);
    let first = get_run(&app, p, s, run).await["results"][0].clone();

    let (status, _) = put(&app, &uri, json!({ "result": "Passed" })).await;
    assert_eq!(status, 204);
    let second = get_run(&app, p, s, run).await["results"][0].clone();

    assert_eq!(second["result"], "Passed");
    assert!(second["comment"].is_null());
    assert!(second["executedBy"].is_null());

    let first_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(first["executedAt"].clone()).unwrap();
    let second_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(second["executedAt"].clone()).unwrap();
    assert!(second_at >= first_at);
}

#[actix_rt::test]
async fn test_not_run_to_not_run_still_stamps_execution() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let (p, s, run, result) = single_result_run(&app).await;

    let (status, _) = put(&app, &result_uri(p, s, run, result), json!({ "result": "NotRun" })).await;
    assert_eq!(status, 204);

    let detail = get_run(&app, p, s, run).await;
    assert_eq!(detail["results"][0]["result"], "NotRun");
    assert!(detail["results"][0]["executedAt"].is_string());
}

#[actix_rt::test]
async fn test_omitted_result_resets_to_not_run() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let (p, s, run, result) = single_result_run(&app).await;
    let uri = result_uri(p, s, run, result);

    put(&app, &uri, json!({ "result": "Blocked" })).await;
    let (status, _) = put(&app, &uri, json!({ "comment": "retest" })).await;
    assert_eq!(status, 204);

    let detail = get_run(&app, p, s, run).await;
    assert_eq!(detail["results"][0]["result"], "NotRun");
    assert_eq!(detail["results"][0]["comment"], "retest");
}

#[actix_rt::test]
async fn test_unknown_outcome_rejected() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let (p, s, run, result) = single_result_run(&app).await;

    let (status, body) = put(&app, &result_uri(p, s, run, result), json!({ "result": "Skipped" })).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");

    let detail = get_run(&app, p, s, run).await;
    assert_eq!(detail["results"][0]["result"], "NotRun");
    assert!(detail["results"][0]["executedAt"].is_null());
}

#[actix_rt::test]
async fn test_missing_result_returns_not_found() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let (p, s, run, _) = single_result_run(&app).await;

    let (status, body) = put(&app, &result_uri(p, s, run, 9999), json!({ "result": "Passed" })).await;
    assert_eq!(status, 404);
    assert_eq!(
        body["message"],
        format!("Test run result 9999 in run {} not found", run)
    );
}

#[actix_rt::test]
async fn test_list_results_embeds_case() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let (p, s, run, result) = single_result_run(&app).await;

    let (status, body) = get(&app, &format!("{}/{}/results", runs_uri(p, s), run)).await;
    assert_eq!(status, 200);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"].as_i64().unwrap(), result);
    assert_eq!(results[0]["testCase"]["title"], "Valid credentials");
    assert_eq!(results[0]["testCase"]["expectedResult"], "it works");
}
