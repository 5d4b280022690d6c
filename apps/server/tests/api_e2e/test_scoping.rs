//! Nested routes must reject records that hang off a different parent exactly
//! the way they reject records that do not exist.

use serde_json::json;

use crate::test_helpers::*;

#[actix_rt::test]
async fn test_suite_under_wrong_project() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let p1 = create_project(&app, "Web").await;
    let p2 = create_project(&app, "Mobile").await;
    let suite = create_suite(&app, p1, "Login").await;

    let (status, wrong_scope) = get(&app, &format!("/api/projects/{}/testsuites/{}/testcases", p2, suite)).await;
    assert_eq!(status, 404);
    assert_eq!(
        wrong_scope["message"],
        format!("Test suite {} for project {} not found", suite, p2)
    );

    let (status, missing) = get(&app, &format!("/api/projects/{}/testsuites/999/testcases", p2)).await;
    assert_eq!(status, 404);
    assert_eq!(missing["error"], wrong_scope["error"]);
    assert_eq!(
        missing["message"],
        format!("Test suite 999 for project {} not found", p2)
    );
}

#[actix_rt::test]
async fn test_case_under_wrong_suite_is_untouched() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let p = create_project(&app, "Web").await;
    let s1 = create_suite(&app, p, "Login").await;
    let s2 = create_suite(&app, p, "Search").await;
    let case = create_case(&app, p, s1, "Valid credentials").await;

    let (status, body) = put(
        &app,
        &case_uri(p, s2, case),
        json!({ "title": "Hijacked", "status": "Failed" }),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(
        body["message"],
        format!("Test case {} in suite {} not found", case, s2)
    );

    let (status, _) = delete(&app, &case_uri(p, s2, case)).await;
    assert_eq!(status, 404);

    let (_, cases) = get(&app, &format!("/api/projects/{}/testsuites/{}/testcases", p, s1)).await;
    assert_eq!(cases[0]["title"], "Valid credentials");
    assert_eq!(cases[0]["status"], "NotRun");
}

#[actix_rt::test]
async fn test_run_under_wrong_suite() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let p = create_project(&app, "Web").await;
    let s1 = create_suite(&app, p, "Login").await;
    let s2 = create_suite(&app, p, "Search").await;
    let run = create_run(&app, p, s1, json!({})).await;
    let run_id = run["id"].as_i64().unwrap();

    let (status, body) = get(&app, &format!("{}/{}", runs_uri(p, s2), run_id)).await;
    assert_eq!(status, 404);
    assert_eq!(
        body["message"],
        format!("Test run {} in suite {} not found", run_id, s2)
    );

    let (status, _) = get(&app, &format!("{}/{}/results", runs_uri(p, s2), run_id)).await;
    assert_eq!(status, 404);
}

#[actix_rt::test]
async fn test_result_under_wrong_run_is_untouched() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let p = create_project(&app, "Web").await;
    let s = create_suite(&app, p, "Login").await;
    create_case(&app, p, s, "Valid credentials").await;

    let run_a = create_run(&app, p, s, json!({ "name": "A" })).await;
    let run_b = create_run(&app, p, s, json!({ "name": "B" })).await;
    let run_a_id = run_a["id"].as_i64().unwrap();
    let run_b_id = run_b["id"].as_i64().unwrap();

    let detail_a = get_run(&app, p, s, run_a_id).await;
    let result_a = detail_a["results"][0]["id"].as_i64().unwrap();

    let (status, body) = put(
        &app,
        &result_uri(p, s, run_b_id, result_a),
        json!({ "result": "Failed" }),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(
        body["message"],
        format!("Test run result {} in run {} not found", result_a, run_b_id)
    );

    let detail_a = get_run(&app, p, s, run_a_id).await;
    assert_eq!(detail_a["results"][0]["result"], "NotRun");
    assert!(detail_a["results"][0]["executedAt"].is_null());
}
