//! Run overview tests.

use serde_json::{Value, json};

use crate::test_helpers::*;

const OVERVIEW: &str = "/api/test-runs/overview";

fn ids(page: &Value) -> Vec<i64> {
    page.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

#[actix_rt::test]
async fn test_overview_counts_outcomes() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let p = create_project(&app, "Web").await;
    let s = create_suite(&app, p, "Login").await;
    for title in ["a", "b", "c", "d", "e"] {
        create_case(&app, p, s, title).await;
    }
    let run = create_run(&app, p, s, json!({ "name": "Regression", "createdBy": "ana" })).await;
    let run_id = run["id"].as_i64().unwrap();

    let (status, page) = get(&app, OVERVIEW).await;
    assert_eq!(status, 200);
    let summary = &page[0];
    assert_eq!(summary["totalTests"], 5);
    assert_eq!(summary["notRunCount"], 5);
    assert!(summary["lastExecutedAt"].is_null());

    let detail = get_run(&app, p, s, run_id).await;
    let results: Vec<i64> = detail["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    let outcomes = ["Passed", "Passed", "Failed", "Blocked"];
    for (result_id, outcome) in results.iter().zip(outcomes) {
        let (status, _) = put(&app, &result_uri(p, s, run_id, *result_id), json!({ "result": outcome })).await;
        assert_eq!(status, 204);
    }

    let (_, page) = get(&app, OVERVIEW).await;
    let summary = &page[0];
    assert_eq!(summary["id"].as_i64().unwrap(), run_id);
    assert_eq!(summary["testSuiteId"].as_i64().unwrap(), s);
    assert_eq!(summary["testSuiteName"], "Login");
    assert_eq!(summary["name"], "Regression");
    assert_eq!(summary["createdBy"], "ana");
    assert_eq!(summary["totalTests"], 5);
    assert_eq!(summary["passedCount"], 2);
    assert_eq!(summary["failedCount"], 1);
    assert_eq!(summary["blockedCount"], 1);
    assert_eq!(summary["notRunCount"], 1);

    let counted: i64 = ["passedCount", "failedCount", "blockedCount", "notRunCount"]
        .iter()
        .map(|k| summary[*k].as_i64().unwrap())
        .sum();
    assert_eq!(counted, summary["totalTests"].as_i64().unwrap());

    let latest = get_run(&app, p, s, run_id).await["results"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["executedAt"].as_str().map(str::to_string))
        .map(|at| at.parse::<chrono::DateTime<chrono::Utc>>().unwrap())
        .max()
        .unwrap();
    let reported: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(summary["lastExecutedAt"].clone()).unwrap();
    assert_eq!(reported, latest);
}

#[actix_rt::test]
async fn test_overview_empty_run_has_zero_counts() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let p = create_project(&app, "Web").await;
    let s = create_suite(&app, p, "Empty").await;
    create_run(&app, p, s, json!({})).await;

    let (_, page) = get(&app, OVERVIEW).await;
    assert_eq!(page[0]["totalTests"], 0);
    assert_eq!(page[0]["passedCount"], 0);
    assert_eq!(page[0]["notRunCount"], 0);
    assert!(page[0]["lastExecutedAt"].is_null());
}

#[actix_rt::test]
async fn test_overview_filters() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let p = create_project(&app, "Web").await;
    let login = create_suite(&app, p, "Login").await;
    let search = create_suite(&app, p, "Search").await;

    let l1 = create_run(&app, p, login, json!({})).await["id"].as_i64().unwrap();
    let s1 = create_run(&app, p, search, json!({})).await["id"].as_i64().unwrap();
    let l2 = create_run(&app, p, login, json!({})).await["id"].as_i64().unwrap();

    let (_, page) = get(&app, OVERVIEW).await;
    assert_eq!(ids(&page), vec![l2, s1, l1]);

    let (_, page) = get(&app, &format!("{}?runId={}", OVERVIEW, s1)).await;
    assert_eq!(ids(&page), vec![s1]);

    let (_, page) = get(&app, &format!("{}?testSuiteId={}", OVERVIEW, login)).await;
    assert_eq!(ids(&page), vec![l2, l1]);

    let (_, page) = get(&app, &format!("{}?suiteId={}", OVERVIEW, login)).await;
    assert_eq!(ids(&page), vec![l2, l1]);

    let (_, page) = get(&app, &format!("{}?runId={}&testSuiteId={}", OVERVIEW, s1, login)).await;
    assert_eq!(page, json!([]));

    let (status, page) = get(&app, &format!("{}?runId=&testSuiteId=", OVERVIEW)).await;
    assert_eq!(status, 200);
    assert_eq!(ids(&page), vec![l2, s1, l1]);

    let (_, page) = get(&app, &format!("{}?runId=12345", OVERVIEW)).await;
    assert_eq!(page, json!([]));
}

#[actix_rt::test]
async fn test_overview_rejects_non_numeric_filter() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = get(&app, &format!("{}?runId=abc", OVERVIEW)).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[actix_rt::test]
async fn test_overview_pagination_clamps() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let p = create_project(&app, "Web").await;
    let s = create_suite(&app, p, "Login").await;
    for _ in 0..25 {
        create_run(&app, p, s, json!({})).await;
    }

    let (_, default_page) = get(&app, OVERVIEW).await;
    assert_eq!(default_page.as_array().unwrap().len(), 20);

    for query in ["pageSize=0", "pageSize=500", "pageSize=-3", "page=0", "page=-1&pageSize="] {
        let (status, page) = get(&app, &format!("{}?{}", OVERVIEW, query)).await;
        assert_eq!(status, 200, "query {}", query);
        assert_eq!(ids(&page), ids(&default_page), "query {}", query);
    }

    let (_, second) = get(&app, &format!("{}?page=2", OVERVIEW)).await;
    assert_eq!(second.as_array().unwrap().len(), 5);

    let (_, small) = get(&app, &format!("{}?page=3&pageSize=10", OVERVIEW)).await;
    assert_eq!(small.as_array().unwrap().len(), 5);

    let (_, beyond) = get(&app, &format!("{}?page=9", OVERVIEW)).await;
    assert_eq!(beyond, json!([]));

    let (_, all) = get(&app, &format!("{}?pageSize=200", OVERVIEW)).await;
    assert_eq!(all.as_array().unwrap().len(), 25);
}

#[actix_rt::test]
async fn test_overview_huge_page_is_empty() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let p = create_project(&app, "Web").await;
    let s = create_suite(&app, p, "Login").await;
    create_run(&app, p, s, json!({})).await;

    for query in [
        "page=9223372036854775807&pageSize=200",
        "page=500000000000000000&pageSize=20",
        "page=9223372036854775807",
    ] {
        let (status, page) = get(&app, &format!("{}?{}", OVERVIEW, query)).await;
        assert_eq!(status, 200, "query {}", query);
        assert_eq!(page, json!([]), "query {}", query);
    }
}
