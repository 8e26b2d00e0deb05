use std::sync::{Arc, OnceLock};

use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};
use uuid::Uuid;

use glowcheck_api::application::http::server::http_server;
use glowcheck_api::args::Args;

// The router installs a process-global metrics recorder, which panics if built
// twice in one test binary, so all tests share a single server. Tests stay
// isolated through unique user ids.
fn test_server() -> &'static TestServer {
    static SERVER: OnceLock<TestServer> = OnceLock::new();
    SERVER.get_or_init(|| {
        let args = Arc::new(Args::parse_from(["glowcheck-api"]));
        let state = http_server::state(args).expect("state");
        let router = http_server::router(state).expect("router");
        TestServer::new(router).expect("test server")
    })
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn analyze_returns_findings_and_tally() {
    let server = test_server();
    let user_id = Uuid::new_v4();

    let response = server
        .post(&format!("/users/{user_id}/analysis"))
        .json(&json!({
            "ingredients": "Niacinamide, Coconut Oil, Unknownium",
            "category": "skin"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let findings = body["data"]["findings"].as_array().expect("findings");
    assert_eq!(findings.len(), 3);
    assert_eq!(findings[0]["name"], "Niacinamide");
    assert_eq!(findings[0]["is_safe"], true);
    // Coconut Oil is flagged for the skin category.
    assert_eq!(findings[1]["is_safe"], false);
    assert_eq!(findings[2]["purpose"], json!(["unknown"]));

    let tally = &body["data"]["tally"];
    assert_eq!(tally["unknown"], 1);
    assert_eq!(
        tally["safe"].as_u64().unwrap()
            + tally["caution"].as_u64().unwrap()
            + tally["unknown"].as_u64().unwrap(),
        3
    );
}

#[tokio::test]
async fn analyze_rejects_empty_ingredient_list() {
    let server = test_server();
    let user_id = Uuid::new_v4();

    let response = server
        .post(&format!("/users/{user_id}/analysis"))
        .json(&json!({
            "ingredients": "",
            "category": "skin"
        }))
        .await;

    response.assert_status_unprocessable_entity();
}

#[tokio::test]
async fn recommendations_respect_query_filters() {
    let server = test_server();
    let user_id = Uuid::new_v4();

    let response = server
        .get(&format!("/users/{user_id}/recommendations"))
        .add_query_param("product_type", "shampoo")
        .add_query_param("concern", "dandruff")
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let products = body["data"].as_array().expect("products");
    assert!(!products.is_empty());
    assert!(products.len() <= 5);
    assert!(
        products
            .iter()
            .all(|p| p["concerns"].as_array().unwrap().contains(&json!("dandruff")))
    );
}

#[tokio::test]
async fn profile_round_trips_through_put_and_get() {
    let server = test_server();
    let user_id = Uuid::new_v4();

    let missing = server.get(&format!("/users/{user_id}/profile")).await;
    missing.assert_status_not_found();

    let put = server
        .put(&format!("/users/{user_id}/profile"))
        .json(&json!({
            "skin_type": "sensitive",
            "hair_type": "curly"
        }))
        .await;
    put.assert_status_ok();

    let get = server.get(&format!("/users/{user_id}/profile")).await;
    get.assert_status_ok();
    let body = get.json::<Value>();
    assert_eq!(body["data"]["skin_type"], "sensitive");
    assert_eq!(body["data"]["hair_type"], "curly");
}

#[tokio::test]
async fn stored_profile_changes_analysis_verdict() {
    let server = test_server();
    let user_id = Uuid::new_v4();

    server
        .put(&format!("/users/{user_id}/profile"))
        .json(&json!({
            "skin_type": "sensitive",
            "hair_type": "normal"
        }))
        .await
        .assert_status_ok();

    let response = server
        .post(&format!("/users/{user_id}/analysis"))
        .json(&json!({
            "ingredients": "Retinol",
            "category": "skin"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["findings"][0]["is_safe"], false);
    assert_eq!(body["data"]["tally"]["caution"], 1);
}

#[tokio::test]
async fn saved_analyses_can_be_created_listed_and_deleted() {
    let server = test_server();
    let user_id = Uuid::new_v4();

    let analysis = server
        .post(&format!("/users/{user_id}/analysis"))
        .json(&json!({
            "ingredients": "Niacinamide",
            "category": "skin"
        }))
        .await
        .json::<Value>();

    let saved = server
        .post(&format!("/users/{user_id}/analysis/saved"))
        .json(&json!({
            "product_name": "My Serum",
            "category": "skin",
            "raw_ingredients": "Niacinamide",
            "result": analysis["data"]
        }))
        .await;
    saved.assert_status(axum::http::StatusCode::CREATED);
    let analysis_id = saved.json::<Value>()["data"]["id"]
        .as_str()
        .expect("id")
        .to_string();

    let listed = server
        .get(&format!("/users/{user_id}/analysis/saved"))
        .await;
    listed.assert_status_ok();
    assert_eq!(listed.json::<Value>()["data"].as_array().unwrap().len(), 1);

    server
        .delete(&format!("/users/{user_id}/analysis/saved/{analysis_id}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    let fetched = server
        .get(&format!("/users/{user_id}/analysis/saved/{analysis_id}"))
        .await;
    fetched.assert_status_not_found();
}
