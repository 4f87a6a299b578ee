mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, issue_token, setup_test_app};

fn create_request(token: &str, address: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/tokens")
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Dogewife",
                "symbol": "DWIF",
                "address": address,
                "description": "to the moon"
            }))
            .unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_create_token_requires_auth() {
    let app = setup_test_app(false);

    let request = Request::builder()
        .method("POST")
        .uri("/api/tokens")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_fetch_token() {
    let app = setup_test_app(false);
    let token = issue_token("0xcreator", "user", 3600);

    let response = app
        .clone()
        .oneshot(create_request(&token, "0xc0ffee"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["creator"], json!("0xcreator"));
    assert_eq!(created["status"], json!("pending"));
    let id = created["id"].as_str().unwrap().to_string();

    let request = Request::builder()
        .uri(format!("/api/tokens/{}", id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["address"], json!("0xc0ffee"));
}

#[tokio::test]
async fn test_list_tokens_is_public() {
    let app = setup_test_app(false);
    let token = issue_token("0xcreator", "user", 3600);

    app.clone()
        .oneshot(create_request(&token, "0xc0ffee"))
        .await
        .unwrap();

    let request = Request::builder()
        .uri("/api/tokens")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_token_rejects_non_creator() {
    let app = setup_test_app(false);
    let creator = issue_token("0xcreator", "user", 3600);
    let stranger = issue_token("0xstranger", "user", 3600);

    let response = app
        .clone()
        .oneshot(create_request(&creator, "0xc0ffee"))
        .await
        .unwrap();
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/tokens/{}", id))
        .header("authorization", format!("Bearer {}", stranger))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_token_allows_admin() {
    let app = setup_test_app(false);
    let creator = issue_token("0xcreator", "user", 3600);
    let admin = issue_token("0xadmin", "admin", 3600);

    let response = app
        .clone()
        .oneshot(create_request(&creator, "0xc0ffee"))
        .await
        .unwrap();
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/tokens/{}", id))
        .header("authorization", format!("Bearer {}", admin))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_admin_status_update_flows_to_stats() {
    let app = setup_test_app(false);
    let creator = issue_token("0xcreator", "user", 3600);
    let admin = issue_token("0xadmin", "admin", 3600);

    let response = app
        .clone()
        .oneshot(create_request(&creator, "0xc0ffee"))
        .await
        .unwrap();
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/admin/tokens/{}/status", id))
        .header("authorization", format!("Bearer {}", admin))
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&json!({"status": "active"})).unwrap()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], json!("active"));

    let request = Request::builder()
        .uri("/api/analytics/overview")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let overview = body_json(response).await;
    assert_eq!(overview["active_tokens"], json!(1));
}

#[tokio::test]
async fn test_token_stats_count_views() {
    let app = setup_test_app(false);
    let creator = issue_token("0xcreator", "user", 3600);

    let response = app
        .clone()
        .oneshot(create_request(&creator, "0xc0ffee"))
        .await
        .unwrap();
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    for expected_views in 1..=2 {
        let request = Request::builder()
            .uri(format!("/api/analytics/tokens/{}", id))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let stats = body_json(response).await;
        assert_eq!(stats["views"], json!(expected_views));
    }
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_test_app(false);

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("ok"));
}
