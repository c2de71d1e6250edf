use crate::helpers::TestApp;

#[tokio::test]
async fn root_returns_welcome_message() {
    let app = TestApp::new().await;

    let response = app.get_root().await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Welcome to the API!" }));
}

#[tokio::test]
async fn favicon_is_served_from_assets_dir() {
    let app = TestApp::new().await;

    let response = app.get_favicon().await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(!response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_favicon_returns_404() {
    let app = TestApp::with_assets_dir("/nonexistent-roster-assets".to_string()).await;

    let response = app.get_favicon().await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn cors_allows_only_configured_origins() {
    let app = TestApp::with_allowed_origins(&["http://localhost:3000"]).await;

    let allowed = app
        .http_client
        .get(format!("{}/", &app.address))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    let denied = app
        .http_client
        .get(format!("{}/", &app.address))
        .header("Origin", "http://evil.example")
        .send()
        .await
        .unwrap();

    assert_eq!(
        allowed.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}
