use crate::helpers::{TestApp, get_random_username};

#[tokio::test]
async fn should_update_display_name_and_dark_mode() {
    let app = TestApp::new().await;
    let username = get_random_username();
    app.signup(&username, "pw1").await;

    let response = app
        .post_update_settings(&serde_json::json!({
            "username": username,
            "displayName": "Night Owl",
            "darkMode": true,
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Settings updated successfully");
    assert_eq!(body["display_name"], "Night Owl");
    assert_eq!(body["dark_mode"], true);

    let response = app
        .post_login(&serde_json::json!({ "username": username, "password": "pw1" }))
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"]["display_name"], "Night Owl");
    assert_eq!(body["user"]["dark_mode"], true);
}

#[tokio::test]
async fn repeated_update_is_idempotent() {
    let app = TestApp::new().await;
    let username = get_random_username();
    app.signup(&username, "pw1").await;
    let request = serde_json::json!({
        "username": username,
        "displayName": "Same",
        "darkMode": true,
    });

    let first: serde_json::Value = app.post_update_settings(&request).await.json().await.unwrap();
    let users_after_first: serde_json::Value = app.get_users().await.json().await.unwrap();
    let second: serde_json::Value = app.post_update_settings(&request).await.json().await.unwrap();
    let users_after_second: serde_json::Value = app.get_users().await.json().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(users_after_first, users_after_second);
}

#[tokio::test]
async fn should_return_400_if_a_setting_is_missing() {
    let app = TestApp::new().await;
    let username = get_random_username();
    app.signup(&username, "pw1").await;

    let test_cases = [
        serde_json::json!({ "username": username, "displayName": "Al" }),
        serde_json::json!({ "username": username, "darkMode": true }),
        serde_json::json!({ "username": username, "displayName": null, "darkMode": true }),
        serde_json::json!({ "displayName": "Al", "darkMode": true }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_update_settings(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn unknown_user_returns_404_and_leaves_store_unchanged() {
    let app = TestApp::new().await;
    app.signup(&get_random_username(), "pw1").await;
    let before: serde_json::Value = app.get_users().await.json().await.unwrap();

    let response = app
        .post_update_settings(&serde_json::json!({
            "username": "ghost",
            "displayName": "Boo",
            "darkMode": true,
        }))
        .await;

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "message": "User not found" }));

    let after: serde_json::Value = app.get_users().await.json().await.unwrap();
    assert_eq!(before, after);
}
