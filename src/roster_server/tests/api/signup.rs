use crate::helpers::{TestApp, get_random_username};

#[tokio::test]
async fn should_return_201_if_valid_input() {
    let app = TestApp::new().await;

    let response = app
        .post_signup(&serde_json::json!({
            "username": get_random_username(),
            "password": "pw1",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "message": "User created successfully" })
    );
}

#[tokio::test]
async fn should_return_400_if_fields_are_missing() {
    let app = TestApp::new().await;
    let username = get_random_username();

    let test_cases = [
        serde_json::json!({ "password": "pw1" }),
        serde_json::json!({ "username": username }),
        serde_json::json!({ "username": "", "password": "pw1" }),
        serde_json::json!({ "username": username, "password": "" }),
        serde_json::json!({ "username": null, "password": "pw1" }),
        serde_json::json!({}),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_signup(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "message": "Username and password are required" })
        );
    }
}

#[tokio::test]
async fn should_return_409_if_username_already_exists() {
    let app = TestApp::new().await;
    let username = get_random_username();

    app.signup(&username, "pw1").await;

    let response = app
        .post_signup(&serde_json::json!({
            "username": username,
            "password": "pw2",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "message": "User already exists" }));

    // The original credentials are untouched
    app.login(&username, "pw1").await;
    let response = app
        .post_login(&serde_json::json!({ "username": username, "password": "pw2" }))
        .await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_apply_display_name_and_dark_mode_defaults() {
    let app = TestApp::new().await;
    let username = get_random_username();

    app.signup(&username, "pw1").await;

    let response = app
        .post_login(&serde_json::json!({ "username": username, "password": "pw1" }))
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"]["display_name"], username.as_str());
    assert_eq!(body["user"]["dark_mode"], false);
}

#[tokio::test]
async fn should_keep_supplied_display_name_and_dark_mode() {
    let app = TestApp::new().await;
    let username = get_random_username();

    let response = app
        .post_signup(&serde_json::json!({
            "username": username,
            "password": "pw1",
            "display_name": "Alice A.",
            "dark_mode": true,
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app
        .post_login(&serde_json::json!({ "username": username, "password": "pw1" }))
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"]["display_name"], "Alice A.");
    assert_eq!(body["user"]["dark_mode"], true);
}

#[tokio::test]
async fn sqlite_store_rejects_duplicate_signup() {
    let app = TestApp::with_sqlite().await;

    app.signup("alice", "pw1").await;

    let response = app
        .post_signup(&serde_json::json!({ "username": "alice", "password": "pw2" }))
        .await;
    assert_eq!(response.status().as_u16(), 409);

    app.login("alice", "pw1").await;
}
