use crate::helpers::{TestApp, get_random_username};

#[tokio::test]
async fn should_return_200_with_token_and_user() {
    let app = TestApp::new().await;
    let username = get_random_username();
    app.signup(&username, "pw1").await;

    let response = app
        .post_login(&serde_json::json!({ "username": username, "password": "pw1" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Login successful!");
    assert!(body["token"].as_str().is_some_and(|token| !token.is_empty()));
    assert_eq!(
        body["user"],
        serde_json::json!({
            "username": username,
            "display_name": username,
            "dark_mode": false,
        })
    );
}

#[tokio::test]
async fn wrong_password_and_unknown_user_are_indistinguishable() {
    let app = TestApp::new().await;
    let username = get_random_username();
    app.signup(&username, "pw1").await;

    let wrong_password = app
        .post_login(&serde_json::json!({ "username": username, "password": "nope" }))
        .await;
    let unknown_user = app
        .post_login(&serde_json::json!({
            "username": get_random_username(),
            "password": "pw1",
        }))
        .await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_user.status().as_u16(), 401);

    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_user: serde_json::Value = unknown_user.json().await.unwrap();
    assert_eq!(wrong_password, unknown_user);
    assert_eq!(
        wrong_password,
        serde_json::json!({ "error": "Invalid credentials" })
    );
}

#[tokio::test]
async fn missing_fields_are_rejected_as_invalid_credentials() {
    let app = TestApp::new().await;

    let test_cases = [
        serde_json::json!({ "username": get_random_username() }),
        serde_json::json!({ "password": "pw1" }),
        serde_json::json!({}),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_login(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            401,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[tokio::test]
async fn usernames_are_case_sensitive() {
    let app = TestApp::new().await;
    app.signup("CaseSensitive", "pw1").await;

    let response = app
        .post_login(&serde_json::json!({ "username": "casesensitive", "password": "pw1" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}
