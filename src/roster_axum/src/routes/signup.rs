use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use roster_application::AccountService;
use roster_core::{AccountStore, PasswordHasher, TokenIssuer};
use secrecy::Secret;
use serde::Deserialize;
use serde_json::json;

use super::credentials;
use crate::ApiError;

#[derive(Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
    pub display_name: Option<String>,
    pub dark_mode: Option<bool>,
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<S, H, T>(
    State(service): State<AccountService<S, H, T>>,
    Json(request): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: AccountStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let (username, password) = credentials(request.username, request.password);

    service
        .signup(username, password, request.display_name, request.dark_mode)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully" })),
    ))
}
