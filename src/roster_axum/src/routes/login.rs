use axum::{Json, extract::State, response::IntoResponse};
use roster_application::AccountService;
use roster_core::{AccountStore, PasswordHasher, TokenIssuer};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::credentials;
use crate::ApiError;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginUser {
    pub username: String,
    pub display_name: String,
    pub dark_mode: bool,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S, H, T>(
    State(service): State<AccountService<S, H, T>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: AccountStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let (username, password) = credentials(request.username, request.password);
    let response = service.login(username, password).await?;
    let account = response.account;

    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
        token: response.token,
        user: LoginUser {
            username: account.username().to_string(),
            display_name: account.display_name().to_string(),
            dark_mode: account.dark_mode(),
        },
    }))
}
