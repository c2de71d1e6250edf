use axum::{Json, extract::State, response::IntoResponse};
use roster_application::AccountService;
use roster_core::{AccountStore, PasswordHasher, TokenIssuer};
use serde::Deserialize;
use serde_json::json;

use crate::ApiError;

#[derive(Deserialize)]
pub struct DeleteUserRequest {
    pub username: Option<String>,
}

#[tracing::instrument(name = "Delete user", skip_all)]
pub async fn delete_user<S, H, T>(
    State(service): State<AccountService<S, H, T>>,
    Json(request): Json<DeleteUserRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: AccountStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    service.delete_account(request.username.unwrap_or_default()).await?;

    Ok(Json(json!({ "message": "User deleted successfully" })))
}
