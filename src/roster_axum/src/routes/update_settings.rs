use axum::{Json, extract::State, response::IntoResponse};
use roster_application::AccountService;
use roster_core::{AccountStore, PasswordHasher, TokenIssuer};
use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Clients send the settings in camelCase; the response echoes them in snake_case.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub dark_mode: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateSettingsResponse {
    pub message: String,
    pub display_name: String,
    pub dark_mode: bool,
}

#[tracing::instrument(name = "Update settings", skip_all)]
pub async fn update_settings<S, H, T>(
    State(service): State<AccountService<S, H, T>>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: AccountStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let account = service
        .update_settings(
            request.username.unwrap_or_default(),
            request.display_name,
            request.dark_mode,
        )
        .await?;

    Ok(Json(UpdateSettingsResponse {
        message: "Settings updated successfully".to_string(),
        display_name: account.display_name().to_string(),
        dark_mode: account.dark_mode(),
    }))
}
