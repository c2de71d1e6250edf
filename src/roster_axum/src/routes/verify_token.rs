use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
    typed_header::TypedHeaderRejection,
};
use roster_application::AccountService;
use roster_core::{AccountStore, PasswordHasher, TokenIssuer};
use serde_json::json;

use crate::ApiError;

/// Resolve an `Authorization: Bearer` token to the account id it was issued for.
#[tracing::instrument(name = "Verify token", skip_all)]
pub async fn verify_token<S, H, T>(
    State(service): State<AccountService<S, H, T>>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    S: AccountStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    // A header that is present but not a Bearer credential counts as a bad token.
    let TypedHeader(Authorization(bearer)) = bearer.map_err(|rejection| {
        if rejection.is_missing() {
            ApiError::MissingToken
        } else {
            ApiError::InvalidToken
        }
    })?;

    let account_id = service.validate_token(bearer.token())?;

    Ok(Json(json!({
        "message": "Token is valid",
        "account_id": account_id,
    })))
}
