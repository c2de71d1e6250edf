use axum::{Json, extract::State, response::IntoResponse};
use roster_application::AccountService;
use roster_core::{Account, AccountStore, PasswordHasher, TokenIssuer};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::ApiError;

/// One entry of `GET /users`.
///
/// `password_hash` is part of the payload because existing clients read it. The route is
/// also unauthenticated. Both are known exposures.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserEntry {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub dark_mode: bool,
    pub password_hash: String,
}

impl From<Account> for UserEntry {
    fn from(account: Account) -> Self {
        Self {
            id: account.id().get(),
            username: account.username().to_string(),
            display_name: account.display_name().to_string(),
            dark_mode: account.dark_mode(),
            password_hash: account.password_hash().as_ref().expose_secret().clone(),
        }
    }
}

#[tracing::instrument(name = "List users", skip_all)]
pub async fn list_users<S, H, T>(
    State(service): State<AccountService<S, H, T>>,
) -> Result<impl IntoResponse, ApiError>
where
    S: AccountStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let users: Vec<UserEntry> = service
        .list_accounts()
        .await?
        .into_iter()
        .map(UserEntry::from)
        .collect();

    Ok(Json(users))
}
