use roster_core::{Account, AccountId, AccountStore, PasswordHasher, TokenError, TokenIssuer};
use secrecy::Secret;

use crate::use_cases::{
    ChangePasswordError, ChangePasswordUseCase, DeleteAccountError, DeleteAccountUseCase,
    ListAccountsError, ListAccountsUseCase, LoginError, LoginResponse, LoginUseCase, SignupError,
    SignupUseCase, UpdateSettingsError, UpdateSettingsUseCase,
};

/// Entry point for every account operation.
///
/// The store, hasher and token issuer are handed in at construction, so tests can swap
/// any of them for a double. Cloning is cheap as long as the collaborators are: stores
/// share their state through an `Arc` or a connection pool.
#[derive(Clone)]
pub struct AccountService<S, H, T> {
    account_store: S,
    password_hasher: H,
    token_issuer: T,
}

impl<S, H, T> AccountService<S, H, T>
where
    S: AccountStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    pub fn new(account_store: S, password_hasher: H, token_issuer: T) -> Self {
        Self {
            account_store,
            password_hasher,
            token_issuer,
        }
    }

    pub async fn signup(
        &self,
        username: String,
        password: Secret<String>,
        display_name: Option<String>,
        dark_mode: Option<bool>,
    ) -> Result<Account, SignupError> {
        SignupUseCase::new(&self.account_store, &self.password_hasher)
            .execute(username, password, display_name, dark_mode)
            .await
    }

    pub async fn login(
        &self,
        username: String,
        password: Secret<String>,
    ) -> Result<LoginResponse, LoginError> {
        LoginUseCase::new(
            &self.account_store,
            &self.password_hasher,
            &self.token_issuer,
        )
        .execute(username, password)
        .await
    }

    pub async fn list_accounts(&self) -> Result<Vec<Account>, ListAccountsError> {
        ListAccountsUseCase::new(&self.account_store).execute().await
    }

    pub async fn update_settings(
        &self,
        username: String,
        display_name: Option<String>,
        dark_mode: Option<bool>,
    ) -> Result<Account, UpdateSettingsError> {
        UpdateSettingsUseCase::new(&self.account_store)
            .execute(username, display_name, dark_mode)
            .await
    }

    pub async fn delete_account(&self, username: String) -> Result<(), DeleteAccountError> {
        DeleteAccountUseCase::new(&self.account_store)
            .execute(username)
            .await
    }

    pub async fn change_password(
        &self,
        username: String,
        current_password: Secret<String>,
        new_password: Secret<String>,
    ) -> Result<(), ChangePasswordError> {
        ChangePasswordUseCase::new(&self.account_store, &self.password_hasher)
            .execute(username, current_password, new_password)
            .await
    }

    /// Resolve a bearer token back to the account it was issued for.
    pub fn validate_token(&self, token: &str) -> Result<AccountId, TokenError> {
        self.token_issuer.validate(token)
    }
}
