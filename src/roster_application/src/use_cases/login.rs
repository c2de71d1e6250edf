use roster_core::{
    Account, AccountStore, AccountStoreError, Password, PasswordHasher, PasswordHasherError,
    TokenError, TokenIssuer, Username,
};
use secrecy::Secret;

/// Response from login use case
#[derive(Debug)]
pub struct LoginResponse {
    pub token: String,
    pub account: Account,
}

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown username and wrong password are deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

/// Login use case - verifies credentials and issues a bearer token
pub struct LoginUseCase<'a, S, H, T>
where
    S: AccountStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    account_store: &'a S,
    password_hasher: &'a H,
    token_issuer: &'a T,
}

impl<'a, S, H, T> LoginUseCase<'a, S, H, T>
where
    S: AccountStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    pub fn new(account_store: &'a S, password_hasher: &'a H, token_issuer: &'a T) -> Self {
        Self {
            account_store,
            password_hasher,
            token_issuer,
        }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// A token bound to the account id plus the account itself
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: String,
        password: Secret<String>,
    ) -> Result<LoginResponse, LoginError> {
        let username = Username::try_from(username).map_err(|_| LoginError::InvalidCredentials)?;
        let password = Password::try_from(password).map_err(|_| LoginError::InvalidCredentials)?;

        let Some(account) = self.account_store.find_by_username(&username).await? else {
            // Unknown usernames cost the same hashing work as a wrong password.
            self.password_hasher.hash(password).await?;
            tracing::debug!("login rejected");
            return Err(LoginError::InvalidCredentials);
        };

        let verified = self
            .password_hasher
            .verify(password, account.password_hash().clone())
            .await?;
        if !verified {
            tracing::debug!("login rejected");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(account.id())?;

        Ok(LoginResponse { token, account })
    }
}
