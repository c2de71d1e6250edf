use roster_core::{
    AccountStore, AccountStoreError, Password, PasswordHasher, PasswordHasherError, Username,
};
use secrecy::Secret;

/// Error types for change password use case
#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Username, current password and new password are required")]
    MissingFields,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

impl From<AccountStoreError> for ChangePasswordError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            // The account disappeared between lookup and write
            AccountStoreError::AccountNotFound => ChangePasswordError::InvalidCredentials,
            e => ChangePasswordError::AccountStoreError(e),
        }
    }
}

/// Change password use case - re-hashes after proving knowledge of the current password.
///
/// Not routed over HTTP; reachable through [`AccountService`](crate::AccountService) only.
pub struct ChangePasswordUseCase<'a, S, H>
where
    S: AccountStore,
    H: PasswordHasher,
{
    account_store: &'a S,
    password_hasher: &'a H,
}

impl<'a, S, H> ChangePasswordUseCase<'a, S, H>
where
    S: AccountStore,
    H: PasswordHasher,
{
    pub fn new(account_store: &'a S, password_hasher: &'a H) -> Self {
        Self {
            account_store,
            password_hasher,
        }
    }

    #[tracing::instrument(
        name = "ChangePasswordUseCase::execute",
        skip(self, current_password, new_password)
    )]
    pub async fn execute(
        &self,
        username: String,
        current_password: Secret<String>,
        new_password: Secret<String>,
    ) -> Result<(), ChangePasswordError> {
        let username =
            Username::try_from(username).map_err(|_| ChangePasswordError::MissingFields)?;
        let current_password = Password::try_from(current_password)
            .map_err(|_| ChangePasswordError::MissingFields)?;
        let new_password =
            Password::try_from(new_password).map_err(|_| ChangePasswordError::MissingFields)?;

        let account = self
            .account_store
            .find_by_username(&username)
            .await?
            .ok_or(ChangePasswordError::InvalidCredentials)?;

        let verified = self
            .password_hasher
            .verify(current_password, account.password_hash().clone())
            .await?;
        if !verified {
            return Err(ChangePasswordError::InvalidCredentials);
        }

        let password_hash = self.password_hasher.hash(new_password).await?;
        self.account_store
            .set_new_password(account.id(), password_hash)
            .await?;

        Ok(())
    }
}
