use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, AccountId, NewAccount},
    password::PasswordHash,
    username::Username,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Username already taken")]
    UsernameTaken,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UsernameTaken, Self::UsernameTaken)
                | (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence port owning every [`Account`] record.
///
/// Implementations must make `create` atomic with respect to concurrent creates of the
/// same username: of two racing creates, at most one succeeds.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError>;

    /// Persist a new account and assign its id.
    async fn create(&self, account: NewAccount) -> Result<Account, AccountStoreError>;

    /// Set both display settings of the record with `id`, leaving its password hash alone.
    async fn update_settings(
        &self,
        id: AccountId,
        display_name: &str,
        dark_mode: bool,
    ) -> Result<(), AccountStoreError>;

    /// Replace the password hash of the record with `id`.
    async fn set_new_password(
        &self,
        id: AccountId,
        password_hash: PasswordHash,
    ) -> Result<(), AccountStoreError>;

    /// Returns whether a record was removed.
    async fn delete(&self, username: &Username) -> Result<bool, AccountStoreError>;

    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError>;
}
