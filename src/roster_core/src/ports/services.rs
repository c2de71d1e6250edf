use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::AccountId,
    password::{Password, PasswordHash},
};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Unexpected hashing error: {0}")]
    UnexpectedError(String),
}

/// One-way, salted password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash with a freshly generated salt; equal inputs give different outputs.
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError>;

    /// `Ok(false)` on mismatch. Errors are reserved for internal failures.
    async fn verify(
        &self,
        candidate: Password,
        expected: PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Unexpected token error: {0}")]
    UnexpectedError(String),
}

/// Issues and validates signed bearer tokens bound to an account.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, account_id: AccountId) -> Result<String, TokenError>;

    fn validate(&self, token: &str) -> Result<AccountId, TokenError>;
}
