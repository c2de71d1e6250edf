use roster_core::{AccountStore, AccountStoreError, Username};

/// Error types for delete account use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("Username is required")]
    MissingUsername,
    #[error("User not found")]
    AccountNotFound,
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Delete account use case - removes the account permanently
pub struct DeleteAccountUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> DeleteAccountUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    /// Execute the delete account use case
    ///
    /// # Returns
    /// Ok(()) on success, or DeleteAccountError
    #[tracing::instrument(name = "DeleteAccountUseCase::execute", skip(self))]
    pub async fn execute(&self, username: String) -> Result<(), DeleteAccountError> {
        let username =
            Username::try_from(username).map_err(|_| DeleteAccountError::MissingUsername)?;

        if !self.account_store.delete(&username).await? {
            return Err(DeleteAccountError::AccountNotFound);
        }

        tracing::info!("account deleted");
        Ok(())
    }
}
