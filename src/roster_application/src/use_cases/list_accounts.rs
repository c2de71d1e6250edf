use roster_core::{Account, AccountStore, AccountStoreError};

#[derive(Debug, thiserror::Error)]
pub enum ListAccountsError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// List accounts use case - full scan of the store, no pagination.
///
/// The returned accounts carry their password hashes and no caller identity is checked.
/// Both are known exposures kept for compatibility with existing clients of `/users`.
pub struct ListAccountsUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> ListAccountsUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    #[tracing::instrument(name = "ListAccountsUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<Account>, ListAccountsError> {
        Ok(self.account_store.list_all().await?)
    }
}
