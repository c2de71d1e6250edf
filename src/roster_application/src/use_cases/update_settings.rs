use roster_core::{Account, AccountStore, AccountStoreError, Username};

/// Error types for update settings use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateSettingsError {
    #[error("Username, displayName and darkMode are required")]
    MissingFields,
    #[error("User not found")]
    AccountNotFound,
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
}

impl From<AccountStoreError> for UpdateSettingsError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::AccountNotFound => UpdateSettingsError::AccountNotFound,
            e => UpdateSettingsError::AccountStoreError(e),
        }
    }
}

/// Update settings use case - sets display name and dark mode together
pub struct UpdateSettingsUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> UpdateSettingsUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    /// Execute the update settings use case
    ///
    /// Both settings must be present; a partial update is rejected rather than merged.
    ///
    /// # Returns
    /// The account as stored after the update
    #[tracing::instrument(name = "UpdateSettingsUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        username: String,
        display_name: Option<String>,
        dark_mode: Option<bool>,
    ) -> Result<Account, UpdateSettingsError> {
        let (Some(display_name), Some(dark_mode)) = (display_name, dark_mode) else {
            return Err(UpdateSettingsError::MissingFields);
        };
        let username =
            Username::try_from(username).map_err(|_| UpdateSettingsError::MissingFields)?;

        let account = self
            .account_store
            .find_by_username(&username)
            .await?
            .ok_or(UpdateSettingsError::AccountNotFound)?;

        self.account_store
            .update_settings(account.id(), &display_name, dark_mode)
            .await?;

        Ok(account.with_settings(display_name, dark_mode))
    }
}
