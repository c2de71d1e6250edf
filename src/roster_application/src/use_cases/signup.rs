use roster_core::{
    Account, AccountStore, AccountStoreError, NewAccount, Password, PasswordHasher,
    PasswordHasherError, Username,
};
use secrecy::Secret;

/// Error types specific to signup use case
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("Username and password are required")]
    MissingFields,
    #[error("User already exists")]
    UsernameTaken,
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

impl From<AccountStoreError> for SignupError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::UsernameTaken => SignupError::UsernameTaken,
            e => SignupError::AccountStoreError(e),
        }
    }
}

/// Signup use case - handles account registration
pub struct SignupUseCase<'a, S, H>
where
    S: AccountStore,
    H: PasswordHasher,
{
    account_store: &'a S,
    password_hasher: &'a H,
}

impl<'a, S, H> SignupUseCase<'a, S, H>
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

    /// Execute the signup use case
    ///
    /// # Arguments
    /// * `username` - Requested username, must be non-empty
    /// * `password` - Plaintext password, must be non-empty
    /// * `display_name` - Defaults to the username
    /// * `dark_mode` - Defaults to `false`
    ///
    /// # Returns
    /// The created account, or SignupError if a field is missing or the username is taken
    #[tracing::instrument(name = "SignupUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: String,
        password: Secret<String>,
        display_name: Option<String>,
        dark_mode: Option<bool>,
    ) -> Result<Account, SignupError> {
        let username = Username::try_from(username).map_err(|_| SignupError::MissingFields)?;
        let password = Password::try_from(password).map_err(|_| SignupError::MissingFields)?;

        // Skip the expensive hash when the name is obviously taken; `create` stays authoritative
        if self.account_store.find_by_username(&username).await?.is_some() {
            return Err(SignupError::UsernameTaken);
        }

        let password_hash = self.password_hasher.hash(password).await?;
        let account = NewAccount::new(username, password_hash, display_name, dark_mode);

        let account = self.account_store.create(account).await?;
        tracing::info!(account_id = %account.id(), "account created");

        Ok(account)
    }
}
