//! In-process doubles for the ports, shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use roster_core::{
    Account, AccountId, AccountStore, AccountStoreError, NewAccount, Password, PasswordHash,
    PasswordHasher, PasswordHasherError, TokenError, TokenIssuer, Username,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

#[derive(Default)]
struct Accounts {
    by_username: HashMap<String, Account>,
    next_id: i64,
}

#[derive(Default, Clone)]
pub struct MockAccountStore {
    accounts: Arc<RwLock<Accounts>>,
}

impl MockAccountStore {
    pub async fn get(&self, username: &str) -> Option<Account> {
        self.accounts.read().await.by_username.get(username).cloned()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.by_username.len()
    }

    async fn modify(
        &self,
        id: AccountId,
        apply: impl FnOnce(Account) -> Account,
    ) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .by_username
            .values_mut()
            .find(|stored| stored.id() == id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        *stored = apply(stored.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl AccountStore for MockAccountStore {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError> {
        Ok(self.get(username.as_str()).await)
    }

    async fn create(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.by_username.contains_key(account.username().as_str()) {
            return Err(AccountStoreError::UsernameTaken);
        }
        accounts.next_id += 1;
        let account = account.into_account(AccountId::new(accounts.next_id));
        accounts
            .by_username
            .insert(account.username().to_string(), account.clone());
        Ok(account)
    }

    async fn update_settings(
        &self,
        id: AccountId,
        display_name: &str,
        dark_mode: bool,
    ) -> Result<(), AccountStoreError> {
        self.modify(id, |account| account.with_settings(display_name.to_string(), dark_mode))
            .await
    }

    async fn set_new_password(
        &self,
        id: AccountId,
        password_hash: PasswordHash,
    ) -> Result<(), AccountStoreError> {
        self.modify(id, |account| account.with_password_hash(password_hash)).await
    }

    async fn delete(&self, username: &Username) -> Result<bool, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.by_username.remove(username.as_str()).is_some())
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        let mut all: Vec<Account> = accounts.by_username.values().cloned().collect();
        all.sort_by_key(|account| account.id());
        Ok(all)
    }
}

/// Stores `fake$<salt>$<password>` so tests can tell salted hashes apart cheaply.
#[derive(Default, Clone)]
pub struct FakePasswordHasher {
    salt: Arc<AtomicU64>,
    calls: Arc<AtomicU64>,
}

impl FakePasswordHasher {
    /// Number of `hash` plus `verify` calls so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let salt = self.salt.fetch_add(1, Ordering::SeqCst);
        let phc = format!("fake${salt}${}", password.as_ref().expose_secret());
        Ok(PasswordHash::new(Secret::from(phc)))
    }

    async fn verify(
        &self,
        candidate: Password,
        expected: PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let stored = expected.as_ref().expose_secret();
        let matches = stored
            .splitn(3, '$')
            .nth(2)
            .is_some_and(|plain| plain == candidate.as_ref().expose_secret());
        Ok(matches)
    }
}

#[derive(Default, Clone)]
pub struct FakeTokenIssuer;

impl TokenIssuer for FakeTokenIssuer {
    fn issue(&self, account_id: AccountId) -> Result<String, TokenError> {
        Ok(format!("token-{account_id}"))
    }

    fn validate(&self, token: &str) -> Result<AccountId, TokenError> {
        token
            .strip_prefix("token-")
            .and_then(|id| id.parse().ok())
            .map(AccountId::new)
            .ok_or(TokenError::InvalidToken)
    }
}

pub fn secret(value: &str) -> Secret<String> {
    Secret::from(value.to_string())
}

/// Seed `store` with an account whose password is `password`.
pub async fn seed_account(
    store: &MockAccountStore,
    hasher: &FakePasswordHasher,
    username: &str,
    password: &str,
) -> Account {
    let password = Password::try_from(secret(password)).unwrap();
    let hash = hasher.hash(password).await.unwrap();
    let username = Username::try_from(username).unwrap();
    store
        .create(NewAccount::new(username, hash, None, None))
        .await
        .unwrap()
}
