use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::{DashMap, mapref::entry::Entry};
use roster_core::{
    Account, AccountId, AccountStore, AccountStoreError, NewAccount, PasswordHash, Username,
};

#[derive(Default)]
struct Accounts {
    by_username: DashMap<Username, Account>,
    last_id: AtomicI64,
}

/// Process-local account store.
///
/// Uniqueness rides on the map's entry API, which holds the shard lock for the username
/// while the record is inserted, so two racing creates cannot both win.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<Accounts>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    // The shard lock is held from lookup to write, so concurrent writes to one record
    // apply one after the other.
    fn modify(
        &self,
        id: AccountId,
        apply: impl FnOnce(Account) -> Account,
    ) -> Result<(), AccountStoreError> {
        let mut stored = self
            .accounts
            .by_username
            .iter_mut()
            .find(|entry| entry.value().id() == id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        let updated = apply(stored.value().clone());
        *stored.value_mut() = updated;
        Ok(())
    }
}

#[async_trait::async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError> {
        Ok(self
            .accounts
            .by_username
            .get(username)
            .map(|entry| entry.value().clone()))
    }

    async fn create(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        match self.accounts.by_username.entry(account.username().clone()) {
            Entry::Occupied(_) => Err(AccountStoreError::UsernameTaken),
            Entry::Vacant(entry) => {
                let id = self.accounts.last_id.fetch_add(1, Ordering::SeqCst) + 1;
                let account = account.into_account(AccountId::new(id));
                entry.insert(account.clone());
                Ok(account)
            }
        }
    }

    async fn update_settings(
        &self,
        id: AccountId,
        display_name: &str,
        dark_mode: bool,
    ) -> Result<(), AccountStoreError> {
        self.modify(id, |account| account.with_settings(display_name.to_string(), dark_mode))
    }

    async fn set_new_password(
        &self,
        id: AccountId,
        password_hash: PasswordHash,
    ) -> Result<(), AccountStoreError> {
        self.modify(id, |account| account.with_password_hash(password_hash))
    }

    async fn delete(&self, username: &Username) -> Result<bool, AccountStoreError> {
        Ok(self.accounts.by_username.remove(username).is_some())
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError> {
        let mut accounts: Vec<Account> = self
            .accounts
            .by_username
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by_key(|account| account.id());
        Ok(accounts)
    }
}
