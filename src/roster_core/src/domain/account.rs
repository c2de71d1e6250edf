use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{password::PasswordHash, username::Username};

/// Store-assigned account identifier. Ids are never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An account that has not been persisted yet, with creation defaults applied.
#[derive(Debug, Clone)]
pub struct NewAccount {
    username: Username,
    password_hash: PasswordHash,
    display_name: String,
    dark_mode: bool,
}

impl NewAccount {
    /// `display_name` falls back to the username and `dark_mode` to `false`.
    pub fn new(
        username: Username,
        password_hash: PasswordHash,
        display_name: Option<String>,
        dark_mode: Option<bool>,
    ) -> Self {
        let display_name = display_name.unwrap_or_else(|| username.to_string());

        Self {
            username,
            password_hash,
            display_name,
            dark_mode: dark_mode.unwrap_or(false),
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Attach the id assigned by the store.
    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            username: self.username,
            password_hash: self.password_hash,
            display_name: self.display_name,
            dark_mode: self.dark_mode,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    username: Username,
    password_hash: PasswordHash,
    display_name: String,
    dark_mode: bool,
}

impl Account {
    /// Rebuild a persisted account, e.g. from a database row.
    pub fn parse(
        id: AccountId,
        username: Username,
        password_hash: PasswordHash,
        display_name: String,
        dark_mode: bool,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            display_name,
            dark_mode,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn with_settings(self, display_name: String, dark_mode: bool) -> Self {
        Self {
            display_name,
            dark_mode,
            ..self
        }
    }

    pub fn with_password_hash(self, password_hash: PasswordHash) -> Self {
        Self {
            password_hash,
            ..self
        }
    }
}
