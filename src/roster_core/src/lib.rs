pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountId, NewAccount},
    password::{Password, PasswordError, PasswordHash},
    username::{Username, UsernameError},
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{PasswordHasher, PasswordHasherError, TokenError, TokenIssuer},
};
