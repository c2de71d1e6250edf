//! # Roster - account service
//!
//! Facade crate re-exporting the public APIs of the roster components: username/password
//! accounts with per-user display settings, Argon2id hashing and JWT bearer tokens.
//!
//! ## Structure
//!
//! - **Domain types**: `Account`, `Username`, `Password`, ...
//! - **Ports**: `AccountStore`, `PasswordHasher`, `TokenIssuer`
//! - **Use cases**: `SignupUseCase`, `LoginUseCase`, ... behind `AccountService`
//! - **Adapters**: `SqliteAccountStore`, `InMemoryAccountStore`, `Argon2PasswordHasher`,
//!   `JwtTokenIssuer`, settings
//! - **Server**: `RosterServer`, the axum router with every route wired

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use roster_core::*;
}

pub use roster_core::{
    Account, AccountId, NewAccount, Password, PasswordError, PasswordHash, Username,
    UsernameError,
};

// ============================================================================
// Ports
// ============================================================================

pub use roster_core::{
    AccountStore, AccountStoreError, PasswordHasher, PasswordHasherError, TokenError,
    TokenIssuer,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use roster_application::use_cases::*;
}

pub use roster_application::AccountService;

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers and error mapping
    pub mod http {
        pub use roster_axum::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use roster_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use roster_adapters::hashing::*;
    }

    /// JWT bearer tokens
    pub mod tokens {
        pub use roster_adapters::tokens::*;
    }

    /// Configuration
    pub mod config {
        pub use roster_adapters::config::*;
    }
}

pub use roster_adapters::{
    config::RosterSettings,
    hashing::Argon2PasswordHasher,
    persistence::{InMemoryAccountStore, SqliteAccountStore},
    tokens::{JwtConfig, JwtTokenIssuer},
};

// ============================================================================
// Server (Main Entry Point)
// ============================================================================

pub use roster_server::{
    RosterServer, SqliteAccountService, build_account_service, configure_sqlite,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use http;
pub use tokio;
