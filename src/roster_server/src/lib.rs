pub mod helpers;
pub mod roster_server;
pub mod tracing;

pub use helpers::{SqliteAccountService, build_account_service, configure_sqlite};
pub use roster_server::RosterServer;
