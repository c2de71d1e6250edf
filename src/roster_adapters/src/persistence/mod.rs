pub mod in_memory_account_store;
pub mod sqlite_account_store;

pub use in_memory_account_store::InMemoryAccountStore;
pub use sqlite_account_store::{SqliteAccountStore, get_sqlite_pool};
