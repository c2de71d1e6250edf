use std::str::FromStr;

use roster_core::{
    Account, AccountId, AccountStore, AccountStoreError, NewAccount, PasswordHash, Username,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{
    SqlitePool,
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

/// Account store backed by the `accounts` table.
///
/// The `UNIQUE` constraint on `username` makes concurrent duplicate creates fail at the
/// database, and `AUTOINCREMENT` keeps ids from being handed out twice.
#[derive(Clone)]
pub struct SqliteAccountStore {
    pool: SqlitePool,
}

impl SqliteAccountStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteAccountStore { pool }
    }

    /// Apply the bundled schema migrations.
    pub async fn run_migrations(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

/// Create a SQLite connection pool, creating the database file if needed.
///
/// In-memory databases live and die with a single connection, so they get a pool of one
/// that never recycles it.
pub async fn get_sqlite_pool(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    if url.contains(":memory:") {
        return SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    password_hash: String,
    display_name: String,
    dark_mode: bool,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountStoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let username = Username::try_from(row.username)
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        Ok(Account::parse(
            AccountId::new(row.id),
            username,
            PasswordHash::new(Secret::from(row.password_hash)),
            row.display_name,
            row.dark_mode,
        ))
    }
}

fn unexpected(e: sqlx::Error) -> AccountStoreError {
    AccountStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl AccountStore for SqliteAccountStore {
    #[tracing::instrument(name = "Retrieving account from SQLite", skip_all)]
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, username, password_hash, display_name, dark_mode
                FROM accounts
                WHERE username = ?
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        row.map(Account::try_from).transpose()
    }

    #[tracing::instrument(name = "Adding account to SQLite", skip_all)]
    async fn create(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let result = sqlx::query(
            r#"
                INSERT INTO accounts (username, password_hash, display_name, dark_mode)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(account.username().as_str())
        .bind(account.password_hash().as_ref().expose_secret().as_str())
        .bind(account.display_name())
        .bind(account.dark_mode())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountStoreError::UsernameTaken;
                }
            }
            unexpected(e)
        })?;

        Ok(account.into_account(AccountId::new(result.last_insert_rowid())))
    }

    #[tracing::instrument(name = "Updating account settings in SQLite", skip_all)]
    async fn update_settings(
        &self,
        id: AccountId,
        display_name: &str,
        dark_mode: bool,
    ) -> Result<(), AccountStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET display_name = ?, dark_mode = ?
                WHERE id = ?
            "#,
        )
        .bind(display_name)
        .bind(dark_mode)
        .bind(id.get())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::AccountNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Setting new password in SQLite", skip_all)]
    async fn set_new_password(
        &self,
        id: AccountId,
        password_hash: PasswordHash,
    ) -> Result<(), AccountStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET password_hash = ?
                WHERE id = ?
            "#,
        )
        .bind(password_hash.as_ref().expose_secret().as_str())
        .bind(id.get())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::AccountNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Delete account from SQLite", skip_all)]
    async fn delete(&self, username: &Username) -> Result<bool, AccountStoreError> {
        let result = sqlx::query(
            r#"
                DELETE FROM accounts
                WHERE username = ?
            "#,
        )
        .bind(username.as_str())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(name = "Listing accounts from SQLite", skip_all)]
    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, username, password_hash, display_name, dark_mode
                FROM accounts
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        rows.into_iter().map(Account::try_from).collect()
    }
}
