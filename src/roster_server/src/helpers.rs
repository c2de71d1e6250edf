use roster_adapters::{
    config::{RosterSettings, settings::DatabaseSettings},
    hashing::Argon2PasswordHasher,
    persistence::{SqliteAccountStore, get_sqlite_pool},
    tokens::JwtTokenIssuer,
};
use roster_application::AccountService;
use secrecy::ExposeSecret;

pub type SqliteAccountService =
    AccountService<SqliteAccountStore, Argon2PasswordHasher, JwtTokenIssuer>;

/// Open the SQLite database and bring its schema up to date.
pub async fn configure_sqlite(
    database: &DatabaseSettings,
) -> Result<SqliteAccountStore, color_eyre::Report> {
    let pool = get_sqlite_pool(database.url.expose_secret()).await?;

    let store = SqliteAccountStore::new(pool);
    store.run_migrations().await?;

    Ok(store)
}

/// Wire the production collaborators together.
pub async fn build_account_service(
    settings: &RosterSettings,
) -> Result<SqliteAccountService, color_eyre::Report> {
    let store = configure_sqlite(&settings.database).await?;

    Ok(AccountService::new(
        store,
        Argon2PasswordHasher::new(),
        JwtTokenIssuer::new(settings.jwt_config()),
    ))
}
