use color_eyre::eyre::Result;
use roster_adapters::config::RosterSettings;
use roster_server::{RosterServer, build_account_service, tracing::init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = RosterSettings::load()?;

    let account_service = build_account_service(&settings).await?;
    let server = RosterServer::new(account_service, settings.application.assets_dir.clone());

    let allowed_origins = settings.auth.allowed_origins.clone();
    let allowed_origins = (!allowed_origins.is_empty()).then_some(allowed_origins);

    let listener = TcpListener::bind(&settings.application.address).await?;
    tracing::info!("Starting roster...");

    server.run_standalone(listener, allowed_origins).await?;

    Ok(())
}
