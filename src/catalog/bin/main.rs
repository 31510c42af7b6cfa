use std::sync::Arc;
use tracing::{error, info};
use bms::catalog::controller::build_router;
use bms::catalog::factory;
use bms::core::controller::AppState;
use bms::core::domain::Configuration;
use bms::utils::logs::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env()?;
    let catalog = match factory::create_catalog_service(&config).await {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("failed to load catalog from {}: {}", config.data_file.display(), err);
            return Err(err.into());
        }
    };

    let addr = config.addr;
    let app = build_router(AppState::new(config, Arc::from(catalog)));

    info!("Listening on {}.", addr);
    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
