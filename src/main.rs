use std::error::Error;
use std::sync::Arc;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use payroll_engine::repository::JsonFileRepository;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,payroll_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConfigLoader::from_env()?;
    let bind_address = config.config().server.bind_address.clone();
    let repository = JsonFileRepository::new(config.config().data.path.clone());

    info!(
        data = %repository.path().display(),
        time_source = ?config.payroll().time_source,
        overnight_policy = ?config.payroll().overnight_policy,
        "Starting payroll engine"
    );

    let app = create_router(AppState::new(config, Arc::new(repository)));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
