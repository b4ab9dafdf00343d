use std::sync::Arc;

use budgetd::{
    config::Config,
    http::{routes, AppState},
    storage::{JsonStorage, Store},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    budgetd::init();

    let config = Config::load()?;
    let data_dir = config.resolve_data_dir();
    let storage = JsonStorage::new(data_dir.clone())?;
    let store = Arc::new(Store::open(Box::new(storage))?);
    tracing::info!(data_dir = %data_dir.display(), "record store ready");

    let app = routes::app().with_state(AppState { store });

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
