use anyhow::Context;

use stockcast_datasets::DatasetStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockcast_observability::init();

    let data_dir = std::env::var("STOCKCAST_DATA_DIR").unwrap_or_else(|_| {
        tracing::warn!("STOCKCAST_DATA_DIR not set; using ./data");
        "./data".to_string()
    });
    let addr = std::env::var("STOCKCAST_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = stockcast_api::app::build_app(DatasetStore::new(data_dir));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
