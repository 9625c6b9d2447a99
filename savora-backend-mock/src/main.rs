use savora_backend_mock::{init_tracing, router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment (dotenv, logging)
    dotenv::dotenv().ok();
    init_tracing();

    // Configuration and state
    let config = Config::from_env();
    let state = AppState::initialize(&config)?;

    // HTTP server
    let app = router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = %config.environment, "Savora mock backend listening");

    axum::serve(listener, app).await?;
    Ok(())
}
