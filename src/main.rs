use coach_thinking::config::ServerConfig;
use coach_thinking::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env();

    eprintln!("🧠 Coach Thinking v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Health check: http://localhost:{}/", config.port);
    eprintln!(
        "   Tools endpoint: http://localhost:{}/tools/sequentialthinking_tools\n",
        config.port
    );

    let app = server::routes();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Sequential thinking server started");
    axum::serve(listener, app).await?;

    Ok(())
}
