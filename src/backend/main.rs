/**
 * ChargeDesk Server Entry Point
 *
 * This is the main entry point for the ChargeDesk backend server.
 * It initializes the Axum HTTP server with the REST API and the
 * WebSocket push channel.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = chargedesk::backend::server::config::ServerConfig::from_env();

    // Create the Axum app
    let app = chargedesk::backend::server::init::create_app(&config);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
