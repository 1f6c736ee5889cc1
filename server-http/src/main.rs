use server_http::routes;
use server_http::state::AppState;
use shared::config::Config;
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting AstroLife HTTP Server...");

    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    // Load configuration from environment variables
    let config = Config::from_env();

    // Open the key-value store and wire up services
    let db_path = std::path::Path::new(&config.data_dir).join("astrolife.sled");
    let state = AppState::open(&db_path).expect("Failed to open key-value store");

    // Build router
    let router = routes::build_router(state.clone(), &config.allowed_origins);

    // Start server
    let addr = format!("{}:{}", config.host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("HTTP Server listening on http://{}", addr);
    info!("Try: curl http://{}/health", addr);

    // Graceful shutdown handler
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    // Flush outstanding writes before the process exits
    if let Err(e) = state.store.close() {
        warn!("Failed to flush store on shutdown: {}", e);
    }

    info!("Server shutdown complete");
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}
