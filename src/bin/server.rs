use std::sync::Arc;

use lotto::env_config::ServerConfig;
use lotto::server::{create_router, AppContext};
use lotto::storage::HistoryStore;

#[tokio::main]
async fn main() {
    println!("Starting lotto API server...");

    let config = ServerConfig::from_env();
    let history_dir = match config.enter_base_path() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to enter {}: {}", config.base_path.display(), e);
            std::process::exit(1);
        }
    };
    let history = HistoryStore::new(&history_dir);
    println!(
        "History: {} ({} entries, recording {})",
        history.path().display(),
        history.list().len(),
        if config.record_history { "on" } else { "off" }
    );
    if let Some(seed) = config.seed {
        println!("Using fixed RNG seed {}", seed);
    }

    let ctx = Arc::new(AppContext::new(history, config.record_history, config.seed));
    let app = create_router(ctx);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind port {}: {}", config.port, e);
            std::process::exit(1);
        }
    };
    println!(
        "Server is running on port {}. Press Ctrl+C to stop.",
        config.port
    );
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }

    println!("\nStopping server...");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("Failed to install Ctrl+C handler: {}", e);
    }
}
