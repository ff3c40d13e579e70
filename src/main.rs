// src/main.rs

use mcq_backend::config::Config;
use mcq_backend::db;
use mcq_backend::routes;
use mcq_backend::state::AppState;
use mcq_backend::telemetry;

#[tokio::main]
async fn main() {
    // Load configuration from environment (.env is read inside)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let guard = match telemetry::init(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Logging setup failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server failed: {}", e);
        // Flush the file writer before exiting.
        drop(guard);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Open the store and evolve its schema; nothing is served if this fails.
    let pool = db::open(&config.database_url, config.database_max_connections).await?;
    tracing::info!("Database ready: {}", config.database_url);

    let addr = config.bind_addr();
    let state = AppState { pool, config };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
