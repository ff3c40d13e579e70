// tests/common/mod.rs

#![allow(dead_code)]

use std::path::Path;
use std::str::FromStr;

use mcq_backend::{config::Config, db, routes, state::AppState};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tempfile::TempDir;

/// A SQLite file in its own temp directory, removed (with WAL/SHM files) on drop.
pub struct TempDb {
    _dir: TempDir,
    pub url: String,
}

impl TempDb {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("mcq-test")
            .tempdir()
            .expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("mcq.db").display());
        Self { _dir: dir, url }
    }

    pub fn dir(&self) -> &Path {
        self._dir.path()
    }
}

/// Connects without running schema evolution, for seeding legacy layouts.
pub async fn connect_raw(database_url: &str) -> SqlitePool {
    let options = SqliteConnectOptions::from_str(database_url)
        .expect("Invalid test database URL")
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to open test database")
}

/// Opens a store the same way the server does. Keep the `TempDb` alive while using the pool.
pub async fn open_db() -> (TempDb, SqlitePool) {
    let temp = TempDb::new();
    let pool = db::open(&temp.url, 5)
        .await
        .expect("Failed to open and evolve test database");
    (temp, pool)
}

pub struct TestApp {
    /// Base URL, e.g. "http://127.0.0.1:12345".
    pub address: String,
    pub pool: SqlitePool,
    _db: TempDb,
}

pub fn test_config(database_url: String) -> Config {
    Config {
        database_url,
        rust_log: "error".to_string(),
        ..Config::default()
    }
}

/// Spawns the app on a random port backed by its own database file.
pub async fn spawn_app() -> TestApp {
    let temp = TempDb::new();
    let config = test_config(temp.url.clone());

    let pool = db::open(&config.database_url, config.database_max_connections)
        .await
        .expect("Failed to open test database");

    let state = AppState {
        pool: pool.clone(),
        config,
    };
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address,
        pool,
        _db: temp,
    }
}
