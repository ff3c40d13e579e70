// src/db/mod.rs

//! Persistence layer: the shared SQLite pool, schema evolution and
//! list/create queries for questions, tests and results.

pub mod question;
pub mod result;
pub mod schema;
pub mod test_paper;

use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

/// Opens the store (creating the file if missing) and brings its schema up to date.
///
/// An in-memory URL gets a single connection that is never recycled, since
/// the database only lives as long as the connection holding it.
///
/// Any error here is fatal to startup.
pub async fn open(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool_options = if is_in_memory(database_url) {
        if max_connections > 1 {
            tracing::warn!(
                "In-memory database requested; using 1 connection instead of {}",
                max_connections
            );
        }
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options.connect_with(options).await?;

    schema::evolve(&pool).await?;

    Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Current time as stored in timestamp columns.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://:memory:"));
        assert!(is_in_memory("sqlite://file:mcq?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://mcq.db"));
    }

    #[test]
    fn timestamps_are_rfc3339_utc() {
        let ts = now_timestamp();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
