// src/db/schema.rs

//! Declarative table layout and the additive schema evolution run at startup.
//!
//! Tables are created with only an `id` column; every other column is added
//! by diffing the declared list against `pragma_table_info`. Nothing is ever
//! dropped, renamed or reordered, so stores written by older versions keep
//! their rows and any extra columns.

use sqlx::{Executor, Sqlite, SqlitePool, Transaction};

/// One declared column of a table.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    /// SQLite type name, also used to cast values on read.
    pub sql_type: &'static str,
    /// Constant default literal. Reads substitute it for NULL.
    /// `None` marks a nullable column that is returned as-is.
    pub default: Option<&'static str>,
}

impl Column {
    const fn with_default(name: &'static str, sql_type: &'static str, default: &'static str) -> Self {
        Self {
            name,
            sql_type,
            default: Some(default),
        }
    }

    const fn nullable(name: &'static str, sql_type: &'static str) -> Self {
        Self {
            name,
            sql_type,
            default: None,
        }
    }

    /// Type and default clause for `ALTER TABLE ... ADD COLUMN`.
    ///
    /// SQLite rejects non-constant defaults (e.g. `CURRENT_TIMESTAMP`) here,
    /// so timestamp columns are nullable and written by the service.
    pub fn definition(&self) -> String {
        match self.default {
            Some(default) => format!("{} DEFAULT {}", self.sql_type, default),
            None => self.sql_type.to_string(),
        }
    }

    /// Expression used in SELECT and RETURNING clauses.
    ///
    /// Values are always cast to the declared type, since rows written by
    /// older versions may hold any storage class in any column.
    pub fn select_expr(&self) -> String {
        match self.default {
            Some(default) => format!(
                "CAST(COALESCE({name}, {default}) AS {ty}) AS {name}",
                name = self.name,
                default = default,
                ty = self.sql_type,
            ),
            None => format!(
                "CAST({name} AS {ty}) AS {name}",
                name = self.name,
                ty = self.sql_type,
            ),
        }
    }
}

/// A table and its expected columns, in the order they are appended.
#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl Table {
    /// `id` followed by every declared column.
    pub fn select_list(&self) -> String {
        std::iter::once("id".to_string())
            .chain(self.columns.iter().map(Column::select_expr))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }

    /// `INSERT` writing every declared column, in order, returning the stored row.
    pub fn insert_sql(&self) -> String {
        let names = self.column_names().collect::<Vec<_>>().join(", ");
        let placeholders = vec!["?"; self.columns.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            self.name,
            names,
            placeholders,
            self.select_list()
        )
    }

    /// Every row, newest first.
    pub fn list_sql(&self) -> String {
        format!("SELECT {} FROM {} ORDER BY id DESC", self.select_list(), self.name)
    }
}

pub static QUESTIONS: Table = Table {
    name: "questions",
    columns: &[
        Column::with_default("subject", "TEXT", "''"),
        Column::with_default("difficulty", "TEXT", "''"),
        Column::with_default("question", "TEXT", "''"),
        Column::with_default("option1", "TEXT", "''"),
        Column::with_default("option2", "TEXT", "''"),
        Column::with_default("option3", "TEXT", "''"),
        Column::with_default("option4", "TEXT", "''"),
        Column::with_default("answer", "INTEGER", "0"),
        Column::nullable("created_at", "TEXT"),
    ],
};

pub static TESTS: Table = Table {
    name: "tests",
    columns: &[
        Column::with_default("title", "TEXT", "''"),
        Column::with_default("subject", "TEXT", "''"),
        Column::with_default("duration", "INTEGER", "0"),
        Column::with_default("questions", "INTEGER", "0"),
        Column::with_default("difficulty", "TEXT", "''"),
        Column::with_default("status", "TEXT", "''"),
        Column::nullable("created_at", "TEXT"),
    ],
};

pub static RESULTS: Table = Table {
    name: "results",
    columns: &[
        Column::with_default("student", "TEXT", "''"),
        Column::with_default("test", "TEXT", "''"),
        Column::with_default("score", "REAL", "0"),
        Column::nullable("data", "TEXT"),
        Column::nullable("date", "TEXT"),
    ],
};

pub static TABLES: [&Table; 3] = [&QUESTIONS, &TESTS, &RESULTS];

/// A column appended by [`evolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedColumn {
    pub table: &'static str,
    pub column: &'static str,
}

/// Brings every table up to its declared shape.
///
/// Runs in a single transaction, so a failure leaves the store untouched.
/// Returns the columns that were added; an up-to-date store yields none.
pub async fn evolve(pool: &SqlitePool) -> Result<Vec<AddedColumn>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut added = Vec::new();

    for table in TABLES {
        added.extend(evolve_table(&mut tx, table).await?);
    }

    tx.commit().await?;

    for column in &added {
        tracing::info!(table = column.table, column = column.column, "Added missing column");
    }

    Ok(added)
}

async fn evolve_table(
    tx: &mut Transaction<'_, Sqlite>,
    table: &Table,
) -> Result<Vec<AddedColumn>, sqlx::Error> {
    let create = format!(
        "CREATE TABLE IF NOT EXISTS {} (id INTEGER PRIMARY KEY AUTOINCREMENT)",
        table.name
    );
    sqlx::query(&create).execute(&mut **tx).await?;

    let mut existing = column_names(&mut **tx, table.name).await?;
    let mut added = Vec::new();

    for column in table.columns {
        // SQLite column names are case-insensitive.
        if existing.iter().any(|name| name.eq_ignore_ascii_case(column.name)) {
            continue;
        }

        let alter = format!(
            "ALTER TABLE {} ADD COLUMN {} {}",
            table.name,
            column.name,
            column.definition()
        );
        sqlx::query(&alter).execute(&mut **tx).await?;

        existing.push(column.name.to_string());
        added.push(AddedColumn {
            table: table.name,
            column: column.name,
        });
    }

    Ok(added)
}

/// Current columns of `table` in declaration order. Empty if the table does not exist.
pub async fn column_names<'e, E>(executor: E, table: &str) -> Result<Vec<String>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_scalar("SELECT name FROM pragma_table_info(?) ORDER BY cid")
        .bind(table)
        .fetch_all(executor)
        .await
}
