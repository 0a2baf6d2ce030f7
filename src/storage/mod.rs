use anyhow::{Context as _, Result};
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use std::{path::Path, str::FromStr};
use tracing::info;

/// Database filename inside the data directory. Fixed — only the directory
/// is configurable.
pub const DB_FILE: &str = "tasks.db";

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Open (or create) the task database inside `data_dir`.
    /// WAL journal mode, NORMAL synchronous.
    pub async fn open(data_dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .with_context(|| format!("create data directory {}", data_dir.display()))?;
        let db_path = data_dir.join(DB_FILE);
        let opts =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", db_path.display()))?
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .create_if_missing(true);

        let pool = SqlitePool::connect_with(opts).await?;
        info!(db = %db_path.display(), "database open");
        Ok(Self { pool })
    }

    /// Create the `tasks` table if it does not exist yet.
    ///
    /// Idempotent; called once at startup, before the server accepts
    /// requests. AUTOINCREMENT keeps ids monotonically increasing — the id of
    /// a deleted row is never handed out again.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tasks (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT    NOT NULL,
                completed   INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&self.pool)
        .await
        .context("create tasks table")?;
        Ok(())
    }

    /// Return a clone of the connection pool (cheap — Arc-backed).
    /// Used to create the TaskStore that shares the same SQLite connection.
    pub fn pool(&self) -> SqlitePool {
        self.pool.clone()
    }
}
