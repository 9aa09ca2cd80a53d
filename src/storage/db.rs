//! Database connection management and migrations

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::info;

/// Database error type
#[derive(Debug)]
pub enum DatabaseError {
    ConnectionFailed(String),
    MigrationFailed(String),
    QueryFailed(String),
}

impl std::fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            DatabaseError::MigrationFailed(msg) => write!(f, "Migration failed: {}", msg),
            DatabaseError::QueryFailed(msg) => write!(f, "Query failed: {}", msg),
        }
    }
}

impl std::error::Error for DatabaseError {}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        DatabaseError::QueryFailed(err.to_string())
    }
}

/// Wrapper around the SQLite connection for the tracker data file
pub struct Database {
    pub conn: Connection,
}

impl Database {
    /// Get the database file path inside the app data directory
    pub fn db_path(data_dir: &Path) -> PathBuf {
        data_dir.join("freelance.db")
    }
}

/// Open or create the tracker database in the given data directory
pub fn open_database(data_dir: &Path) -> Result<Database, DatabaseError> {
    let db_path = Database::db_path(data_dir);

    info!("Opening database at {:?}", db_path);

    let conn = Connection::open(&db_path)
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    conn.execute("PRAGMA foreign_keys = ON", [])
        .map_err(|e| DatabaseError::MigrationFailed(format!("Failed to enable foreign keys: {}", e)))?;

    run_migrations(&conn)?;

    Ok(Database { conn })
}

/// Run database schema migrations
fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current_version: i32 = conn
        .query_row(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    info!("Current schema version: {}", current_version);

    if current_version < 1 {
        info!("Applying migration v1: Initial schema");
        apply_v1_schema(conn)?;
    }

    Ok(())
}

/// Apply the initial v1 schema
fn apply_v1_schema(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(include_str!("schema.sql"))
        .map_err(|e| DatabaseError::MigrationFailed(format!("Failed to apply v1 schema: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_new_database() {
        let dir = tempdir().unwrap();
        let result = open_database(dir.path());
        assert!(result.is_ok());

        let db_path = Database::db_path(dir.path());
        assert!(db_path.exists());
    }

    #[test]
    fn test_schema_version() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();

        let version: i32 = db.conn
            .query_row("SELECT version FROM schema_version", [], |row| row.get(0))
            .unwrap();

        assert_eq!(version, 1);
    }

    #[test]
    fn test_reopen_does_not_rerun_migrations() {
        let dir = tempdir().unwrap();
        drop(open_database(dir.path()).unwrap());
        let db = open_database(dir.path()).unwrap();

        let count: i64 = db.conn
            .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
            .unwrap();

        assert_eq!(count, 1);
    }
}
