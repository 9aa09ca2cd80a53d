//! Time entry repository for the per-project work log

use rusqlite::{params, Connection, Row};
use chrono::NaiveDateTime;

use crate::models::time_entry::TimeEntry;
use super::DatabaseError;

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Repository for TimeEntry operations
pub struct TimeEntryRepo<'a> {
    conn: &'a Connection,
}

impl<'a> TimeEntryRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Get all entries for a project, newest first
    pub fn list_for_project(&self, project_id: i64) -> Result<Vec<TimeEntry>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, project_id, start_time, end_time, hours, description
             FROM time_entries WHERE project_id = ? ORDER BY id DESC",
        )?;

        let rows = stmt.query_map([project_id], row_to_entry)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Get a time entry by id
    pub fn get(&self, id: i64) -> Result<Option<TimeEntry>, DatabaseError> {
        let result = self.conn.query_row(
            "SELECT id, project_id, start_time, end_time, hours, description
             FROM time_entries WHERE id = ?",
            [id],
            row_to_entry,
        );

        match result {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::from(e)),
        }
    }

    /// Insert a new entry, returning its assigned id
    pub fn create(&self, entry: &TimeEntry) -> Result<i64, DatabaseError> {
        self.conn.execute(
            "INSERT INTO time_entries (project_id, start_time, end_time, hours, description)
             VALUES (?, ?, ?, ?, ?)",
            params![
                entry.project_id,
                entry.start_time.map(|t| t.format(TIME_FORMAT).to_string()),
                entry.end_time.map(|t| t.format(TIME_FORMAT).to_string()),
                entry.hours,
                entry.description,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing entry by its id
    pub fn update(&self, entry: &TimeEntry) -> Result<bool, DatabaseError> {
        let count = self.conn.execute(
            "UPDATE time_entries SET project_id = ?, start_time = ?, end_time = ?,
                                     hours = ?, description = ?
             WHERE id = ?",
            params![
                entry.project_id,
                entry.start_time.map(|t| t.format(TIME_FORMAT).to_string()),
                entry.end_time.map(|t| t.format(TIME_FORMAT).to_string()),
                entry.hours,
                entry.description,
                entry.id,
            ],
        )?;
        Ok(count > 0)
    }

    /// Delete a time entry
    pub fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let count = self.conn.execute("DELETE FROM time_entries WHERE id = ?", [id])?;
        Ok(count > 0)
    }

    /// Sum of logged hours for a project.
    ///
    /// This can drift from the project's own `hours_worked` field; metrics
    /// always read the latter, this sum is for display alongside it.
    pub fn logged_hours(&self, project_id: i64) -> Result<f64, DatabaseError> {
        let hours: f64 = self.conn.query_row(
            "SELECT COALESCE(SUM(hours), 0) FROM time_entries WHERE project_id = ?",
            [project_id],
            |row| row.get(0),
        )?;
        Ok(hours)
    }
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<TimeEntry> {
    let start_time: Option<String> = row.get(2)?;
    let end_time: Option<String> = row.get(3)?;

    Ok(TimeEntry {
        id: row.get(0)?,
        project_id: row.get(1)?,
        start_time: start_time.and_then(|s| NaiveDateTime::parse_from_str(&s, TIME_FORMAT).ok()),
        end_time: end_time.and_then(|s| NaiveDateTime::parse_from_str(&s, TIME_FORMAT).ok()),
        hours: row.get(4)?,
        description: row.get(5)?,
    })
}
