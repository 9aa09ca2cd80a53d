//! Project repository for database operations on projects

use rusqlite::{params, Connection, Row};
use chrono::NaiveDate;

use crate::models::project::{Project, ProjectStatus};
use super::DatabaseError;

const PROJECT_COLUMNS: &str =
    "id, name, client, hourly_rate, hours_worked, status, start_date, end_date, description";

/// Repository for Project operations
pub struct ProjectRepo<'a> {
    conn: &'a Connection,
}

impl<'a> ProjectRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Get all projects, newest first
    pub fn list(&self) -> Result<Vec<Project>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM projects ORDER BY id DESC",
            PROJECT_COLUMNS
        ))?;

        let rows = stmt.query_map([], row_to_project)?;

        let mut projects = Vec::new();
        for row in rows {
            projects.push(row?);
        }
        Ok(projects)
    }

    /// Get a project by id
    pub fn get(&self, id: i64) -> Result<Option<Project>, DatabaseError> {
        let result = self.conn.query_row(
            &format!("SELECT {} FROM projects WHERE id = ?", PROJECT_COLUMNS),
            [id],
            row_to_project,
        );

        match result {
            Ok(project) => Ok(Some(project)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::from(e)),
        }
    }

    /// Get all projects with the given status, newest first
    pub fn find_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM projects WHERE status = ? ORDER BY id DESC",
            PROJECT_COLUMNS
        ))?;

        let rows = stmt.query_map([status.as_str()], row_to_project)?;

        let mut projects = Vec::new();
        for row in rows {
            projects.push(row?);
        }
        Ok(projects)
    }

    /// Get all projects whose client name contains the given substring
    pub fn find_by_client(&self, client: &str) -> Result<Vec<Project>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM projects WHERE client LIKE ? ORDER BY id DESC",
            PROJECT_COLUMNS
        ))?;

        let pattern = format!("%{}%", client);
        let rows = stmt.query_map([pattern], row_to_project)?;

        let mut projects = Vec::new();
        for row in rows {
            projects.push(row?);
        }
        Ok(projects)
    }

    /// Insert a new project, returning its assigned id
    pub fn create(&self, project: &Project) -> Result<i64, DatabaseError> {
        self.conn.execute(
            "INSERT INTO projects (name, client, hourly_rate, hours_worked,
                                   status, start_date, end_date, description)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                project.name,
                project.client,
                project.hourly_rate,
                project.hours_worked,
                project.status.as_str(),
                project.start_date.map(|d| d.to_string()),
                project.end_date.map(|d| d.to_string()),
                project.description,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing project by its id
    pub fn update(&self, project: &Project) -> Result<bool, DatabaseError> {
        let count = self.conn.execute(
            "UPDATE projects SET name = ?, client = ?, hourly_rate = ?,
                                 hours_worked = ?, status = ?, start_date = ?,
                                 end_date = ?, description = ?
             WHERE id = ?",
            params![
                project.name,
                project.client,
                project.hourly_rate,
                project.hours_worked,
                project.status.as_str(),
                project.start_date.map(|d| d.to_string()),
                project.end_date.map(|d| d.to_string()),
                project.description,
                project.id,
            ],
        )?;
        Ok(count > 0)
    }

    /// Delete a project (time entries are cascade deleted)
    pub fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let count = self.conn.execute("DELETE FROM projects WHERE id = ?", [id])?;
        Ok(count > 0)
    }
}

fn row_to_project(row: &Row<'_>) -> rusqlite::Result<Project> {
    let status: String = row.get(5)?;
    let start_date: Option<String> = row.get(6)?;
    let end_date: Option<String> = row.get(7)?;

    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        client: row.get(2)?,
        hourly_rate: row.get(3)?,
        hours_worked: row.get(4)?,
        status: ProjectStatus::from_db(&status),
        start_date: start_date.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        end_date: end_date.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        description: row.get(8)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::open_database;
    use tempfile::tempdir;

    fn sample_project(name: &str, client: &str) -> Project {
        Project {
            id: None,
            name: name.to_string(),
            client: client.to_string(),
            hourly_rate: 50.0,
            hours_worked: 10.0,
            status: ProjectStatus::Active,
            start_date: NaiveDate::from_ymd_opt(2026, 8, 3),
            end_date: None,
            description: Some("Landing page".to_string()),
        }
    }

    #[test]
    fn create_and_get_roundtrip() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = ProjectRepo::new(&db.conn);

        let id = repo.create(&sample_project("Site", "Acme")).unwrap();
        let found = repo.get(id).unwrap().unwrap();

        assert_eq!(found.id, Some(id));
        assert_eq!(found.name, "Site");
        assert_eq!(found.client, "Acme");
        assert_eq!(found.hourly_rate, 50.0);
        assert_eq!(found.status, ProjectStatus::Active);
        assert_eq!(found.start_date, NaiveDate::from_ymd_opt(2026, 8, 3));
        assert_eq!(found.end_date, None);
    }

    #[test]
    fn get_missing_returns_none() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = ProjectRepo::new(&db.conn);

        assert!(repo.get(999).unwrap().is_none());
    }

    #[test]
    fn list_is_newest_first() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = ProjectRepo::new(&db.conn);

        repo.create(&sample_project("First", "Acme")).unwrap();
        repo.create(&sample_project("Second", "Beta")).unwrap();

        let projects = repo.list().unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Second");
        assert_eq!(projects[1].name, "First");
    }

    #[test]
    fn find_by_status_filters() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = ProjectRepo::new(&db.conn);

        repo.create(&sample_project("Active one", "Acme")).unwrap();
        let mut done = sample_project("Done one", "Beta");
        done.status = ProjectStatus::Completed;
        repo.create(&done).unwrap();

        let active = repo.find_by_status(ProjectStatus::Active).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Active one");

        let completed = repo.find_by_status(ProjectStatus::Completed).unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].name, "Done one");
    }

    #[test]
    fn find_by_client_matches_substring() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = ProjectRepo::new(&db.conn);

        repo.create(&sample_project("Site", "Acme Corp")).unwrap();
        repo.create(&sample_project("App", "Beta LLC")).unwrap();

        let found = repo.find_by_client("Acme").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].client, "Acme Corp");
    }

    #[test]
    fn update_changes_fields() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = ProjectRepo::new(&db.conn);

        let id = repo.create(&sample_project("Site", "Acme")).unwrap();
        let mut project = repo.get(id).unwrap().unwrap();
        project.hours_worked = 25.0;
        project.status = ProjectStatus::Paused;

        assert!(repo.update(&project).unwrap());

        let reread = repo.get(id).unwrap().unwrap();
        assert_eq!(reread.hours_worked, 25.0);
        assert_eq!(reread.status, ProjectStatus::Paused);
    }

    #[test]
    fn delete_removes_project() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let repo = ProjectRepo::new(&db.conn);

        let id = repo.create(&sample_project("Site", "Acme")).unwrap();
        assert!(repo.delete(id).unwrap());
        assert!(repo.get(id).unwrap().is_none());
        assert!(!repo.delete(id).unwrap());
    }
}
