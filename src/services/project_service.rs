//! Project service: CRUD plus metrics entry points
//!
//! Thin coordination layer between the command handlers and the storage
//! repos. Every metrics call re-reads current rows, so callers always see a
//! fresh snapshot; nothing is cached between calls.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::models::project::{Project, ProjectStatus};
use crate::models::time_entry::TimeEntry;
use crate::services::metrics::{
    self, OverallProfitability, ProjectProfitability, ProjectStatistics, WeekLoad,
};
use crate::storage::{Database, DatabaseError, ProjectRepo, TimeEntryRepo};

/// Service over the injected database handle
pub struct ProjectService<'a> {
    db: &'a Database,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn projects(&self) -> ProjectRepo<'_> {
        ProjectRepo::new(&self.db.conn)
    }

    fn time_entries(&self) -> TimeEntryRepo<'_> {
        TimeEntryRepo::new(&self.db.conn)
    }

    /// Get all projects
    pub fn list_projects(&self) -> Result<Vec<Project>, DatabaseError> {
        self.projects().list()
    }

    /// Get a project by id
    pub fn get_project(&self, id: i64) -> Result<Option<Project>, DatabaseError> {
        self.projects().get(id)
    }

    /// Get all active projects
    pub fn active_projects(&self) -> Result<Vec<Project>, DatabaseError> {
        self.projects().find_by_status(ProjectStatus::Active)
    }

    /// Get all projects whose client name contains the given substring
    pub fn find_projects_by_client(&self, client: &str) -> Result<Vec<Project>, DatabaseError> {
        self.projects().find_by_client(client)
    }

    /// Create a new project, defaulting the start date to today when unset.
    /// Returns the stored project with its assigned id.
    pub fn create_project(&self, mut project: Project) -> Result<Project, DatabaseError> {
        if project.start_date.is_none() {
            project.start_date = Some(Local::now().date_naive());
        }

        let id = self.projects().create(&project)?;
        project.id = Some(id);

        info!("Created project {} ({})", project.name, id);
        Ok(project)
    }

    /// Update an existing project
    pub fn update_project(&self, project: &Project) -> Result<bool, DatabaseError> {
        let updated = self.projects().update(project)?;
        if updated {
            info!("Updated project {}", project.name);
        }
        Ok(updated)
    }

    /// Delete a project and its time entries
    pub fn delete_project(&self, id: i64) -> Result<bool, DatabaseError> {
        let deleted = self.projects().delete(id)?;
        if deleted {
            info!("Deleted project {}", id);
        }
        Ok(deleted)
    }

    /// Profitability for one project, or None when the id does not resolve
    pub fn profitability(&self, id: i64) -> Result<Option<ProjectProfitability>, DatabaseError> {
        Ok(self
            .projects()
            .get(id)?
            .map(|p| metrics::project_profitability(&p)))
    }

    /// Profitability across all projects
    pub fn overall_profitability(&self) -> Result<OverallProfitability, DatabaseError> {
        Ok(metrics::overall_profitability(&self.projects().list()?))
    }

    /// Projected hours per week for the current four-week window
    pub fn workload_by_week(&self) -> Result<Vec<WeekLoad>, DatabaseError> {
        self.workload_by_week_from(Local::now().date_naive())
    }

    fn workload_by_week_from(&self, today: NaiveDate) -> Result<Vec<WeekLoad>, DatabaseError> {
        Ok(metrics::workload_by_week(&self.active_projects()?, today))
    }

    /// Overwork warnings derived from the current workload window
    pub fn check_for_overwork(&self) -> Result<Vec<String>, DatabaseError> {
        Ok(metrics::overwork_warnings(&self.workload_by_week()?))
    }

    /// Headline statistics across all projects
    pub fn statistics(&self) -> Result<ProjectStatistics, DatabaseError> {
        Ok(metrics::project_statistics(&self.projects().list()?))
    }

    /// Log a time entry against a project. The project's `hours_worked`
    /// aggregate is not touched; the entry is an independent record.
    pub fn log_time(&self, mut entry: TimeEntry) -> Result<TimeEntry, DatabaseError> {
        let id = self.time_entries().create(&entry)?;
        entry.id = Some(id);

        info!("Logged {}h against project {}", entry.hours, entry.project_id);
        Ok(entry)
    }

    /// Get the time entries logged against a project
    pub fn time_entries_for(&self, project_id: i64) -> Result<Vec<TimeEntry>, DatabaseError> {
        self.time_entries().list_for_project(project_id)
    }

    /// Update a logged time entry
    pub fn update_time_entry(&self, entry: &TimeEntry) -> Result<bool, DatabaseError> {
        self.time_entries().update(entry)
    }

    /// Delete a time entry
    pub fn delete_time_entry(&self, id: i64) -> Result<bool, DatabaseError> {
        self.time_entries().delete(id)
    }

    /// Sum of entry hours for a project, for display next to `hours_worked`
    pub fn logged_hours(&self, project_id: i64) -> Result<f64, DatabaseError> {
        self.time_entries().logged_hours(project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::open_database;
    use tempfile::tempdir;

    fn project(name: &str, client: &str, rate: f64, hours: f64) -> Project {
        Project {
            id: None,
            name: name.to_string(),
            client: client.to_string(),
            hourly_rate: rate,
            hours_worked: hours,
            status: ProjectStatus::Active,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5),
            end_date: None,
            description: None,
        }
    }

    #[test]
    fn create_defaults_start_date_to_today() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let service = ProjectService::new(&db);

        let mut request = project("Site", "Acme", 50.0, 0.0);
        request.start_date = None;

        let created = service.create_project(request).unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.start_date, Some(Local::now().date_naive()));

        let stored = service.get_project(created.id.unwrap()).unwrap().unwrap();
        assert_eq!(stored.start_date, created.start_date);
    }

    #[test]
    fn profitability_of_missing_project_is_none() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let service = ProjectService::new(&db);

        assert!(service.profitability(42).unwrap().is_none());
    }

    #[test]
    fn profitability_reads_current_row() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let service = ProjectService::new(&db);

        let created = service.create_project(project("Site", "Acme", 50.0, 10.0)).unwrap();
        let id = created.id.unwrap();

        let first = service.profitability(id).unwrap().unwrap();
        assert_eq!(first.total_revenue, 500.0);

        let mut updated = created;
        updated.hours_worked = 20.0;
        service.update_project(&updated).unwrap();

        let second = service.profitability(id).unwrap().unwrap();
        assert_eq!(second.total_revenue, 1000.0);
    }

    #[test]
    fn overall_profitability_spans_all_statuses() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let service = ProjectService::new(&db);

        service.create_project(project("A", "Acme", 50.0, 10.0)).unwrap();
        let mut done = project("B", "Beta", 30.0, 5.0);
        done.status = ProjectStatus::Completed;
        service.create_project(done).unwrap();

        let overall = service.overall_profitability().unwrap();
        assert_eq!(overall.total_revenue, 650.0);
        assert_eq!(overall.total_hours, 15.0);
        assert_eq!(overall.project_count, 2);
    }

    #[test]
    fn workload_only_counts_active_projects() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let service = ProjectService::new(&db);

        service.create_project(project("A", "Acme", 50.0, 40.0)).unwrap();
        let mut paused = project("B", "Beta", 50.0, 400.0);
        paused.status = ProjectStatus::Paused;
        service.create_project(paused).unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let workload = service.workload_by_week_from(today).unwrap();
        assert_eq!(workload.len(), 4);
        assert!(workload.iter().all(|w| w.hours == 10.0));
    }

    #[test]
    fn statistics_counts_clients() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let service = ProjectService::new(&db);

        service.create_project(project("A", "Acme", 10.0, 1.0)).unwrap();
        service.create_project(project("B", "Acme", 10.0, 1.0)).unwrap();
        service.create_project(project("C", "Beta", 10.0, 1.0)).unwrap();

        let stats = service.statistics().unwrap();
        assert_eq!(stats.total_projects, 3);
        assert_eq!(stats.client_breakdown.get("Acme"), Some(&2));
        assert_eq!(stats.client_breakdown.get("Beta"), Some(&1));
    }

    #[test]
    fn logged_hours_does_not_touch_hours_worked() {
        let dir = tempdir().unwrap();
        let db = open_database(dir.path()).unwrap();
        let service = ProjectService::new(&db);

        let created = service.create_project(project("Site", "Acme", 50.0, 10.0)).unwrap();
        let id = created.id.unwrap();

        service
            .log_time(TimeEntry {
                id: None,
                project_id: id,
                start_time: None,
                end_time: None,
                hours: 3.0,
                description: None,
            })
            .unwrap();

        assert_eq!(service.logged_hours(id).unwrap(), 3.0);
        assert_eq!(service.get_project(id).unwrap().unwrap().hours_worked, 10.0);
    }
}
