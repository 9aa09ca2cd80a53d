use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Paused,
    Completed,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Active
    }
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Paused => "paused",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Parse a status stored in the database. Unknown values normalize
    /// to `Active` rather than failing the whole row read.
    pub fn from_db(s: &str) -> Self {
        match s {
            "paused" => ProjectStatus::Paused,
            "completed" => ProjectStatus::Completed,
            _ => ProjectStatus::Active,
        }
    }

    /// Human-readable label used in the PDF report.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Paused => "Paused",
            ProjectStatus::Completed => "Completed",
        }
    }
}

/// A unit of freelance work for a client, billed hourly.
///
/// `hours_worked` is the denormalized total logged against the project and
/// is what all revenue and workload figures are computed from. Time entries
/// are a separate, finer-grained log (see `TimeEntry`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Assigned by the database on first insert.
    pub id: Option<i64>,
    pub name: String,
    pub client: String,
    pub hourly_rate: f64,
    #[serde(default)]
    pub hours_worked: f64,
    #[serde(default)]
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl Project {
    /// Total billed revenue for this project.
    pub fn revenue(&self) -> f64 {
        self.hourly_rate * self.hours_worked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(rate: f64, hours: f64) -> Project {
        Project {
            id: Some(1),
            name: "Site".to_string(),
            client: "Acme".to_string(),
            hourly_rate: rate,
            hours_worked: hours,
            status: ProjectStatus::Active,
            start_date: None,
            end_date: None,
            description: None,
        }
    }

    #[test]
    fn revenue_is_rate_times_hours() {
        assert_eq!(project(50.0, 10.0).revenue(), 500.0);
        assert_eq!(project(0.0, 100.0).revenue(), 0.0);
    }

    #[test]
    fn status_roundtrips_through_db_strings() {
        for status in [
            ProjectStatus::Active,
            ProjectStatus::Paused,
            ProjectStatus::Completed,
        ] {
            assert_eq!(ProjectStatus::from_db(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_normalizes_to_active() {
        assert_eq!(ProjectStatus::from_db("archived"), ProjectStatus::Active);
    }
}
