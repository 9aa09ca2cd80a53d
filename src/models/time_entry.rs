use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;

/// A discrete logged interval of work against a project.
///
/// Entries are an audit log only: the aggregate `Project::hours_worked`
/// stays authoritative for every metric, and nothing reconciles the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: Option<i64>,
    pub project_id: i64,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub hours: f64,
    pub description: Option<String>,
}
