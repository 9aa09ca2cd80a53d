//! Business metrics over project snapshots
//!
//! Pure functions: every computation takes an in-memory snapshot of
//! projects and returns a plain aggregate. Nothing here touches storage or
//! mutates its input, and there are no error paths; input validation is the
//! form layer's job, so nonsensical figures (negative hours, zero rates)
//! flow straight through the arithmetic.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::project::{Project, ProjectStatus};

/// Number of weekly buckets in the workload projection, starting with the
/// current week.
pub const WORKLOAD_WEEKS: i64 = 4;

/// Weekly hours above which a week is flagged as overwork.
pub const OVERWORK_THRESHOLD_HOURS: f64 = 40.0;

/// Revenue and rate figures for a single project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectProfitability {
    pub project_name: String,
    pub total_revenue: f64,
    pub hours_worked: f64,
    pub hourly_rate: f64,
    /// Currently identical to the hourly rate.
    pub efficiency: f64,
}

/// Revenue and rate figures across a whole project set.
#[derive(Debug, Clone, Serialize)]
pub struct OverallProfitability {
    pub total_revenue: f64,
    pub total_hours: f64,
    pub average_hourly_rate: f64,
    pub project_count: usize,
}

/// Projected hours for one week of the workload window.
#[derive(Debug, Clone, Serialize)]
pub struct WeekLoad {
    /// "Week YYYY-MM-DD", keyed on the week's Monday.
    pub label: String,
    pub week_start: NaiveDate,
    pub hours: f64,
}

/// Headline counts across a whole project set.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStatistics {
    pub total_projects: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
    pub client_breakdown: HashMap<String, i64>,
}

/// Profitability figures for a single project.
pub fn project_profitability(project: &Project) -> ProjectProfitability {
    ProjectProfitability {
        project_name: project.name.clone(),
        total_revenue: project.revenue(),
        hours_worked: project.hours_worked,
        hourly_rate: project.hourly_rate,
        efficiency: project.hourly_rate,
    }
}

/// Profitability across all projects, regardless of status.
///
/// The average rate is revenue-weighted (total revenue over total hours)
/// and 0 when no hours have been logged at all.
pub fn overall_profitability(projects: &[Project]) -> OverallProfitability {
    let total_revenue: f64 = projects.iter().map(Project::revenue).sum();
    let total_hours: f64 = projects.iter().map(|p| p.hours_worked).sum();

    let average_hourly_rate = if total_hours > 0.0 {
        total_revenue / total_hours
    } else {
        0.0
    };

    OverallProfitability {
        total_revenue,
        total_hours,
        average_hourly_rate,
        project_count: projects.len(),
    }
}

/// Projected hours for the next `WORKLOAD_WEEKS` weeks, week 0 being the
/// week containing `today`.
///
/// Each active project contributes `hours_worked / 4` to every week whose
/// start it predates (with a one-week grace past the week start). The
/// figure is an even projection of a project's *total* hours across the
/// window, not a per-week sum of actually logged work.
pub fn workload_by_week(active_projects: &[Project], today: NaiveDate) -> Vec<WeekLoad> {
    let start_of_week = today - Duration::days(today.weekday().num_days_from_monday() as i64);

    (0..WORKLOAD_WEEKS)
        .map(|i| {
            let week_start = start_of_week + Duration::weeks(i);
            let cutoff = week_start + Duration::days(7);

            let hours: f64 = active_projects
                .iter()
                .filter(|p| matches!(p.start_date, Some(d) if d <= cutoff))
                .map(|p| p.hours_worked / WORKLOAD_WEEKS as f64)
                .sum();

            WeekLoad {
                label: format!("Week {}", week_start),
                week_start,
                hours,
            }
        })
        .collect()
}

/// One warning per week whose projected hours exceed the overwork
/// threshold, in week order.
pub fn overwork_warnings(workload: &[WeekLoad]) -> Vec<String> {
    workload
        .iter()
        .filter(|week| week.hours > OVERWORK_THRESHOLD_HOURS)
        .map(|week| format!("WARNING: {} - overwork ({:.1} hours)", week.label, week.hours))
        .collect()
}

/// Headline counts: totals by status plus a per-client project count.
///
/// Paused projects count toward the total but toward neither the active
/// nor the completed figure.
pub fn project_statistics(projects: &[Project]) -> ProjectStatistics {
    let active_projects = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Active)
        .count();
    let completed_projects = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Completed)
        .count();

    let mut client_breakdown: HashMap<String, i64> = HashMap::new();
    for project in projects {
        *client_breakdown.entry(project.client.clone()).or_insert(0) += 1;
    }

    ProjectStatistics {
        total_projects: projects.len(),
        active_projects,
        completed_projects,
        client_breakdown,
    }
}
