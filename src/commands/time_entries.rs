//! Time log commands

use chrono::NaiveDateTime;

use crate::models::time_entry::TimeEntry;
use crate::services::ProjectService;
use crate::AppState;
use tauri::State;

#[tauri::command]
pub async fn list_time_entries(
    project_id: i64,
    state: State<'_, AppState>,
) -> Result<Vec<TimeEntry>, String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    ProjectService::new(&db)
        .time_entries_for(project_id)
        .map_err(|e| format!("Failed to list time entries: {}", e))
}

#[derive(serde::Deserialize)]
pub struct LogTimeRequest {
    pub project_id: i64,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub hours: f64,
    pub description: Option<String>,
}

#[tauri::command]
pub async fn log_time_entry(
    request: LogTimeRequest,
    state: State<'_, AppState>,
) -> Result<TimeEntry, String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    let entry = TimeEntry {
        id: None,
        project_id: request.project_id,
        start_time: request.start_time,
        end_time: request.end_time,
        hours: request.hours,
        description: request.description,
    };

    ProjectService::new(&db)
        .log_time(entry)
        .map_err(|e| format!("Failed to log time entry: {}", e))
}

#[tauri::command]
pub async fn update_time_entry(entry: TimeEntry, state: State<'_, AppState>) -> Result<(), String> {
    if entry.id.is_none() {
        return Err("Time entry has no id".to_string());
    }

    let db = state.db.lock().map_err(|e| e.to_string())?;

    let updated = ProjectService::new(&db)
        .update_time_entry(&entry)
        .map_err(|e| format!("Failed to update time entry: {}", e))?;

    if updated {
        Ok(())
    } else {
        Err("Time entry not found".to_string())
    }
}

#[tauri::command]
pub async fn delete_time_entry(id: i64, state: State<'_, AppState>) -> Result<(), String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    let deleted = ProjectService::new(&db)
        .delete_time_entry(id)
        .map_err(|e| format!("Failed to delete time entry: {}", e))?;

    if deleted {
        Ok(())
    } else {
        Err("Time entry not found".to_string())
    }
}

#[tauri::command]
pub async fn get_logged_hours(project_id: i64, state: State<'_, AppState>) -> Result<f64, String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    ProjectService::new(&db)
        .logged_hours(project_id)
        .map_err(|e| format!("Failed to sum logged hours: {}", e))
}
