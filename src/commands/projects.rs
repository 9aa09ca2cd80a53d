//! Project CRUD commands

use chrono::NaiveDate;

use crate::models::project::{Project, ProjectStatus};
use crate::services::ProjectService;
use crate::AppState;
use tauri::State;
use tracing::info;

#[tauri::command]
pub async fn list_projects(state: State<'_, AppState>) -> Result<Vec<Project>, String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    ProjectService::new(&db)
        .list_projects()
        .map_err(|e| format!("Failed to list projects: {}", e))
}

#[tauri::command]
pub async fn get_project(id: i64, state: State<'_, AppState>) -> Result<Option<Project>, String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    ProjectService::new(&db)
        .get_project(id)
        .map_err(|e| format!("Failed to get project: {}", e))
}

#[tauri::command]
pub async fn find_projects_by_client(
    client: String,
    state: State<'_, AppState>,
) -> Result<Vec<Project>, String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    ProjectService::new(&db)
        .find_projects_by_client(&client)
        .map_err(|e| format!("Failed to find projects: {}", e))
}

#[derive(serde::Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub client: String,
    pub hourly_rate: f64,
    #[serde(default)]
    pub hours_worked: f64,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[tauri::command]
pub async fn create_project(
    request: CreateProjectRequest,
    state: State<'_, AppState>,
) -> Result<Project, String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    let project = Project {
        id: None,
        name: request.name,
        client: request.client,
        hourly_rate: request.hourly_rate,
        hours_worked: request.hours_worked,
        status: request.status.unwrap_or_default(),
        start_date: request.start_date,
        end_date: request.end_date,
        description: request.description,
    };

    ProjectService::new(&db)
        .create_project(project)
        .map_err(|e| format!("Failed to create project: {}", e))
}

#[tauri::command]
pub async fn update_project(project: Project, state: State<'_, AppState>) -> Result<(), String> {
    if project.id.is_none() {
        return Err("Project has no id".to_string());
    }

    let db = state.db.lock().map_err(|e| e.to_string())?;

    let updated = ProjectService::new(&db)
        .update_project(&project)
        .map_err(|e| format!("Failed to update project: {}", e))?;

    if updated {
        Ok(())
    } else {
        Err("Project not found".to_string())
    }
}

#[tauri::command]
pub async fn delete_project(id: i64, state: State<'_, AppState>) -> Result<(), String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    let deleted = ProjectService::new(&db)
        .delete_project(id)
        .map_err(|e| format!("Failed to delete project: {}", e))?;

    if deleted {
        info!("Deleted project {}", id);
        Ok(())
    } else {
        Err("Project not found".to_string())
    }
}
