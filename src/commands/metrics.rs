//! Dashboard metrics commands

use crate::services::metrics::{
    OverallProfitability, ProjectProfitability, ProjectStatistics, WeekLoad,
};
use crate::services::ProjectService;
use crate::AppState;
use tauri::State;

#[tauri::command]
pub async fn get_project_profitability(
    id: i64,
    state: State<'_, AppState>,
) -> Result<Option<ProjectProfitability>, String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    ProjectService::new(&db)
        .profitability(id)
        .map_err(|e| format!("Failed to compute profitability: {}", e))
}

#[tauri::command]
pub async fn get_overall_profitability(
    state: State<'_, AppState>,
) -> Result<OverallProfitability, String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    ProjectService::new(&db)
        .overall_profitability()
        .map_err(|e| format!("Failed to compute profitability: {}", e))
}

#[tauri::command]
pub async fn get_workload_by_week(state: State<'_, AppState>) -> Result<Vec<WeekLoad>, String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    ProjectService::new(&db)
        .workload_by_week()
        .map_err(|e| format!("Failed to compute workload: {}", e))
}

#[tauri::command]
pub async fn check_for_overwork(state: State<'_, AppState>) -> Result<Vec<String>, String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    ProjectService::new(&db)
        .check_for_overwork()
        .map_err(|e| format!("Failed to check for overwork: {}", e))
}

#[tauri::command]
pub async fn get_project_statistics(
    state: State<'_, AppState>,
) -> Result<ProjectStatistics, String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    ProjectService::new(&db)
        .statistics()
        .map_err(|e| format!("Failed to compute statistics: {}", e))
}
