//! PDF report export commands

use std::fs;
use std::path::PathBuf;

use crate::services::PdfExportService;
use crate::AppState;
use tauri::State;
use tracing::info;

#[tauri::command]
pub async fn export_project_report(
    path: String,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let db = state.db.lock().map_err(|e| e.to_string())?;

    let bytes = PdfExportService::new(&db).generate_project_report()?;

    let path = PathBuf::from(path);
    fs::write(&path, &bytes).map_err(|e| format!("Failed to write report: {}", e))?;

    info!("Exported project report to {:?} ({} bytes)", path, bytes.len());
    Ok(())
}
