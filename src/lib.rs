mod commands;
mod models;
mod services;
mod storage;

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::OnceCell;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use storage::{open_database, Database};

// Keeps the non-blocking log writer alive for the process lifetime.
static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Shared application state: the database handle opened once at startup
/// and passed to every command explicitly.
pub struct AppState {
    pub db: Mutex<Database>,
}

/// Per-user application data directory (database and logs)
fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("com.freelance-tracker")
}

fn init_logging(data_dir: &std::path::Path) {
    let file_appender = tracing_appender::rolling::daily(data_dir.join("logs"), "tracker.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let _ = LOG_GUARD.set(guard);
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let data_dir = app_data_dir();
    fs::create_dir_all(&data_dir).expect("failed to create app data directory");

    init_logging(&data_dir);
    info!("Starting freelance tracker, data dir {:?}", data_dir);

    let db = open_database(&data_dir).expect("failed to open database");

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(AppState { db: Mutex::new(db) })
        .invoke_handler(tauri::generate_handler![
            // Project commands
            commands::projects::list_projects,
            commands::projects::get_project,
            commands::projects::find_projects_by_client,
            commands::projects::create_project,
            commands::projects::update_project,
            commands::projects::delete_project,
            // Time log commands
            commands::time_entries::list_time_entries,
            commands::time_entries::log_time_entry,
            commands::time_entries::update_time_entry,
            commands::time_entries::delete_time_entry,
            commands::time_entries::get_logged_hours,
            // Metrics commands
            commands::metrics::get_project_profitability,
            commands::metrics::get_overall_profitability,
            commands::metrics::get_workload_by_week,
            commands::metrics::check_for_overwork,
            commands::metrics::get_project_statistics,
            // Report commands
            commands::reports::export_project_report,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
