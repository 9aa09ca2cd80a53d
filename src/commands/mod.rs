//! Tauri command handlers consumed by the frontend

pub mod metrics;
pub mod projects;
pub mod reports;
pub mod time_entries;
