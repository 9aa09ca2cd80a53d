//! Services module for business logic
//!
//! This module contains the metrics engine plus the services that
//! coordinate between storage and commands.

pub mod metrics;
pub mod pdf_export;
pub mod project_service;

pub use pdf_export::PdfExportService;
pub use project_service::ProjectService;
