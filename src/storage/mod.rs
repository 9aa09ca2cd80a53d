//! Storage module for SQLite database operations
//!
//! This module provides:
//! - Database connection management
//! - Schema migrations
//! - Repository pattern implementations for all entities

pub mod db;
pub mod project_repo;
pub mod time_entry_repo;

pub use db::{Database, open_database, DatabaseError};
pub use project_repo::ProjectRepo;
pub use time_entry_repo::TimeEntryRepo;
