//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and migrations
//! - SQLite pragma configuration
//! - Line and station repositories

pub mod migrations;
pub mod repo;

pub use migrations::{init_db, init_db_with_max_connections};
pub use repo::{LineRepository, StationRepository};
