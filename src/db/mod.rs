//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and migrations
//! - SQLite pragma configuration
//! - Repository layer for ledger reads and atomic ledger commits

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::{Repository, StoreError};
