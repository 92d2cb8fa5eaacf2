//! SQLite storage implementation for Spendwise.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `spendwise-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for users, expenses, budgets and recovery codes
//! - Database-specific model types (with Diesel derives)
//!
//! Reads borrow a pooled connection; every write goes through the single
//! writer actor behind [`WriteHandle`].

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod budgets;
pub mod expenses;
pub mod recovery;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export repositories
pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use recovery::RecoveryCodeRepository;
pub use users::UserRepository;

// Re-export from spendwise-core for convenience
pub use spendwise_core::errors::{DatabaseError, Error, Result};
