//! Spendwise Core - Domain entities, services, and traits.
//!
//! This crate contains the expense and budget tracking logic. It is
//! database-agnostic and defines repository traits that are implemented
//! by the `storage-sqlite` crate.

pub mod budgets;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod recovery;
pub mod reports;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
