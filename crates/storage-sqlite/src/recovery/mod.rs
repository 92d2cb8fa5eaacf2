//! SQLite storage implementation for password recovery codes.

mod model;
mod repository;

pub use model::RecoveryCodeDB;
pub use repository::RecoveryCodeRepository;
