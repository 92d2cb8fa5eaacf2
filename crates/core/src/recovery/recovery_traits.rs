use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::recovery_model::{RecoveryCode, ResetPasswordRequest};
use crate::errors::Result;

#[async_trait]
pub trait RecoveryCodeRepositoryTrait: Send + Sync {
    fn get_code(&self, email: &str) -> Result<Option<RecoveryCode>>;
    /// Inserts or replaces the code for `code.email`.
    async fn upsert_code(&self, code: RecoveryCode) -> Result<()>;
    async fn delete_code(&self, email: &str) -> Result<usize>;
    /// Removes every code that expired before `now`.
    async fn delete_expired(&self, now: NaiveDateTime) -> Result<usize>;
}

/// Delivers a recovery code to its owner.
#[async_trait]
pub trait RecoveryMailerTrait: Send + Sync {
    async fn send_recovery_code(&self, email: &str, code: &str) -> Result<()>;
}

#[async_trait]
pub trait RecoveryServiceTrait: Send + Sync {
    async fn request_code(&self, email: &str) -> Result<()>;
    async fn reset_password(&self, request: ResetPasswordRequest) -> Result<()>;
    async fn purge_expired(&self) -> Result<usize>;
}
