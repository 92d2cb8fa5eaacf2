use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime, Utc};
use log::{debug, info, warn};
use rand::Rng;

use super::recovery_model::{RecoveryCode, ResetPasswordRequest};
use super::recovery_traits::{
    RecoveryCodeRepositoryTrait, RecoveryMailerTrait, RecoveryServiceTrait,
};
use crate::constants::RECOVERY_CODE_TTL_MINUTES;
use crate::errors::{Error, Result, ValidationError};
use crate::users::{hash_password, is_strong_password, UserRepositoryTrait};

/// Current UTC time.
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

pub struct RecoveryService {
    code_repository: Arc<dyn RecoveryCodeRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    mailer: Arc<dyn RecoveryMailerTrait>,
    now: Clock,
}

impl RecoveryService {
    pub fn new(
        code_repository: Arc<dyn RecoveryCodeRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        mailer: Arc<dyn RecoveryMailerTrait>,
    ) -> Self {
        RecoveryService {
            code_repository,
            user_repository,
            mailer,
            now: Arc::new(|| Utc::now().naive_utc()),
        }
    }

    pub fn with_clock(mut self, now: Clock) -> Self {
        self.now = now;
        self
    }

    fn generate_code() -> String {
        rand::thread_rng().gen_range(100_000..=999_999).to_string()
    }
}

#[async_trait]
impl RecoveryServiceTrait for RecoveryService {
    async fn request_code(&self, email: &str) -> Result<()> {
        if self.user_repository.get_user_by_email(email)?.is_none() {
            return Err(Error::NotFound("User not found".to_string()));
        }

        let code = Self::generate_code();
        self.code_repository
            .upsert_code(RecoveryCode {
                email: email.to_string(),
                code: code.clone(),
                expires_at: (self.now)() + Duration::minutes(RECOVERY_CODE_TTL_MINUTES),
            })
            .await?;

        self.mailer.send_recovery_code(email, &code).await?;
        info!("Recovery code issued for {}", email);
        Ok(())
    }

    async fn reset_password(&self, request: ResetPasswordRequest) -> Result<()> {
        if request.new_password != request.confirm_password {
            return Err(Error::Validation(ValidationError::PasswordMismatch(
                "Passwords do not match".to_string(),
            )));
        }
        if !is_strong_password(&request.new_password) {
            return Err(Error::Validation(ValidationError::WeakPassword(
                "New password must be at least 8 characters long and contain at least one uppercase letter"
                    .to_string(),
            )));
        }

        let stored = self
            .code_repository
            .get_code(&request.email)?
            .ok_or_else(|| Error::invalid_input("Recovery code not requested or expired"))?;

        if stored.is_expired((self.now)()) {
            self.code_repository.delete_code(&request.email).await?;
            return Err(Error::invalid_input("Recovery code expired"));
        }
        if stored.code != request.recovery_code {
            warn!("Rejected recovery attempt for {}", request.email);
            return Err(Error::Unauthorized("Invalid recovery code".to_string()));
        }

        let user = self
            .user_repository
            .get_user_by_email(&request.email)?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        let password_hash = hash_password(&request.new_password)?;
        self.user_repository
            .update_password_hash(user.id, password_hash)
            .await?;
        self.code_repository.delete_code(&request.email).await?;

        info!("Password reset for user {}", user.id);
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize> {
        let removed = self.code_repository.delete_expired((self.now)()).await?;
        if removed > 0 {
            debug!("Purged {} expired recovery codes", removed);
        }
        Ok(removed)
    }
}
