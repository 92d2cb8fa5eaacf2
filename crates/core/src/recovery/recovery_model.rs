use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A pending recovery code. At most one per email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryCode {
    pub email: String,
    pub code: String,
    /// UTC.
    pub expires_at: NaiveDateTime,
}

impl RecoveryCode {
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        now > self.expires_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub recovery_code: String,
    pub new_password: String,
    pub confirm_password: String,
}
