//! Recovery module - one-time codes for resetting a forgotten password.

mod recovery_model;
mod recovery_service;
mod recovery_traits;

pub use recovery_model::{ForgotPasswordRequest, RecoveryCode, ResetPasswordRequest};
pub use recovery_service::{Clock, RecoveryService};
pub use recovery_traits::{
    RecoveryCodeRepositoryTrait, RecoveryMailerTrait, RecoveryServiceTrait,
};
