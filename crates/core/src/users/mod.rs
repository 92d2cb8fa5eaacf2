//! Users module - accounts, credentials and password rules.

mod password;
mod users_model;
mod users_service;
mod users_traits;

pub use password::{hash_password, is_strong_password, verify_password};
pub use users_model::{
    DeleteUserRequest, LoginRequest, NewUser, NewUserRecord, PasswordChange, ProfileUpdate, User,
};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};

#[cfg(test)]
pub(crate) use users_service::tests as test_support;
