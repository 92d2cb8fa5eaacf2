//! User domain models.

use serde::{Deserialize, Serialize};

/// Domain model representing a registered user.
///
/// The password hash never leaves the process in serialized form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub fullname: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

/// Registration input; `password` is the plain-text password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub password: String,
}

/// Row handed to the repository once the password has been hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserRecord {
    /// Explicit id for placeholder users; `None` lets the store assign one.
    pub id: Option<i32>,
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Credentials required to delete an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub fullname: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
