use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use super::password::{hash_password, is_strong_password, verify_password};
use super::users_model::{
    DeleteUserRequest, LoginRequest, NewUser, NewUserRecord, PasswordChange, ProfileUpdate, User,
};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Stored in place of a hash for placeholder users; never verifies.
const UNUSABLE_PASSWORD_HASH: &str = "!";
const PLACEHOLDER_USERNAME_PREFIX: &str = "default_user_";
const PLACEHOLDER_EMAIL_DOMAIN: &str = "@placeholder.invalid";

/// Placeholder accounts own these names; real accounts may not take them.
fn check_not_reserved(username: &str, email: &str) -> Result<()> {
    if username.starts_with(PLACEHOLDER_USERNAME_PREFIX) {
        return Err(Error::invalid_input("Username is reserved"));
    }
    if email.to_ascii_lowercase().ends_with(PLACEHOLDER_EMAIL_DOMAIN) {
        return Err(Error::invalid_input("Email is reserved"));
    }
    Ok(())
}

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }

    fn user_not_found() -> Error {
        Error::NotFound("User not found".to_string())
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: i32) -> Result<User> {
        self.repository
            .get_user_by_id(user_id)?
            .ok_or_else(Self::user_not_found)
    }

    async fn register_user(&self, new_user: NewUser) -> Result<User> {
        if !is_strong_password(&new_user.password) {
            return Err(Error::Validation(ValidationError::WeakPassword(
                "Password must be at least 8 chars with at least one uppercase letter.".to_string(),
            )));
        }
        check_not_reserved(&new_user.username, &new_user.email)?;
        if self
            .repository
            .get_user_by_username(&new_user.username)?
            .is_some()
        {
            return Err(Error::ConstraintViolation(
                "Username is already in use by another user".to_string(),
            ));
        }
        if self.repository.get_user_by_email(&new_user.email)?.is_some() {
            return Err(Error::ConstraintViolation(
                "Email is already in use by another user".to_string(),
            ));
        }

        let record = NewUserRecord {
            id: None,
            username: new_user.username,
            fullname: new_user.fullname,
            email: new_user.email,
            password_hash: hash_password(&new_user.password)?,
        };
        let user = self.repository.insert_user(record).await?;
        info!("Registered user {} ({})", user.username, user.id);
        Ok(user)
    }

    async fn ensure_user(&self, user_id: i32) -> Result<User> {
        if let Some(existing) = self.repository.get_user_by_id(user_id)? {
            return Ok(existing);
        }
        info!("Creating placeholder user for id {}", user_id);
        self.repository
            .insert_user(NewUserRecord {
                id: Some(user_id),
                username: format!("{PLACEHOLDER_USERNAME_PREFIX}{user_id}"),
                fullname: "Default user".to_string(),
                email: format!("{PLACEHOLDER_USERNAME_PREFIX}{user_id}{PLACEHOLDER_EMAIL_DOMAIN}"),
                password_hash: UNUSABLE_PASSWORD_HASH.to_string(),
            })
            .await
    }

    fn authenticate(&self, login: LoginRequest) -> Result<User> {
        let invalid = || Error::Unauthorized("Invalid credentials".to_string());
        let user = self
            .repository
            .get_user_by_username(&login.username)?
            .ok_or_else(invalid)?;
        if !verify_password(&login.password, &user.password_hash) {
            return Err(invalid());
        }
        Ok(user)
    }

    async fn delete_user(&self, request: DeleteUserRequest) -> Result<User> {
        let user = self
            .repository
            .get_user_by_username(&request.username)?
            .filter(|u| u.email == request.email)
            .ok_or_else(Self::user_not_found)?;

        if !verify_password(&request.password, &user.password_hash) {
            return Err(Error::Unauthorized("Incorrect password".to_string()));
        }

        self.repository.delete_user(user.id).await?;
        info!("Deleted user {} ({})", user.username, user.id);
        Ok(user)
    }

    async fn update_profile(&self, user_id: i32, profile: ProfileUpdate) -> Result<User> {
        let current = self.get_user(user_id)?;
        if profile.username != current.username || profile.email != current.email {
            check_not_reserved(&profile.username, &profile.email)?;
        }

        if self
            .repository
            .get_user_by_username(&profile.username)?
            .is_some_and(|other| other.id != user_id)
        {
            return Err(Error::invalid_input(
                "Username is already in use by another user",
            ));
        }
        if self
            .repository
            .get_user_by_email(&profile.email)?
            .is_some_and(|other| other.id != user_id)
        {
            return Err(Error::invalid_input("Email is already in use by another user"));
        }

        self.repository.update_profile(user_id, profile).await
    }

    async fn change_password(&self, user_id: i32, change: PasswordChange) -> Result<()> {
        let user = self.get_user(user_id)?;

        if !verify_password(&change.old_password, &user.password_hash) {
            return Err(Error::Unauthorized("Old password is incorrect".to_string()));
        }
        if change.new_password != change.confirm_password {
            return Err(Error::Validation(ValidationError::PasswordMismatch(
                "New password and confirmation do not match".to_string(),
            )));
        }
        if !is_strong_password(&change.new_password) {
            return Err(Error::Validation(ValidationError::WeakPassword(
                "New password must be at least 8 characters long and contain at least one uppercase letter"
                    .to_string(),
            )));
        }

        let hash = hash_password(&change.new_password)?;
        self.repository.update_password_hash(user_id, hash).await
    }
}
