use crate::errors::Result;
use crate::users::users_model::{
    DeleteUserRequest, LoginRequest, NewUser, NewUserRecord, PasswordChange, ProfileUpdate, User,
};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_user_by_id(&self, user_id: i32) -> Result<Option<User>>;
    fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn insert_user(&self, new_user: NewUserRecord) -> Result<User>;
    async fn update_profile(&self, user_id: i32, profile: ProfileUpdate) -> Result<User>;
    async fn update_password_hash(&self, user_id: i32, password_hash: String) -> Result<()>;
    /// Deletes the user; expenses, budgets and recovery codes go with it.
    async fn delete_user(&self, user_id: i32) -> Result<usize>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_user(&self, user_id: i32) -> Result<User>;
    async fn register_user(&self, new_user: NewUser) -> Result<User>;
    /// Returns the user with `user_id`, creating a placeholder row if none exists.
    async fn ensure_user(&self, user_id: i32) -> Result<User>;
    fn authenticate(&self, login: LoginRequest) -> Result<User>;
    async fn delete_user(&self, request: DeleteUserRequest) -> Result<User>;
    async fn update_profile(&self, user_id: i32, profile: ProfileUpdate) -> Result<User>;
    async fn change_password(&self, user_id: i32, change: PasswordChange) -> Result<()>;
}
