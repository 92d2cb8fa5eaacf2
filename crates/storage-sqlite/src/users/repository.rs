use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sql_types::Bool;
use diesel::sqlite::Sqlite;
use diesel::SqliteConnection;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;
use spendwise_core::users::{NewUserRecord, ProfileUpdate, User, UserRepositoryTrait};
use spendwise_core::Result;

type UserFilter = Box<dyn BoxableExpression<users::table, Sqlite, SqlType = Bool>>;

pub struct UserRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        UserRepository { pool, writer }
    }

    fn find_one(&self, predicate: UserFilter) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user = users::table
            .filter(predicate)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user.map(User::from))
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_user_by_id(&self, user_id: i32) -> Result<Option<User>> {
        self.find_one(Box::new(users::id.eq(user_id)))
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.find_one(Box::new(users::username.eq(username.to_string())))
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.find_one(Box::new(users::email.eq(email.to_string())))
    }

    async fn insert_user(&self, new_user: NewUserRecord) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let row: NewUserDB = new_user.into();
                let inserted = diesel::insert_into(users::table)
                    .values(&row)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(inserted))
            })
            .await
    }

    async fn update_profile(&self, user_id: i32, profile: ProfileUpdate) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let updated = diesel::update(users::table.find(user_id))
                    .set((
                        users::fullname.eq(profile.fullname),
                        users::username.eq(profile.username),
                        users::email.eq(profile.email),
                    ))
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(updated))
            })
            .await
    }

    async fn update_password_hash(&self, user_id: i32, password_hash: String) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::update(users::table.find(user_id))
                    .set(users::password_hash.eq(password_hash))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete_user(&self, user_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(users::table.find(user_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
