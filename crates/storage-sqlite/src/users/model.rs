//! Database models for users.

use diesel::prelude::*;

use spendwise_core::users::{NewUserRecord, User};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: i32,
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub id: Option<i32>,
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub password_hash: String,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            username: db.username,
            fullname: db.fullname,
            email: db.email,
            password_hash: db.password_hash,
        }
    }
}

impl From<NewUserRecord> for NewUserDB {
    fn from(record: NewUserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            fullname: record.fullname,
            email: record.email,
            password_hash: record.password_hash,
        }
    }
}
