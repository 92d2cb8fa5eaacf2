//! Database model for recovery codes.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use spendwise_core::recovery::RecoveryCode;

#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::recovery_codes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RecoveryCodeDB {
    pub email: String,
    pub code: String,
    pub expires_at: NaiveDateTime,
}

impl From<RecoveryCodeDB> for RecoveryCode {
    fn from(db: RecoveryCodeDB) -> Self {
        Self {
            email: db.email,
            code: db.code,
            expires_at: db.expires_at,
        }
    }
}

impl From<RecoveryCode> for RecoveryCodeDB {
    fn from(code: RecoveryCode) -> Self {
        Self {
            email: code.email,
            code: code.code,
            expires_at: code.expires_at,
        }
    }
}
