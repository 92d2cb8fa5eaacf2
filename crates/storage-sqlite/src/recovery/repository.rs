use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use super::model::RecoveryCodeDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::recovery_codes;
use spendwise_core::recovery::{RecoveryCode, RecoveryCodeRepositoryTrait};
use spendwise_core::Result;

pub struct RecoveryCodeRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl RecoveryCodeRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        RecoveryCodeRepository { pool, writer }
    }
}

#[async_trait]
impl RecoveryCodeRepositoryTrait for RecoveryCodeRepository {
    fn get_code(&self, email: &str) -> Result<Option<RecoveryCode>> {
        let mut conn = get_connection(&self.pool)?;
        let row = recovery_codes::table
            .find(email)
            .select(RecoveryCodeDB::as_select())
            .first::<RecoveryCodeDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(RecoveryCode::from))
    }

    async fn upsert_code(&self, code: RecoveryCode) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let row: RecoveryCodeDB = code.into();
                diesel::replace_into(recovery_codes::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete_code(&self, email: &str) -> Result<usize> {
        let email = email.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(recovery_codes::table.find(email))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn delete_expired(&self, now: NaiveDateTime) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(recovery_codes::table.filter(recovery_codes::expires_at.lt(now)))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
