use std::sync::Arc;

use spendwise_storage_sqlite::{create_pool, init, run_migrations, spawn_writer, DbPool, WriteHandle};
use tempfile::TempDir;

/// A migrated database in a temporary directory. Keep `_dir` alive for the test.
pub struct TestDb {
    pub _dir: TempDir,
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
}

/// Must be called from inside a Tokio runtime (the writer is a spawned task).
pub fn setup() -> TestDb {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_file = dir.path().join("nested").join("spendwise.db");
    let db_path = init(db_file.to_str().expect("utf-8 path")).expect("init db");
    let pool = create_pool(&db_path).expect("create pool");
    run_migrations(&pool).expect("migrations");
    let writer = spawn_writer(pool.as_ref().clone());
    TestDb {
        _dir: dir,
        pool,
        writer,
    }
}
