use sj_db::{create_memory_pool, run_migrations, Backend, DbPool};

/// Fresh in-memory database with all migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = create_memory_pool()
        .await
        .expect("in-memory pool should open");
    run_migrations(&pool, Backend::Sqlite)
        .await
        .expect("migrations should apply");
    pool
}
