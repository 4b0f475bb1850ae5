use acct_core::NewAccount;
use acct_db::AccountRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    acct_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts an account and, if requested, flips it to ACTIVE with raw SQL
pub async fn insert_account(
    repo: &AccountRepository,
    pool: &SqlitePool,
    account: &NewAccount,
    active: bool,
) -> i64 {
    let stored = repo.insert(account).await.expect("Failed to insert account");

    if active {
        sqlx::query("UPDATE users SET status = 'ACTIVE' WHERE id = ?")
            .bind(stored.id)
            .execute(pool)
            .await
            .expect("Failed to activate account");
    }

    stored.id
}
