#![allow(dead_code)]

//! Test infrastructure for acct-server API tests

use acct_core::{AccountService, Notifier, Result as CoreErrorResult};
use acct_db::AccountRepository;
use acct_server::{AppState, Metrics};

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tokio::sync::Mutex;

pub const REDIRECT_URL: &str = "http://localhost:3000/verified";

pub const ACTIVE_ID: i64 = 1;
pub const ACTIVE_EMAIL: &str = "mw310@naver.com";
pub const ACTIVE_CODE: &str = "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa";

pub const PENDING_ID: i64 = 2;
pub const PENDING_EMAIL: &str = "mw410@naver.com";
pub const PENDING_CODE: &str = "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaab";

/// One notification as handed to the notifier
#[derive(Debug, Clone)]
pub struct SentNotice {
    pub email: String,
    pub code: String,
    pub account_id: i64,
}

/// Notifier that keeps every message in memory
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<SentNotice>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(
        &self,
        recipient_email: &str,
        certification_code: &str,
        account_id: i64,
    ) -> CoreErrorResult<()> {
        self.sent.lock().await.push(SentNotice {
            email: recipient_email.to_string(),
            code: certification_code.to_string(),
            account_id,
        });
        Ok(())
    }
}

/// In-memory SQLite; a single connection so every query sees the same database
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    acct_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> (AppState, Arc<RecordingNotifier>) {
    let pool = create_test_pool().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let store = Arc::new(AccountRepository::new(pool.clone()));

    let state = AppState {
        pool,
        service: AccountService::new(store, notifier.clone()),
        metrics: Metrics::new(),
        verification_redirect_url: REDIRECT_URL.to_string(),
    };

    (state, notifier)
}

/// Insert an account row directly
pub async fn insert_test_account(
    pool: &SqlitePool,
    id: i64,
    email: &str,
    status: &str,
    certification_code: &str,
) {
    let now = chrono::Utc::now().timestamp_millis();

    sqlx::query(
        r#"
            INSERT INTO users (
                id, email, nickname, address, status, certification_code,
                last_login_at, version, created_at, updated_at
            ) VALUES (?, ?, 'manu', 'Seoul', ?, ?, NULL, 1, ?, ?)
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(status)
    .bind(certification_code)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test account");
}

/// Seed one ACTIVE (id 1) and one PENDING (id 2) account
pub async fn seed_accounts(pool: &SqlitePool) {
    insert_test_account(pool, ACTIVE_ID, ACTIVE_EMAIL, "ACTIVE", ACTIVE_CODE).await;
    insert_test_account(pool, PENDING_ID, PENDING_EMAIL, "PENDING", PENDING_CODE).await;
}

pub async fn account_status(pool: &SqlitePool, id: i64) -> String {
    let row: (String,) = sqlx::query_as("SELECT status FROM users WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("Failed to read account status");
    row.0
}
