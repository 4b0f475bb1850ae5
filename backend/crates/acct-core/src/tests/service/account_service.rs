use super::fakes::{
    ACTIVE_EMAIL, FailingNotifier, InMemoryAccountStore, PENDING_CODE, PENDING_EMAIL,
    RecordingNotifier, seeded_store, service_with,
};

use crate::{AccountCreate, AccountStatus, AccountUpdate, AuthenticatedIdentity, CoreError};

use std::sync::Arc;

use googletest::prelude::*;

fn registration(email: &str) -> AccountCreate {
    AccountCreate {
        email: email.to_string(),
        nickname: "manu2".to_string(),
        address: "Gyeongi".to_string(),
    }
}

// =========================================================================
// Public lookups
// =========================================================================

#[tokio::test]
async fn given_active_account_when_get_by_email_then_found() {
    // Given
    let service = service_with(seeded_store().await, Arc::new(RecordingNotifier::default()));

    // When
    let result = service.get_by_email(ACTIVE_EMAIL).await;

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(result.unwrap().nickname, eq("manu"));
}

#[tokio::test]
async fn given_pending_account_when_get_by_email_then_not_found() {
    // Given
    let service = service_with(seeded_store().await, Arc::new(RecordingNotifier::default()));

    // When
    let result = service.get_by_email(PENDING_EMAIL).await;

    // Then
    assert!(matches!(
        result,
        Err(CoreError::ResourceNotFound { resource: "Users", ref id, .. }) if id == PENDING_EMAIL
    ));
}

#[tokio::test]
async fn given_active_account_when_get_by_id_then_found() {
    // Given
    let service = service_with(seeded_store().await, Arc::new(RecordingNotifier::default()));

    // When
    let result = service.get_by_id(1).await;

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(result.unwrap().nickname, eq("manu"));
}

#[tokio::test]
async fn given_pending_account_when_get_by_id_then_not_found() {
    // Given
    let service = service_with(seeded_store().await, Arc::new(RecordingNotifier::default()));

    // When
    let result = service.get_by_id(2).await;

    // Then
    assert!(matches!(
        result,
        Err(CoreError::ResourceNotFound { ref id, .. }) if id == "2"
    ));
}

#[tokio::test]
async fn given_unknown_id_when_get_by_id_then_not_found_message_names_users() {
    // Given
    let service = service_with(seeded_store().await, Arc::new(RecordingNotifier::default()));

    // When
    let error = service.get_by_id(1123132121).await.unwrap_err();

    // Then
    assert!(
        error
            .to_string()
            .starts_with("Users에서 ID 1123132121를 찾을 수 없습니다.")
    );
}

// =========================================================================
// Self view
// =========================================================================

#[tokio::test]
async fn given_active_caller_when_get_self_then_returns_own_account() {
    // Given
    let service = service_with(seeded_store().await, Arc::new(RecordingNotifier::default()));
    let identity = AuthenticatedIdentity::new(ACTIVE_EMAIL);

    // When
    let account = service.get_self(&identity).await.unwrap();

    // Then
    assert_that!(account.id, eq(1));
    assert_that!(account.address, eq("Seoul"));
}

#[tokio::test]
async fn given_pending_caller_when_get_self_then_not_found() {
    // Given
    let service = service_with(seeded_store().await, Arc::new(RecordingNotifier::default()));
    let identity = AuthenticatedIdentity::new(PENDING_EMAIL);

    // When
    let result = service.get_self(&identity).await;

    // Then
    assert!(matches!(result, Err(CoreError::ResourceNotFound { .. })));
}

// =========================================================================
// Create
// =========================================================================

#[tokio::test]
async fn given_registration_when_create_then_pending_with_code_and_notice_sent() {
    // Given
    let store = seeded_store().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let service = service_with(store.clone(), notifier.clone());

    // When
    let account = service.create(registration("mw310@kakao.com")).await.unwrap();

    // Then
    assert_that!(account.status, eq(AccountStatus::Pending));
    assert_that!(account.certification_code.len(), eq(36));
    assert_that!(account.last_login_at, none());

    let sent = notifier.sent().await;
    assert_that!(sent.len(), eq(1));
    assert_that!(sent[0].recipient_email, eq("mw310@kakao.com"));
    assert_that!(sent[0].certification_code, eq(&account.certification_code));
    assert_that!(sent[0].account_id, eq(account.id));
}

#[tokio::test]
async fn given_two_registrations_when_create_then_codes_differ() {
    // Given
    let service = service_with(
        Arc::new(InMemoryAccountStore::default()),
        Arc::new(RecordingNotifier::default()),
    );

    // When
    let first = service.create(registration("a@x.com")).await.unwrap();
    let second = service.create(registration("b@x.com")).await.unwrap();

    // Then
    assert_that!(first.certification_code, not(eq(&second.certification_code)));
    assert_that!(first.id, not(eq(second.id)));
}

#[tokio::test]
async fn given_duplicate_email_when_create_then_conflict_and_single_account() {
    // Given
    let store = Arc::new(InMemoryAccountStore::default());
    let service = service_with(store.clone(), Arc::new(RecordingNotifier::default()));
    service.create(registration("a@x.com")).await.unwrap();

    // When
    let result = service.create(registration("a@x.com")).await;

    // Then
    assert!(matches!(result, Err(CoreError::Conflict { .. })));
    assert_that!(store.count().await, eq(1));
}

#[tokio::test]
async fn given_failing_notifier_when_create_then_account_still_created() {
    // Given
    let store = Arc::new(InMemoryAccountStore::default());
    let service = service_with(store.clone(), Arc::new(FailingNotifier));

    // When
    let result = service.create(registration("a@x.com")).await;

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(store.count().await, eq(1));
}

// =========================================================================
// Update
// =========================================================================

#[tokio::test]
async fn given_existing_account_when_update_then_only_profile_fields_change() {
    // Given
    let store = seeded_store().await;
    let service = service_with(store.clone(), Arc::new(RecordingNotifier::default()));
    let before = store.get(1).await.unwrap();

    // When
    service
        .update(
            1,
            AccountUpdate {
                nickname: "manu3".to_string(),
                address: "Incheon".to_string(),
            },
        )
        .await
        .unwrap();

    // Then
    let after = service.get_by_id(1).await.unwrap();
    assert_that!(after.nickname, eq("manu3"));
    assert_that!(after.address, eq("Incheon"));
    assert_that!(after.id, eq(before.id));
    assert_that!(after.email, eq(&before.email));
    assert_that!(after.status, eq(before.status));
    assert_that!(after.certification_code, eq(&before.certification_code));
}

#[tokio::test]
async fn given_pending_account_when_update_then_allowed() {
    // Given
    let store = seeded_store().await;
    let service = service_with(store.clone(), Arc::new(RecordingNotifier::default()));

    // When
    let result = service
        .update(
            2,
            AccountUpdate {
                nickname: "pending-nick".to_string(),
                address: "Busan".to_string(),
            },
        )
        .await;

    // Then
    assert_that!(result, ok(anything()));
    let stored = store.get(2).await.unwrap();
    assert_that!(stored.nickname, eq("pending-nick"));
    assert_that!(stored.status, eq(AccountStatus::Pending));
}

#[tokio::test]
async fn given_unknown_id_when_update_then_not_found() {
    // Given
    let service = service_with(seeded_store().await, Arc::new(RecordingNotifier::default()));

    // When
    let result = service
        .update(
            99,
            AccountUpdate {
                nickname: "x".to_string(),
                address: "y".to_string(),
            },
        )
        .await;

    // Then
    assert!(matches!(result, Err(CoreError::ResourceNotFound { .. })));
}

#[tokio::test]
async fn given_active_caller_when_update_self_then_own_account_changes() {
    // Given
    let store = seeded_store().await;
    let service = service_with(store.clone(), Arc::new(RecordingNotifier::default()));
    let identity = AuthenticatedIdentity::new(ACTIVE_EMAIL);

    // When
    let account = service
        .update_self(
            &identity,
            AccountUpdate {
                nickname: "manu-4".to_string(),
                address: "Pangyo".to_string(),
            },
        )
        .await
        .unwrap();

    // Then
    assert_that!(account.id, eq(1));
    assert_that!(account.address, eq("Pangyo"));
    assert_that!(store.get(2).await.unwrap().address, eq("Seoul"));
}

#[tokio::test]
async fn given_pending_caller_when_update_self_then_not_found() {
    // Given
    let store = seeded_store().await;
    let service = service_with(store.clone(), Arc::new(RecordingNotifier::default()));
    let identity = AuthenticatedIdentity::new(PENDING_EMAIL);

    // When
    let result = service
        .update_self(
            &identity,
            AccountUpdate {
                nickname: "x".to_string(),
                address: "y".to_string(),
            },
        )
        .await;

    // Then
    assert!(matches!(result, Err(CoreError::ResourceNotFound { .. })));
    assert_that!(store.get(2).await.unwrap().nickname, eq("manu"));
}

// =========================================================================
// Login
// =========================================================================

#[tokio::test]
async fn given_account_when_login_then_last_login_set_and_nothing_else_changes() {
    // Given
    let store = seeded_store().await;
    let service = service_with(store.clone(), Arc::new(RecordingNotifier::default()));
    let before = store.get(1).await.unwrap();

    // When
    service.login(1).await.unwrap();

    // Then
    let after = service.get_by_id(1).await.unwrap();
    assert_that!(after.last_login_at, some(anything()));
    assert!(after.last_login_at.unwrap().timestamp_millis() > 0);
    assert_that!(after.nickname, eq(&before.nickname));
    assert_that!(after.address, eq(&before.address));
    assert_that!(after.status, eq(before.status));
    assert_that!(after.certification_code, eq(&before.certification_code));
}

#[tokio::test]
async fn given_repeated_logins_then_last_login_strictly_increases() {
    // Given
    let service = service_with(seeded_store().await, Arc::new(RecordingNotifier::default()));

    // When
    let first = service.login(1).await.unwrap().last_login_at.unwrap();
    let second = service.login(1).await.unwrap().last_login_at.unwrap();

    // Then
    assert!(second > first);
}

#[tokio::test]
async fn given_unknown_id_when_login_then_not_found() {
    // Given
    let service = service_with(seeded_store().await, Arc::new(RecordingNotifier::default()));

    // When
    let result = service.login(404).await;

    // Then
    assert!(matches!(result, Err(CoreError::ResourceNotFound { .. })));
}

// =========================================================================
// Verification
// =========================================================================

#[tokio::test]
async fn given_pending_account_when_verified_with_correct_code_then_active() {
    // Given
    let service = service_with(seeded_store().await, Arc::new(RecordingNotifier::default()));

    // When
    service.verify_email(2, PENDING_CODE).await.unwrap();

    // Then
    let account = service.get_by_id(2).await.unwrap();
    assert_that!(account.status, eq(AccountStatus::Active));
}

#[tokio::test]
async fn given_pending_account_when_verified_with_wrong_code_then_rejected_and_unchanged() {
    // Given
    let store = seeded_store().await;
    let service = service_with(store.clone(), Arc::new(RecordingNotifier::default()));

    // When
    let result = service
        .verify_email(2, "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaac")
        .await;

    // Then
    assert!(matches!(
        result,
        Err(CoreError::CertificationCodeNotMatched { account_id: 2, .. })
    ));
    let stored = store.get(2).await.unwrap();
    assert_that!(stored.status, eq(AccountStatus::Pending));
    assert_that!(stored.version, eq(1));
}

#[tokio::test]
async fn given_unknown_id_when_verified_then_not_found_not_mismatch() {
    // Given
    let service = service_with(seeded_store().await, Arc::new(RecordingNotifier::default()));

    // When
    let result = service.verify_email(999, PENDING_CODE).await;

    // Then
    assert!(matches!(result, Err(CoreError::ResourceNotFound { .. })));
}

#[tokio::test]
async fn given_active_account_when_reverified_with_correct_code_then_noop() {
    // Given
    let store = seeded_store().await;
    let service = service_with(store.clone(), Arc::new(RecordingNotifier::default()));
    service.verify_email(2, PENDING_CODE).await.unwrap();
    let activated = store.get(2).await.unwrap();

    // When
    let result = service.verify_email(2, PENDING_CODE).await;

    // Then
    assert_that!(result, ok(anything()));
    let stored = store.get(2).await.unwrap();
    assert_that!(stored.status, eq(AccountStatus::Active));
    assert_that!(stored.version, eq(activated.version));
}

#[tokio::test]
async fn given_active_account_when_reverified_with_wrong_code_then_rejected_and_stays_active() {
    // Given
    let store = seeded_store().await;
    let service = service_with(store.clone(), Arc::new(RecordingNotifier::default()));

    // When
    let result = service.verify_email(1, "wrong").await;

    // Then
    assert!(matches!(
        result,
        Err(CoreError::CertificationCodeNotMatched { .. })
    ));
    assert_that!(store.get(1).await.unwrap().status, eq(AccountStatus::Active));
}

// =========================================================================
// End to end
// =========================================================================

#[tokio::test]
async fn given_new_registration_when_verified_then_visible_publicly_and_to_self() {
    // Given
    let notifier = Arc::new(RecordingNotifier::default());
    let service = service_with(Arc::new(InMemoryAccountStore::default()), notifier.clone());

    // When: registered
    let created = service.create(registration("a@x.com")).await.unwrap();

    // Then: invisible while pending
    assert_that!(created.status, eq(AccountStatus::Pending));
    assert!(matches!(
        service.get_by_email("a@x.com").await,
        Err(CoreError::ResourceNotFound { .. })
    ));

    // When: verified with the code that was sent
    let code = notifier.sent().await[0].certification_code.clone();
    let verified = service.verify_email(created.id, &code).await.unwrap();

    // Then: visible to everyone, and to the owner with the address
    assert_that!(verified.status, eq(AccountStatus::Active));
    let public = service.get_by_email("a@x.com").await.unwrap();
    assert_that!(public.id, eq(created.id));
    let own = service
        .get_self(&AuthenticatedIdentity::new("a@x.com"))
        .await
        .unwrap();
    assert_that!(own.address, eq("Gyeongi"));
}
