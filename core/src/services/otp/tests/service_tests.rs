//! Unit tests for the OTP lifecycle service

use std::sync::Arc;

use sp_shared::config::OtpConfig;

use crate::errors::{AuthError, DomainError};
use crate::services::otp::{OtpKey, OtpService};

use super::mocks::{MockEmailService, MockKeyValueStore};

const EMAIL: &str = "alice@example.com";

fn service(
    store: &Arc<MockKeyValueStore>,
    email: &Arc<MockEmailService>,
) -> OtpService<MockKeyValueStore, MockEmailService> {
    OtpService::new(store.clone(), email.clone(), OtpConfig::default())
}

#[tokio::test]
async fn test_send_otp_stores_code_and_cooldown() {
    let store = Arc::new(MockKeyValueStore::new(false));
    let email = Arc::new(MockEmailService::new(false));
    let otp = service(&store, &email);

    let result = otp.send_otp("Alice", EMAIL).await.unwrap();
    assert!(result.message_id.starts_with("mock-msg-"));

    let code_key = OtpKey::Code.for_email(EMAIL);
    let code = store.value_of(&code_key).unwrap();
    assert_eq!(code.len(), 4);
    assert_eq!(store.ttl_of(&code_key), Some(300));

    let cooldown_key = OtpKey::Cooldown.for_email(EMAIL);
    assert!(store.contains(&cooldown_key));
    assert_eq!(store.ttl_of(&cooldown_key), Some(60));

    let sent = email.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, EMAIL);
    assert_eq!(sent[0].subject, "Verify your email");
    assert_eq!(sent[0].template_id, "user-activation-mail");
    assert_eq!(sent[0].variables.get("name").map(String::as_str), Some("Alice"));
    assert_eq!(sent[0].variables.get("otp"), Some(&code));
}

#[tokio::test]
async fn test_reissue_overwrites_previous_code() {
    let store = Arc::new(MockKeyValueStore::new(false));
    let email = Arc::new(MockEmailService::new(false));
    let otp = service(&store, &email);

    otp.send_otp("Alice", EMAIL).await.unwrap();
    let first = email.last_otp_for(EMAIL).unwrap();

    otp.send_otp("Alice", EMAIL).await.unwrap();
    let second = email.last_otp_for(EMAIL).unwrap();

    assert_eq!(
        store.value_of(&OtpKey::Code.for_email(EMAIL)),
        Some(second.clone())
    );

    // The replaced code must not verify, even when it differs from the new one
    if first != second {
        let err = otp.verify_otp(EMAIL, &first).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::OtpMismatch { .. })
        ));
    }
    assert!(otp.verify_otp(EMAIL, &second).await.is_ok());
}

#[tokio::test]
async fn test_cooldown_is_conditionally_created() {
    let store = Arc::new(MockKeyValueStore::new(false));
    let email = Arc::new(MockEmailService::new(false));
    let otp = service(&store, &email);

    // A shorter remaining cooldown from a concurrent issuance
    store.put(&OtpKey::Cooldown.for_email(EMAIL), "true", 5);

    otp.send_otp("Alice", EMAIL).await.unwrap();

    assert_eq!(store.ttl_of(&OtpKey::Cooldown.for_email(EMAIL)), Some(5));
}

#[tokio::test]
async fn test_delivery_failure_propagates_but_keeps_code() {
    let store = Arc::new(MockKeyValueStore::new(false));
    let email = Arc::new(MockEmailService::new(true));
    let otp = service(&store, &email);

    let err = otp.send_otp("Alice", EMAIL).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::EmailDeliveryFailure { .. })
    ));

    // The stored code survives the failed delivery and ages out on its TTL
    assert!(store.contains(&OtpKey::Code.for_email(EMAIL)));
}

#[tokio::test]
async fn test_verify_accepts_exact_code() {
    let store = Arc::new(MockKeyValueStore::new(false));
    let email = Arc::new(MockEmailService::new(false));
    let otp = service(&store, &email);

    store.put(&OtpKey::Code.for_email(EMAIL), "4821", 300);

    otp.verify_otp(EMAIL, "4821").await.unwrap();

    assert!(!store.contains(&OtpKey::Code.for_email(EMAIL)));
    assert!(!store.contains(&OtpKey::Attempts.for_email(EMAIL)));
}

#[tokio::test]
async fn test_verify_trims_whitespace() {
    let store = Arc::new(MockKeyValueStore::new(false));
    let email = Arc::new(MockEmailService::new(false));
    let otp = service(&store, &email);

    store.put(&OtpKey::Code.for_email(EMAIL), "4821", 300);

    otp.verify_otp(EMAIL, " 4821 ").await.unwrap();

    assert!(!store.contains(&OtpKey::Code.for_email(EMAIL)));
}

#[tokio::test]
async fn test_verify_without_code_reports_expired() {
    let store = Arc::new(MockKeyValueStore::new(false));
    let email = Arc::new(MockEmailService::new(false));
    let otp = service(&store, &email);

    let err = otp.verify_otp(EMAIL, "1234").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::OtpExpiredOrInvalid)
    ));
}

#[tokio::test]
async fn test_three_mismatches_lock_the_account() {
    let store = Arc::new(MockKeyValueStore::new(false));
    let email = Arc::new(MockEmailService::new(false));
    let otp = service(&store, &email);

    store.put(&OtpKey::Code.for_email(EMAIL), "4821", 300);

    let err = otp.verify_otp(EMAIL, "0000").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::OtpMismatch { remaining: 2 })
    ));

    let err = otp.verify_otp(EMAIL, "0000").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::OtpMismatch { remaining: 1 })
    ));

    let err = otp.verify_otp(EMAIL, "0000").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::AccountLocked)));

    assert!(store.contains(&OtpKey::Lock.for_email(EMAIL)));
    assert!(!store.contains(&OtpKey::Code.for_email(EMAIL)));
    assert!(!store.contains(&OtpKey::Attempts.for_email(EMAIL)));

    // Locked is reported even for the right code
    let err = otp.verify_otp(EMAIL, "4821").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::AccountLocked)));
}

#[tokio::test]
async fn test_verify_while_locked_ignores_submitted_code() {
    let store = Arc::new(MockKeyValueStore::new(false));
    let email = Arc::new(MockEmailService::new(false));
    let otp = service(&store, &email);

    store.put(&OtpKey::Lock.for_email(EMAIL), "locked", 1800);
    store.put(&OtpKey::Code.for_email(EMAIL), "4821", 300);

    let err = otp.verify_otp(EMAIL, "4821").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::AccountLocked)));
}

#[test]
fn test_generated_codes_cover_range_uniformly() {
    const SAMPLES: usize = 10_000;
    let mut buckets = [0usize; 9];

    for _ in 0..SAMPLES {
        let code = OtpService::<MockKeyValueStore, MockEmailService>::generate_code();
        assert_eq!(code.len(), 4);
        let value: u32 = code.parse().expect("code must be numeric");
        assert!((1000..=9999).contains(&value));
        buckets[(value / 1000 - 1) as usize] += 1;
    }

    // Expected ~1111 per thousands bucket; allow a wide statistical margin
    for (digit, count) in buckets.iter().enumerate() {
        assert!(
            (900..=1350).contains(count),
            "bucket {} out of expected range: {}",
            digit + 1,
            count
        );
    }
}
