use chrono::{Duration, Utc};

use campus_enrollment::domain::types::{Channel, RegistrationPolicy};
use campus_enrollment::error::EnrollmentError;
use campus_enrollment::usecase::otp::{
    IssueOtpInput, IssueOtpUseCase, VerifyOtpInput, VerifyOtpUseCase,
};

use crate::helpers::{MockNotifier, MockOtpRepo, test_otp};

fn verify_input(code: &str) -> VerifyOtpInput {
    VerifyOtpInput {
        channel: Channel::Email,
        identifier: "asha@example.com".to_owned(),
        code: code.to_owned(),
    }
}

#[tokio::test]
async fn should_issue_and_dispatch_six_digit_code() {
    let repo = MockOtpRepo::empty();
    let records = repo.records_handle();
    let notifier = MockNotifier::working();
    let sent = notifier.sent_handle();

    let uc = IssueOtpUseCase {
        otps: repo,
        notifier,
        policy: RegistrationPolicy::default(),
    };
    let record = uc
        .execute(IssueOtpInput {
            channel: Channel::Email,
            identifier: "asha@example.com".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(record.code.len(), 6);
    assert!(record.code.bytes().all(|b| b.is_ascii_digit()));
    assert!(record.expires_at > Utc::now());

    assert_eq!(records.lock().unwrap().len(), 1);
    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, Channel::Email);
    assert_eq!(sent[0].2, record.code);
}

#[tokio::test]
async fn should_issue_even_when_dispatch_fails() {
    let repo = MockOtpRepo::empty();
    let records = repo.records_handle();

    let uc = IssueOtpUseCase {
        otps: repo,
        notifier: MockNotifier::broken(),
        policy: RegistrationPolicy::default(),
    };
    let result = uc
        .execute(IssueOtpInput {
            channel: Channel::Phone,
            identifier: "9000000001".to_owned(),
        })
        .await;

    assert!(result.is_ok(), "dispatch failure must not propagate");
    assert_eq!(records.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_consume_code_on_successful_verify() {
    let record = test_otp(Channel::Email, "asha@example.com", "123456");
    let repo = MockOtpRepo::new(vec![record]);
    let records = repo.records_handle();

    let uc = VerifyOtpUseCase {
        otps: repo,
        policy: RegistrationPolicy::default(),
    };
    uc.execute(verify_input("123456")).await.unwrap();
    assert!(records.lock().unwrap().is_empty(), "code should be deleted");

    // A second verify of the same code finds nothing.
    let result = uc.execute(verify_input("123456")).await;
    assert!(matches!(result, Err(EnrollmentError::OtpNotFound)));
}

#[tokio::test]
async fn should_return_not_found_without_any_code() {
    let uc = VerifyOtpUseCase {
        otps: MockOtpRepo::empty(),
        policy: RegistrationPolicy::default(),
    };
    let result = uc.execute(verify_input("123456")).await;
    assert!(matches!(result, Err(EnrollmentError::OtpNotFound)));
}

#[tokio::test]
async fn should_increment_attempts_on_mismatch_without_touching_code() {
    let record = test_otp(Channel::Email, "asha@example.com", "123456");
    let expires_at = record.expires_at;
    let repo = MockOtpRepo::new(vec![record]);
    let records = repo.records_handle();

    let uc = VerifyOtpUseCase {
        otps: repo,
        policy: RegistrationPolicy::default(),
    };
    let result = uc.execute(verify_input("654321")).await;
    assert!(matches!(result, Err(EnrollmentError::OtpMismatch)));

    let records = records.lock().unwrap();
    assert_eq!(records[0].attempt_count, 1);
    assert_eq!(records[0].code, "123456");
    assert_eq!(records[0].expires_at, expires_at);
}

#[tokio::test]
async fn should_lock_fourth_submission_after_three_failures() {
    let record = test_otp(Channel::Email, "asha@example.com", "123456");
    let uc = VerifyOtpUseCase {
        otps: MockOtpRepo::new(vec![record]),
        policy: RegistrationPolicy::default(), // max_otp_attempts = 3
    };

    for _ in 0..3 {
        let result = uc.execute(verify_input("000000")).await;
        assert!(matches!(result, Err(EnrollmentError::OtpMismatch)));
    }

    // Even the correct code is rejected once locked.
    let result = uc.execute(verify_input("123456")).await;
    assert!(matches!(result, Err(EnrollmentError::OtpLocked)));
}

#[tokio::test]
async fn should_reject_expired_code() {
    let mut record = test_otp(Channel::Email, "asha@example.com", "123456");
    record.expires_at = Utc::now() - Duration::seconds(1);

    let uc = VerifyOtpUseCase {
        otps: MockOtpRepo::new(vec![record]),
        policy: RegistrationPolicy::default(),
    };
    let result = uc.execute(verify_input("123456")).await;
    assert!(matches!(result, Err(EnrollmentError::OtpExpired)));
}

#[tokio::test]
async fn should_verify_against_most_recent_code_only() {
    let mut old = test_otp(Channel::Email, "asha@example.com", "111111");
    old.created_at = Utc::now() - Duration::minutes(2);
    let fresh = test_otp(Channel::Email, "asha@example.com", "222222");

    let uc = VerifyOtpUseCase {
        otps: MockOtpRepo::new(vec![old, fresh]),
        policy: RegistrationPolicy::default(),
    };

    // The superseded code no longer matches.
    let result = uc.execute(verify_input("111111")).await;
    assert!(matches!(result, Err(EnrollmentError::OtpMismatch)));

    uc.execute(verify_input("222222")).await.unwrap();
}
