use chrono::{Duration, Utc};
use uuid::Uuid;

use campus_enrollment::domain::types::{Channel, RegistrationPolicy};
use campus_enrollment::error::EnrollmentError;
use campus_enrollment::usecase::otp::{IssueOtpUseCase, VerifyOtpUseCase};
use campus_enrollment::usecase::registration::{
    FinalizeRegistrationInput, FinalizeRegistrationUseCase, ResendOtpInput, ResendOtpUseCase,
    StartRegistrationInput, StartRegistrationUseCase, VerifyRegistrationInput,
    VerifyRegistrationUseCase,
};

use crate::helpers::{
    MockAccountRepo, MockNotifier, MockOtpRepo, MockSessionRepo, PlainHasher, test_account,
    test_session,
};

fn start_input() -> StartRegistrationInput {
    StartRegistrationInput {
        email: "asha@example.com".to_owned(),
        phone: "9000000001".to_owned(),
        first_name: "Asha".to_owned(),
        last_name: "Verma".to_owned(),
    }
}

fn start_usecase(
    accounts: MockAccountRepo,
    sessions: MockSessionRepo,
    otps: MockOtpRepo,
    notifier: MockNotifier,
) -> StartRegistrationUseCase<MockAccountRepo, MockSessionRepo, MockOtpRepo, MockNotifier> {
    StartRegistrationUseCase {
        accounts,
        sessions,
        issue_otp: IssueOtpUseCase {
            otps,
            notifier,
            policy: RegistrationPolicy::default(),
        },
        policy: RegistrationPolicy::default(),
    }
}

#[tokio::test]
async fn should_create_session_and_issue_code_per_channel() {
    let sessions = MockSessionRepo::empty();
    let sessions_handle = sessions.sessions_handle();
    let otps = MockOtpRepo::empty();
    let records = otps.records_handle();

    let uc = start_usecase(
        MockAccountRepo::empty(),
        sessions,
        otps,
        MockNotifier::working(),
    );
    let session = uc.execute(start_input()).await.unwrap();

    assert!(!session.is_email_verified);
    assert!(!session.is_phone_verified);
    assert!(session.expires_at > Utc::now());
    assert_eq!(session.id.get_version_num(), 7);
    assert_eq!(sessions_handle.lock().unwrap().len(), 1);

    let records = records.lock().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().any(|r| r.channel == Channel::Email));
    assert!(records.iter().any(|r| r.channel == Channel::Phone));
}

#[tokio::test]
async fn should_reject_duplicate_email_without_creating_session() {
    let sessions = MockSessionRepo::empty();
    let sessions_handle = sessions.sessions_handle();

    let uc = start_usecase(
        MockAccountRepo::new(vec![test_account()]),
        sessions,
        MockOtpRepo::empty(),
        MockNotifier::working(),
    );
    let result = uc.execute(start_input()).await;

    assert!(matches!(result, Err(EnrollmentError::DuplicateEmail)));
    assert!(sessions_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_duplicate_phone() {
    let mut existing = test_account();
    existing.email = "other@example.com".to_owned();

    let uc = start_usecase(
        MockAccountRepo::new(vec![existing]),
        MockSessionRepo::empty(),
        MockOtpRepo::empty(),
        MockNotifier::working(),
    );
    let result = uc.execute(start_input()).await;
    assert!(matches!(result, Err(EnrollmentError::DuplicatePhone)));
}

#[tokio::test]
async fn should_set_flag_per_verified_channel() {
    let session = test_session();
    let sessions = MockSessionRepo::new(vec![session.clone()]);
    let sessions_handle = sessions.sessions_handle();

    // Only the email code exists; the phone code is wrong by absence.
    let email_otp = crate::helpers::test_otp(Channel::Email, &session.email, "123456");

    let uc = VerifyRegistrationUseCase {
        sessions,
        verify_otp: VerifyOtpUseCase {
            otps: MockOtpRepo::new(vec![email_otp]),
            policy: RegistrationPolicy::default(),
        },
    };
    let outcome = uc
        .execute(VerifyRegistrationInput {
            session_id: session.id,
            email_code: "123456".to_owned(),
            phone_code: "999999".to_owned(),
        })
        .await
        .unwrap();

    assert!(outcome.email.is_ok());
    assert!(matches!(outcome.phone, Err(EnrollmentError::OtpNotFound)));
    assert!(!outcome.is_fully_verified());

    let sessions = sessions_handle.lock().unwrap();
    assert!(sessions[0].is_email_verified);
    assert!(!sessions[0].is_phone_verified);
}

#[tokio::test]
async fn should_skip_already_verified_channel() {
    let mut session = test_session();
    session.is_email_verified = true;
    let phone_otp = crate::helpers::test_otp(Channel::Phone, &session.phone, "654321");

    let uc = VerifyRegistrationUseCase {
        sessions: MockSessionRepo::new(vec![session.clone()]),
        verify_otp: VerifyOtpUseCase {
            otps: MockOtpRepo::new(vec![phone_otp]),
            policy: RegistrationPolicy::default(),
        },
    };
    let outcome = uc
        .execute(VerifyRegistrationInput {
            session_id: session.id,
            email_code: "ignored".to_owned(),
            phone_code: "654321".to_owned(),
        })
        .await
        .unwrap();

    assert!(outcome.is_fully_verified());
}

#[tokio::test]
async fn should_return_not_found_for_unknown_session() {
    let uc = VerifyRegistrationUseCase {
        sessions: MockSessionRepo::empty(),
        verify_otp: VerifyOtpUseCase {
            otps: MockOtpRepo::empty(),
            policy: RegistrationPolicy::default(),
        },
    };
    let result = uc
        .execute(VerifyRegistrationInput {
            session_id: Uuid::new_v4(),
            email_code: "123456".to_owned(),
            phone_code: "123456".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(EnrollmentError::SessionNotFound)));
}

#[tokio::test]
async fn should_resend_codes_for_both_channels() {
    let otps = MockOtpRepo::empty();
    let records = otps.records_handle();

    let uc = ResendOtpUseCase {
        issue_otp: IssueOtpUseCase {
            otps,
            notifier: MockNotifier::working(),
            policy: RegistrationPolicy::default(),
        },
    };
    uc.execute(ResendOtpInput {
        email: "asha@example.com".to_owned(),
        phone: "9000000001".to_owned(),
    })
    .await
    .unwrap();

    assert_eq!(records.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn should_refuse_finalize_before_both_flags() {
    let mut session = test_session();
    session.is_email_verified = true; // phone still pending
    let sessions = MockSessionRepo::new(vec![session.clone()]);
    let sessions_handle = sessions.sessions_handle();
    let accounts = sessions.accounts_handle();

    let uc = FinalizeRegistrationUseCase {
        sessions,
        hasher: PlainHasher,
    };
    let result = uc
        .execute(FinalizeRegistrationInput {
            session_id: session.id,
            password: "hunter2".to_owned(),
        })
        .await;

    assert!(matches!(
        result,
        Err(EnrollmentError::VerificationIncomplete)
    ));
    assert_eq!(sessions_handle.lock().unwrap().len(), 1, "session kept");
    assert!(accounts.lock().unwrap().is_empty(), "no account created");
}

#[tokio::test]
async fn should_refuse_finalize_of_expired_session() {
    let mut session = test_session();
    session.is_email_verified = true;
    session.is_phone_verified = true;
    session.expires_at = Utc::now() - Duration::minutes(1);

    let uc = FinalizeRegistrationUseCase {
        sessions: MockSessionRepo::new(vec![session.clone()]),
        hasher: PlainHasher,
    };
    let result = uc
        .execute(FinalizeRegistrationInput {
            session_id: session.id,
            password: "hunter2".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(EnrollmentError::SessionExpired)));
}

#[tokio::test]
async fn should_create_account_and_drop_session_on_finalize() {
    let mut session = test_session();
    session.is_email_verified = true;
    session.is_phone_verified = true;
    let sessions = MockSessionRepo::new(vec![session.clone()]);
    let sessions_handle = sessions.sessions_handle();
    let accounts = sessions.accounts_handle();

    let uc = FinalizeRegistrationUseCase {
        sessions,
        hasher: PlainHasher,
    };
    let account = uc
        .execute(FinalizeRegistrationInput {
            session_id: session.id,
            password: "hunter2".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(account.email, session.email);
    assert_eq!(account.phone, session.phone);
    assert_eq!(account.password_hash, "hashed:hunter2");
    assert!(account.is_active);
    assert!(!account.is_admitted);
    assert_eq!(account.id.get_version_num(), 7);

    assert!(sessions_handle.lock().unwrap().is_empty());
    let accounts = accounts.lock().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, account.id);
}

#[tokio::test]
async fn should_create_empty_application_and_profiles_on_finalize() {
    let mut session = test_session();
    session.is_email_verified = true;
    session.is_phone_verified = true;
    let sessions = MockSessionRepo::new(vec![session.clone()]);
    let applications = sessions.applications_handle();
    let students = sessions.student_profiles_handle();
    let educations = sessions.education_profiles_handle();

    let uc = FinalizeRegistrationUseCase {
        sessions,
        hasher: PlainHasher,
    };
    let account = uc
        .execute(FinalizeRegistrationInput {
            session_id: session.id,
            password: "hunter2".to_owned(),
        })
        .await
        .unwrap();

    let applications = applications.lock().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].account_id, account.id);
    assert!(!applications[0].is_complete(), "no courses selected yet");
    assert_eq!(applications[0].fee_amount, 0);
    assert!(!applications[0].is_fee_paid);

    let students = students.lock().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].account_id, account.id);
    assert_eq!(
        students[0].application_no,
        format!("PWC{}00001", Utc::now().format("%Y"))
    );

    let educations = educations.lock().unwrap();
    assert_eq!(educations.len(), 1);
    assert_eq!(educations[0].account_id, account.id);
    assert!(!educations[0].is_appearing);
}

#[tokio::test]
async fn should_return_not_found_when_finalizing_unknown_session() {
    let uc = FinalizeRegistrationUseCase {
        sessions: MockSessionRepo::empty(),
        hasher: PlainHasher,
    };
    let result = uc
        .execute(FinalizeRegistrationInput {
            session_id: Uuid::new_v4(),
            password: "hunter2".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(EnrollmentError::SessionNotFound)));
}
