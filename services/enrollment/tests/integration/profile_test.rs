use uuid::Uuid;

use campus_enrollment::error::EnrollmentError;
use campus_enrollment::usecase::profile::{
    EducationProfileUpdate, GetAccountUseCase, GetStudentProfileUseCase, StudentProfileUpdate,
    UpdateEducationProfileUseCase, UpdateStudentProfileUseCase,
};

use crate::helpers::{
    MockAccountRepo, MockProfileRepo, empty_education_profile, empty_student_profile, test_account,
};

#[tokio::test]
async fn should_return_account_for_known_id() {
    let account = test_account();
    let uc = GetAccountUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
    };
    let found = uc.execute(account.id).await.unwrap();
    assert_eq!(found.email, account.email);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_account() {
    let uc = GetAccountUseCase {
        accounts: MockAccountRepo::empty(),
    };
    let result = uc.execute(Uuid::new_v4()).await;
    assert!(matches!(result, Err(EnrollmentError::AccountNotFound)));
}

#[tokio::test]
async fn should_replace_student_profile_but_keep_application_no() {
    let account_id = Uuid::new_v4();
    let profile = empty_student_profile(account_id);
    let application_no = profile.application_no.clone();

    let uc = UpdateStudentProfileUseCase {
        profiles: MockProfileRepo::new(vec![profile], vec![]),
    };
    let updated = uc
        .execute(
            account_id,
            StudentProfileUpdate {
                gender: Some("female".to_owned()),
                caste: Some("general".to_owned()),
                is_ews: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.application_no, application_no);
    assert_eq!(updated.gender.as_deref(), Some("female"));
    assert!(updated.is_ews);
    // Full replace: an omitted field comes back null.
    assert!(updated.father_name.is_none());
}

#[tokio::test]
async fn should_return_not_found_when_profile_missing() {
    let uc = GetStudentProfileUseCase {
        profiles: MockProfileRepo::new(vec![], vec![]),
    };
    let result = uc.execute(Uuid::new_v4()).await;
    assert!(matches!(result, Err(EnrollmentError::ProfileNotFound)));
}

#[tokio::test]
async fn should_compute_totals_from_submitted_marks() {
    let account_id = Uuid::new_v4();
    let repo = MockProfileRepo::new(vec![], vec![empty_education_profile(account_id)]);
    let educations = repo.educations_handle();

    let uc = UpdateEducationProfileUseCase { profiles: repo };
    let updated = uc
        .execute(
            account_id,
            EducationProfileUpdate {
                tenth_marks: Some(vec![80, 90, 100]),
                twelfth_marks: Some(vec![70, 71]),
                stream: Some("science".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.tenth_total, Some(90));
    assert_eq!(updated.twelfth_total, Some(71));
    assert_eq!(educations.lock().unwrap()[0].tenth_total, Some(90));
}

#[tokio::test]
async fn should_leave_twelfth_fields_alone_while_appearing() {
    let account_id = Uuid::new_v4();
    let mut stored = empty_education_profile(account_id);
    stored.twelfth_school_name = Some("St. Mary's".to_owned());
    stored.twelfth_total = Some(88);

    let uc = UpdateEducationProfileUseCase {
        profiles: MockProfileRepo::new(vec![], vec![stored]),
    };
    let updated = uc
        .execute(
            account_id,
            EducationProfileUpdate {
                tenth_marks: Some(vec![75, 85]),
                is_appearing: true,
                // Sent but must be ignored while appearing.
                twelfth_school_name: Some("Elsewhere".to_owned()),
                twelfth_marks: Some(vec![1, 2]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.is_appearing);
    assert_eq!(updated.twelfth_school_name.as_deref(), Some("St. Mary's"));
    assert_eq!(updated.twelfth_total, Some(88));
    assert_eq!(updated.tenth_total, Some(80));
}
