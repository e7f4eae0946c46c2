use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::repository::{AccountRepository, ProfileRepository};
use crate::domain::types::{Account, EducationProfile, StudentProfile, mean_percentage};
use crate::error::EnrollmentError;

// ── Account ──────────────────────────────────────────────────────────────────

pub struct GetAccountUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> GetAccountUseCase<A> {
    pub async fn execute(&self, account_id: Uuid) -> Result<Account, EnrollmentError> {
        self.accounts
            .find_by_id(account_id)
            .await?
            .ok_or(EnrollmentError::AccountNotFound)
    }
}

// ── Student profile ──────────────────────────────────────────────────────────

pub struct GetStudentProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> GetStudentProfileUseCase<P> {
    pub async fn execute(&self, account_id: Uuid) -> Result<StudentProfile, EnrollmentError> {
        self.profiles
            .student_profile(account_id)
            .await?
            .ok_or(EnrollmentError::ProfileNotFound)
    }
}

/// Full-replace body for the student profile. `application_no` is
/// server-assigned and never accepted from the client.
#[derive(Debug, Default, Deserialize)]
pub struct StudentProfileUpdate {
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub aadhaar_number: Option<String>,
    pub current_address: Option<String>,
    pub permanent_address: Option<String>,
    pub father_name: Option<String>,
    pub father_number: Option<String>,
    pub father_occupation: Option<String>,
    pub mother_name: Option<String>,
    pub mother_number: Option<String>,
    pub mother_occupation: Option<String>,
    pub caste: Option<String>,
    #[serde(default)]
    pub is_ews: bool,
    #[serde(default)]
    pub is_disabled: bool,
}

pub struct UpdateStudentProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> UpdateStudentProfileUseCase<P> {
    pub async fn execute(
        &self,
        account_id: Uuid,
        update: StudentProfileUpdate,
    ) -> Result<StudentProfile, EnrollmentError> {
        let stored = self
            .profiles
            .student_profile(account_id)
            .await?
            .ok_or(EnrollmentError::ProfileNotFound)?;

        let profile = StudentProfile {
            date_of_birth: update.date_of_birth,
            gender: update.gender,
            aadhaar_number: update.aadhaar_number,
            current_address: update.current_address,
            permanent_address: update.permanent_address,
            father_name: update.father_name,
            father_number: update.father_number,
            father_occupation: update.father_occupation,
            mother_name: update.mother_name,
            mother_number: update.mother_number,
            mother_occupation: update.mother_occupation,
            caste: update.caste,
            is_ews: update.is_ews,
            is_disabled: update.is_disabled,
            updated_at: Utc::now(),
            ..stored
        };

        self.profiles.update_student_profile(&profile).await?;
        Ok(profile)
    }
}

// ── Education profile ────────────────────────────────────────────────────────

pub struct GetEducationProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> GetEducationProfileUseCase<P> {
    pub async fn execute(&self, account_id: Uuid) -> Result<EducationProfile, EnrollmentError> {
        self.profiles
            .education_profile(account_id)
            .await?
            .ok_or(EnrollmentError::ProfileNotFound)
    }
}

/// Full-replace body for the education profile. Totals are computed
/// server-side from the submitted marks.
#[derive(Debug, Default, Deserialize)]
pub struct EducationProfileUpdate {
    pub tenth_school_name: Option<String>,
    pub tenth_school_board: Option<String>,
    pub tenth_marks: Option<Vec<i16>>,
    #[serde(default)]
    pub is_appearing: bool,
    pub twelfth_school_name: Option<String>,
    pub twelfth_school_board: Option<String>,
    pub stream: Option<String>,
    pub twelfth_marks: Option<Vec<i16>>,
}

pub struct UpdateEducationProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> UpdateEducationProfileUseCase<P> {
    pub async fn execute(
        &self,
        account_id: Uuid,
        update: EducationProfileUpdate,
    ) -> Result<EducationProfile, EnrollmentError> {
        let stored = self
            .profiles
            .education_profile(account_id)
            .await?
            .ok_or(EnrollmentError::ProfileNotFound)?;

        let tenth_total = update
            .tenth_marks
            .as_deref()
            .and_then(mean_percentage);

        // An appearing candidate has no 12th results yet; whatever is
        // stored for those fields stays as-is until the flag drops.
        let profile = if update.is_appearing {
            EducationProfile {
                tenth_school_name: update.tenth_school_name,
                tenth_school_board: update.tenth_school_board,
                tenth_marks: update.tenth_marks,
                tenth_total,
                is_appearing: true,
                updated_at: Utc::now(),
                ..stored
            }
        } else {
            let twelfth_total = update
                .twelfth_marks
                .as_deref()
                .and_then(mean_percentage);
            EducationProfile {
                tenth_school_name: update.tenth_school_name,
                tenth_school_board: update.tenth_school_board,
                tenth_marks: update.tenth_marks,
                tenth_total,
                is_appearing: false,
                twelfth_school_name: update.twelfth_school_name,
                twelfth_school_board: update.twelfth_school_board,
                stream: update.stream,
                twelfth_marks: update.twelfth_marks,
                twelfth_total,
                updated_at: Utc::now(),
                ..stored
            }
        };

        self.profiles.update_education_profile(&profile).await?;
        Ok(profile)
    }
}
