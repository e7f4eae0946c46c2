use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::types::{EducationProfile, StudentProfile};
use crate::error::EnrollmentError;
use crate::identity::Identity;
use crate::state::AppState;
use crate::usecase::profile::{
    EducationProfileUpdate, GetAccountUseCase, GetEducationProfileUseCase,
    GetStudentProfileUseCase, StudentProfileUpdate, UpdateEducationProfileUseCase,
    UpdateStudentProfileUseCase,
};

// ── GET /accounts/@me ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admitted: bool,
    pub admission_date: Option<chrono::DateTime<chrono::Utc>>,
    pub is_active: bool,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn get_me(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<AccountResponse>, EnrollmentError> {
    let usecase = GetAccountUseCase {
        accounts: state.account_repo(),
    };
    let account = usecase.execute(identity.account_id).await?;
    Ok(Json(AccountResponse {
        id: account.id,
        email: account.email,
        phone: account.phone,
        first_name: account.first_name,
        last_name: account.last_name,
        is_admitted: account.is_admitted,
        admission_date: account.admission_date,
        is_active: account.is_active,
        created_at: account.created_at,
    }))
}

// ── Student profile ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StudentProfileResponse {
    pub application_no: String,
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
    pub is_ews: bool,
    pub is_disabled: bool,
}

impl From<StudentProfile> for StudentProfileResponse {
    fn from(p: StudentProfile) -> Self {
        Self {
            application_no: p.application_no,
            date_of_birth: p.date_of_birth,
            gender: p.gender,
            aadhaar_number: p.aadhaar_number,
            current_address: p.current_address,
            permanent_address: p.permanent_address,
            father_name: p.father_name,
            father_number: p.father_number,
            father_occupation: p.father_occupation,
            mother_name: p.mother_name,
            mother_number: p.mother_number,
            mother_occupation: p.mother_occupation,
            caste: p.caste,
            is_ews: p.is_ews,
            is_disabled: p.is_disabled,
        }
    }
}

pub async fn get_student_profile(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<StudentProfileResponse>, EnrollmentError> {
    let usecase = GetStudentProfileUseCase {
        profiles: state.profile_repo(),
    };
    let profile = usecase.execute(identity.account_id).await?;
    Ok(Json(profile.into()))
}

pub async fn update_student_profile(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<StudentProfileUpdate>,
) -> Result<Json<StudentProfileResponse>, EnrollmentError> {
    let usecase = UpdateStudentProfileUseCase {
        profiles: state.profile_repo(),
    };
    let profile = usecase.execute(identity.account_id, body).await?;
    Ok(Json(profile.into()))
}

// ── Education profile ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EducationProfileResponse {
    pub tenth_school_name: Option<String>,
    pub tenth_school_board: Option<String>,
    pub tenth_marks: Option<Vec<i16>>,
    pub tenth_total: Option<i16>,
    pub is_appearing: bool,
    pub twelfth_school_name: Option<String>,
    pub twelfth_school_board: Option<String>,
    pub stream: Option<String>,
    pub twelfth_marks: Option<Vec<i16>>,
    pub twelfth_total: Option<i16>,
}

impl From<EducationProfile> for EducationProfileResponse {
    fn from(p: EducationProfile) -> Self {
        Self {
            tenth_school_name: p.tenth_school_name,
            tenth_school_board: p.tenth_school_board,
            tenth_marks: p.tenth_marks,
            tenth_total: p.tenth_total,
            is_appearing: p.is_appearing,
            twelfth_school_name: p.twelfth_school_name,
            twelfth_school_board: p.twelfth_school_board,
            stream: p.stream,
            twelfth_marks: p.twelfth_marks,
            twelfth_total: p.twelfth_total,
        }
    }
}

pub async fn get_education_profile(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<EducationProfileResponse>, EnrollmentError> {
    let usecase = GetEducationProfileUseCase {
        profiles: state.profile_repo(),
    };
    let profile = usecase.execute(identity.account_id).await?;
    Ok(Json(profile.into()))
}

pub async fn update_education_profile(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<EducationProfileUpdate>,
) -> Result<Json<EducationProfileResponse>, EnrollmentError> {
    let usecase = UpdateEducationProfileUseCase {
        profiles: state.profile_repo(),
    };
    let profile = usecase.execute(identity.account_id, body).await?;
    Ok(Json(profile.into()))
}
