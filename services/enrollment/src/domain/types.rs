use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// OTP code length in decimal digits.
pub const OTP_CODE_LEN: usize = 6;

/// Verification channel for one-time codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Phone,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }
}

/// One-time code issued against a (channel, identifier) pair.
#[derive(Debug, Clone)]
pub struct OtpRecord {
    pub id: Uuid,
    pub channel: Channel,
    pub identifier: String,
    pub code: String,
    pub attempt_count: u32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Pending signup awaiting dual-channel verification.
#[derive(Debug, Clone)]
pub struct RegistrationSession {
    pub id: Uuid,
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub is_email_verified: bool,
    pub is_phone_verified: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl RegistrationSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_fully_verified(&self) -> bool {
        self.is_email_verified && self.is_phone_verified
    }
}

/// Everything a finalized session turns into: the account plus its
/// empty application and profile rows. Persisted together with the
/// session delete in one transaction; the student profile's
/// application number is drawn from the profile sequence inside that
/// transaction.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub account: Account,
    pub application: CourseSelection,
    pub student_profile: StudentProfile,
    pub education_profile: EducationProfile,
}

/// "PWC{year}{seq:05}", sequenced over all student profiles ever
/// created. Callers draw `seq` inside the finalize transaction so two
/// concurrent signups cannot share a number.
pub fn application_no(now: DateTime<Utc>, seq: u64) -> String {
    format!("PWC{}{:05}", now.format("%Y"), seq)
}

/// Durable student account created by finalization.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_admitted: bool,
    pub admission_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// TTL and attempt policy for the registration flow. Passed explicitly
/// into usecases instead of living in ambient globals.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationPolicy {
    pub otp_ttl: Duration,
    /// Wrong-code ceiling: the submission after this many recorded
    /// failures is rejected as locked.
    pub max_otp_attempts: u32,
    pub session_ttl: Duration,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            otp_ttl: Duration::minutes(5),
            max_otp_attempts: 3,
            session_ttl: Duration::hours(24),
        }
    }
}

/// A student's single in-progress course application.
#[derive(Debug, Clone)]
pub struct CourseSelection {
    pub id: Uuid,
    pub account_id: Uuid,
    pub degree: Option<Uuid>,
    pub program: Option<Uuid>,
    pub major: Option<Uuid>,
    pub minor: Option<Uuid>,
    pub mdc: Option<Uuid>,
    pub vac: Option<Uuid>,
    pub aec: Option<Uuid>,
    pub aoc: Option<Uuid>,
    /// Total fee in the smallest currency unit; computed at the
    /// complete-save point.
    pub fee_amount: i64,
    pub is_fee_paid: bool,
}

impl CourseSelection {
    pub fn empty(account_id: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            account_id,
            degree: None,
            program: None,
            major: None,
            minor: None,
            mdc: None,
            vac: None,
            aec: None,
            aoc: None,
            fee_amount: 0,
            is_fee_paid: false,
        }
    }

    /// All eight selections present — only then is the row persisted.
    pub fn is_complete(&self) -> bool {
        self.degree.is_some()
            && self.program.is_some()
            && self.major.is_some()
            && self.minor.is_some()
            && self.mdc.is_some()
            && self.vac.is_some()
            && self.aec.is_some()
            && self.aoc.is_some()
    }
}

/// Incoming desired state for the resolver. A missing field is null:
/// the update always applies all eight (full-replace PUT semantics).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DesiredSelection {
    pub degree: Option<Uuid>,
    pub program: Option<Uuid>,
    pub major: Option<Uuid>,
    pub minor: Option<Uuid>,
    pub mdc: Option<Uuid>,
    pub vac: Option<Uuid>,
    pub aec: Option<Uuid>,
    pub aoc: Option<Uuid>,
}

// ── Catalog reference data ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Degree {
    pub id: Uuid,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Program {
    pub id: Uuid,
    pub degree_id: Option<Uuid>,
    pub name: String,
    pub code: String,
    /// Entrance application fee in the smallest currency unit.
    pub entrance_fee: i64,
    pub prereq_stream: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Major {
    pub id: Uuid,
    pub program_id: Uuid,
    pub name: String,
    pub code: String,
    pub prereq_stream: Option<String>,
    pub fee: i64,
    pub entrance_exam_at: Option<DateTime<Utc>>,
    pub actual_available_seats: i32,
    pub buffer_seats: i32,
    pub total_seats: i32,
}

/// The five leaf course kinds share one shape; AOC alone carries a fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseKind {
    Minor,
    Mdc,
    Vac,
    Aec,
    Aoc,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseOption {
    pub id: Uuid,
    pub kind: CourseKind,
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<i64>,
}

// ── Profiles ─────────────────────────────────────────────────────────────────

/// Personal details attached 1:1 to an account.
#[derive(Debug, Clone)]
pub struct StudentProfile {
    pub id: Uuid,
    pub account_id: Uuid,
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
    pub updated_at: DateTime<Utc>,
}

impl StudentProfile {
    /// Blank profile created at finalization. The application number
    /// is left empty here; the repository assigns it from the profile
    /// sequence inside the finalize transaction.
    pub fn empty(account_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            account_id,
            application_no: String::new(),
            date_of_birth: None,
            gender: None,
            aadhaar_number: None,
            current_address: None,
            permanent_address: None,
            father_name: None,
            father_number: None,
            father_occupation: None,
            mother_name: None,
            mother_number: None,
            mother_occupation: None,
            caste: None,
            is_ews: false,
            is_disabled: false,
            updated_at: now,
        }
    }
}

/// Schooling record attached 1:1 to an account.
#[derive(Debug, Clone)]
pub struct EducationProfile {
    pub id: Uuid,
    pub account_id: Uuid,
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
    pub updated_at: DateTime<Utc>,
}

impl EducationProfile {
    pub fn empty(account_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            account_id,
            tenth_school_name: None,
            tenth_school_board: None,
            tenth_marks: None,
            tenth_total: None,
            is_appearing: false,
            twelfth_school_name: None,
            twelfth_school_board: None,
            stream: None,
            twelfth_marks: None,
            twelfth_total: None,
            updated_at: now,
        }
    }
}

/// Rounded mean of subject percentages; None for an empty list.
pub fn mean_percentage(marks: &[i16]) -> Option<i16> {
    if marks.is_empty() {
        return None;
    }
    let sum: i32 = marks.iter().map(|m| *m as i32).sum();
    Some((sum as f64 / marks.len() as f64).round() as i16)
}
