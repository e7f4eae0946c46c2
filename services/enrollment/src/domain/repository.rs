#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    Account, Channel, CourseOption, CourseSelection, Degree, EducationProfile, Major,
    NewRegistration, OtpRecord, Program, RegistrationSession, StudentProfile,
};
use crate::error::EnrollmentError;

/// Repository for durable student accounts.
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, EnrollmentError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, EnrollmentError>;
    async fn email_exists(&self, email: &str) -> Result<bool, EnrollmentError>;
    async fn phone_exists(&self, phone: &str) -> Result<bool, EnrollmentError>;
}

/// Repository for pending registration sessions.
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &RegistrationSession) -> Result<(), EnrollmentError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RegistrationSession>, EnrollmentError>;

    /// Set the verified flag for one channel.
    async fn mark_verified(&self, id: Uuid, channel: Channel) -> Result<(), EnrollmentError>;

    /// Finalize a session atomically: insert the account, application
    /// and profile rows, then delete the session — all in one
    /// transaction. The student profile arrives with a blank
    /// application number; the implementation assigns one from the
    /// profile sequence inside the transaction (see
    /// [`crate::domain::types::application_no`]).
    async fn finalize(
        &self,
        session_id: Uuid,
        registration: &NewRegistration,
    ) -> Result<(), EnrollmentError>;
}

/// Repository for one-time codes.
pub trait OtpRepository: Send + Sync {
    async fn create(&self, record: &OtpRecord) -> Result<(), EnrollmentError>;

    /// The active record: most recently created for (channel, identifier).
    async fn find_latest(
        &self,
        channel: Channel,
        identifier: &str,
    ) -> Result<Option<OtpRecord>, EnrollmentError>;

    /// Increment the attempt counter after a failed comparison.
    async fn record_failed_attempt(&self, id: Uuid) -> Result<(), EnrollmentError>;

    /// Remove a record after successful verification.
    async fn delete(&self, id: Uuid) -> Result<(), EnrollmentError>;
}

/// Repository for the per-account course application row.
pub trait ApplicationRepository: Send + Sync {
    async fn find_by_account(
        &self,
        account_id: Uuid,
    ) -> Result<Option<CourseSelection>, EnrollmentError>;

    /// Write the full row (upsert by account).
    async fn save(&self, selection: &CourseSelection) -> Result<(), EnrollmentError>;
}

/// Read-only catalog of degrees, programs, majors and leaf courses.
pub trait CatalogRepository: Send + Sync {
    async fn degree(&self, id: Uuid) -> Result<Option<Degree>, EnrollmentError>;
    async fn program(&self, id: Uuid) -> Result<Option<Program>, EnrollmentError>;
    async fn major(&self, id: Uuid) -> Result<Option<Major>, EnrollmentError>;
    async fn course_option(
        &self,
        kind: crate::domain::types::CourseKind,
        id: Uuid,
    ) -> Result<Option<CourseOption>, EnrollmentError>;

    async fn list_degrees(&self) -> Result<Vec<Degree>, EnrollmentError>;
    async fn programs_of_degree(&self, degree_id: Uuid) -> Result<Vec<Program>, EnrollmentError>;
    async fn majors_of_program(&self, program_id: Uuid) -> Result<Vec<Major>, EnrollmentError>;

    /// The minor / MDC offering sets configured on a major.
    async fn offered_minors(&self, major_id: Uuid) -> Result<Vec<CourseOption>, EnrollmentError>;
    async fn offered_mdcs(&self, major_id: Uuid) -> Result<Vec<CourseOption>, EnrollmentError>;

    async fn list_vacs(&self) -> Result<Vec<CourseOption>, EnrollmentError>;
    async fn list_aecs(&self) -> Result<Vec<CourseOption>, EnrollmentError>;
    async fn list_aocs(&self) -> Result<Vec<CourseOption>, EnrollmentError>;
}

/// Repository for the 1:1 student and education profiles.
pub trait ProfileRepository: Send + Sync {
    async fn student_profile(
        &self,
        account_id: Uuid,
    ) -> Result<Option<StudentProfile>, EnrollmentError>;

    async fn update_student_profile(
        &self,
        profile: &StudentProfile,
    ) -> Result<(), EnrollmentError>;

    async fn education_profile(
        &self,
        account_id: Uuid,
    ) -> Result<Option<EducationProfile>, EnrollmentError>;

    async fn update_education_profile(
        &self,
        profile: &EducationProfile,
    ) -> Result<(), EnrollmentError>;
}

/// Outbound gateway delivering an OTP code to a channel.
/// Fire-and-forget: callers log failures and move on.
pub trait NotificationPort: Send + Sync {
    async fn send(
        &self,
        channel: Channel,
        identifier: &str,
        code: &str,
    ) -> Result<(), EnrollmentError>;
}

/// Password hashing collaborator.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, EnrollmentError>;
    fn verify(&self, password: &str, hash: &str) -> bool;
}
