use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{
    AccountRepository, CredentialHasher, NotificationPort, OtpRepository, SessionRepository,
};
use crate::domain::types::{
    Account, Channel, CourseSelection, EducationProfile, NewRegistration, RegistrationPolicy,
    RegistrationSession, StudentProfile,
};
use crate::error::EnrollmentError;
use crate::usecase::otp::{IssueOtpInput, IssueOtpUseCase, VerifyOtpInput, VerifyOtpUseCase};

// ── StartRegistration ────────────────────────────────────────────────────────

pub struct StartRegistrationInput {
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct StartRegistrationUseCase<A, S, O, N>
where
    A: AccountRepository,
    S: SessionRepository,
    O: OtpRepository,
    N: NotificationPort,
{
    pub accounts: A,
    pub sessions: S,
    pub issue_otp: IssueOtpUseCase<O, N>,
    pub policy: RegistrationPolicy,
}

impl<A, S, O, N> StartRegistrationUseCase<A, S, O, N>
where
    A: AccountRepository,
    S: SessionRepository,
    O: OtpRepository,
    N: NotificationPort,
{
    pub async fn execute(
        &self,
        input: StartRegistrationInput,
    ) -> Result<RegistrationSession, EnrollmentError> {
        // 1. Duplicate checks against durable accounts, email first.
        if self.accounts.email_exists(&input.email).await? {
            return Err(EnrollmentError::DuplicateEmail);
        }
        if self.accounts.phone_exists(&input.phone).await? {
            return Err(EnrollmentError::DuplicatePhone);
        }

        // 2. Create the pending session.
        let now = Utc::now();
        let session = RegistrationSession {
            id: Uuid::now_v7(),
            email: input.email,
            phone: input.phone,
            first_name: input.first_name,
            last_name: input.last_name,
            is_email_verified: false,
            is_phone_verified: false,
            created_at: now,
            expires_at: now + self.policy.session_ttl,
        };
        self.sessions.create(&session).await?;

        // 3. One code per channel.
        self.issue_otp
            .execute(IssueOtpInput {
                channel: Channel::Email,
                identifier: session.email.clone(),
            })
            .await?;
        self.issue_otp
            .execute(IssueOtpInput {
                channel: Channel::Phone,
                identifier: session.phone.clone(),
            })
            .await?;

        Ok(session)
    }
}

// ── VerifyRegistration ───────────────────────────────────────────────────────

pub struct VerifyRegistrationInput {
    pub session_id: Uuid,
    pub email_code: String,
    pub phone_code: String,
}

/// Per-channel outcomes; the handler answers 200 only when both are Ok.
pub struct VerifyRegistrationOutput {
    pub email: Result<(), EnrollmentError>,
    pub phone: Result<(), EnrollmentError>,
}

impl VerifyRegistrationOutput {
    pub fn is_fully_verified(&self) -> bool {
        self.email.is_ok() && self.phone.is_ok()
    }
}

pub struct VerifyRegistrationUseCase<S, O>
where
    S: SessionRepository,
    O: OtpRepository,
{
    pub sessions: S,
    pub verify_otp: VerifyOtpUseCase<O>,
}

impl<S, O> VerifyRegistrationUseCase<S, O>
where
    S: SessionRepository,
    O: OtpRepository,
{
    pub async fn execute(
        &self,
        input: VerifyRegistrationInput,
    ) -> Result<VerifyRegistrationOutput, EnrollmentError> {
        let session = self
            .sessions
            .find_by_id(input.session_id)
            .await?
            .ok_or(EnrollmentError::SessionNotFound)?;

        // Each channel verifies independently; an already-verified
        // channel stays verified and its code is not re-checked.
        let email = if session.is_email_verified {
            Ok(())
        } else {
            let outcome = self
                .verify_otp
                .execute(VerifyOtpInput {
                    channel: Channel::Email,
                    identifier: session.email.clone(),
                    code: input.email_code,
                })
                .await;
            if outcome.is_ok() {
                self.sessions
                    .mark_verified(session.id, Channel::Email)
                    .await?;
            }
            outcome
        };

        let phone = if session.is_phone_verified {
            Ok(())
        } else {
            let outcome = self
                .verify_otp
                .execute(VerifyOtpInput {
                    channel: Channel::Phone,
                    identifier: session.phone.clone(),
                    code: input.phone_code,
                })
                .await;
            if outcome.is_ok() {
                self.sessions
                    .mark_verified(session.id, Channel::Phone)
                    .await?;
            }
            outcome
        };

        Ok(VerifyRegistrationOutput { email, phone })
    }
}

// ── ResendOtp ────────────────────────────────────────────────────────────────

pub struct ResendOtpInput {
    pub email: String,
    pub phone: String,
}

pub struct ResendOtpUseCase<O, N>
where
    O: OtpRepository,
    N: NotificationPort,
{
    pub issue_otp: IssueOtpUseCase<O, N>,
}

impl<O, N> ResendOtpUseCase<O, N>
where
    O: OtpRepository,
    N: NotificationPort,
{
    pub async fn execute(&self, input: ResendOtpInput) -> Result<(), EnrollmentError> {
        self.issue_otp
            .execute(IssueOtpInput {
                channel: Channel::Email,
                identifier: input.email,
            })
            .await?;
        self.issue_otp
            .execute(IssueOtpInput {
                channel: Channel::Phone,
                identifier: input.phone,
            })
            .await?;
        Ok(())
    }
}

// ── FinalizeRegistration ─────────────────────────────────────────────────────

pub struct FinalizeRegistrationInput {
    pub session_id: Uuid,
    pub password: String,
}

pub struct FinalizeRegistrationUseCase<S, H>
where
    S: SessionRepository,
    H: CredentialHasher,
{
    pub sessions: S,
    pub hasher: H,
}

impl<S, H> FinalizeRegistrationUseCase<S, H>
where
    S: SessionRepository,
    H: CredentialHasher,
{
    pub async fn execute(
        &self,
        input: FinalizeRegistrationInput,
    ) -> Result<Account, EnrollmentError> {
        let session = self
            .sessions
            .find_by_id(input.session_id)
            .await?
            .ok_or(EnrollmentError::SessionNotFound)?;

        let now = Utc::now();
        if session.is_expired(now) {
            return Err(EnrollmentError::SessionExpired);
        }
        if !session.is_fully_verified() {
            return Err(EnrollmentError::VerificationIncomplete);
        }

        let password_hash = self.hasher.hash(&input.password)?;
        let account = Account {
            id: Uuid::now_v7(),
            email: session.email,
            phone: session.phone,
            first_name: session.first_name,
            last_name: session.last_name,
            password_hash,
            is_admitted: false,
            admission_date: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let registration = NewRegistration {
            application: CourseSelection::empty(account.id),
            student_profile: StudentProfile::empty(account.id, now),
            education_profile: EducationProfile::empty(account.id, now),
            account,
        };

        // Account, empty application, empty profiles and the session
        // delete all land in one transaction.
        self.sessions
            .finalize(input.session_id, &registration)
            .await?;

        Ok(registration.account)
    }
}
