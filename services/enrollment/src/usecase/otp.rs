use chrono::Utc;
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::{NotificationPort, OtpRepository};
use crate::domain::types::{Channel, OTP_CODE_LEN, OtpRecord, RegistrationPolicy};
use crate::error::EnrollmentError;

/// Charset for generating one-time codes (decimal digits).
const CHARSET: &[u8] = b"0123456789";

fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..OTP_CODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

pub struct IssueOtpInput {
    pub channel: Channel,
    pub identifier: String,
}

pub struct IssueOtpUseCase<O, N>
where
    O: OtpRepository,
    N: NotificationPort,
{
    pub otps: O,
    pub notifier: N,
    pub policy: RegistrationPolicy,
}

impl<O, N> IssueOtpUseCase<O, N>
where
    O: OtpRepository,
    N: NotificationPort,
{
    pub async fn execute(&self, input: IssueOtpInput) -> Result<OtpRecord, EnrollmentError> {
        let now = Utc::now();
        let record = OtpRecord {
            id: Uuid::now_v7(),
            channel: input.channel,
            identifier: input.identifier,
            code: generate_code(),
            attempt_count: 0,
            created_at: now,
            expires_at: now + self.policy.otp_ttl,
        };

        self.otps.create(&record).await?;

        // Dispatch is fire-and-forget: a dead mail relay must not fail
        // the registration flow. Verification will simply time out.
        if let Err(e) = self
            .notifier
            .send(record.channel, &record.identifier, &record.code)
            .await
        {
            tracing::warn!(
                channel = record.channel.as_str(),
                error = %e,
                "otp dispatch failed"
            );
        }

        Ok(record)
    }
}

pub struct VerifyOtpInput {
    pub channel: Channel,
    pub identifier: String,
    pub code: String,
}

pub struct VerifyOtpUseCase<O: OtpRepository> {
    pub otps: O,
    pub policy: RegistrationPolicy,
}

impl<O: OtpRepository> VerifyOtpUseCase<O> {
    pub async fn execute(&self, input: VerifyOtpInput) -> Result<(), EnrollmentError> {
        // Only the most recently issued code counts; older unconsumed
        // codes are dead the moment a newer one exists.
        let record = self
            .otps
            .find_latest(input.channel, &input.identifier)
            .await?
            .ok_or(EnrollmentError::OtpNotFound)?;

        if record.is_expired(Utc::now()) {
            return Err(EnrollmentError::OtpExpired);
        }

        if record.attempt_count >= self.policy.max_otp_attempts {
            return Err(EnrollmentError::OtpLocked);
        }

        if record.code != input.code {
            self.otps.record_failed_attempt(record.id).await?;
            return Err(EnrollmentError::OtpMismatch);
        }

        // Consumed on success: a repeat verify finds nothing.
        self.otps.delete(record.id).await?;
        Ok(())
    }
}
