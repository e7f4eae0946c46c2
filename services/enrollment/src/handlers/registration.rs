use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EnrollmentError;
use crate::state::AppState;
use crate::usecase::otp::{IssueOtpUseCase, VerifyOtpUseCase};
use crate::usecase::registration::{
    FinalizeRegistrationInput, FinalizeRegistrationUseCase, ResendOtpInput, ResendOtpUseCase,
    StartRegistrationInput, StartRegistrationUseCase, VerifyRegistrationInput,
    VerifyRegistrationUseCase,
};

// ── POST /auth/registration ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct StartRegistrationRequest {
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize)]
pub struct StartRegistrationResponse {
    pub session_id: Uuid,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

pub async fn start_registration(
    State(state): State<AppState>,
    Json(body): Json<StartRegistrationRequest>,
) -> Result<impl IntoResponse, EnrollmentError> {
    let usecase = StartRegistrationUseCase {
        accounts: state.account_repo(),
        sessions: state.session_repo(),
        issue_otp: IssueOtpUseCase {
            otps: state.otp_repo(),
            notifier: state.notifier(),
            policy: state.policy,
        },
        policy: state.policy,
    };
    let session = usecase
        .execute(StartRegistrationInput {
            email: body.email,
            phone: body.phone,
            first_name: body.first_name,
            last_name: body.last_name,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(StartRegistrationResponse {
            session_id: session.id,
            expires_at: session.expires_at,
        }),
    ))
}

// ── POST /auth/registration/verify ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyRegistrationRequest {
    pub session_id: Uuid,
    pub email_code: String,
    pub phone_code: String,
}

#[derive(Serialize)]
pub struct ChannelOutcome {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

#[derive(Serialize)]
pub struct VerifyRegistrationResponse {
    pub email: ChannelOutcome,
    pub phone: ChannelOutcome,
}

fn channel_outcome(result: Result<(), EnrollmentError>) -> Result<ChannelOutcome, EnrollmentError> {
    match result {
        Ok(()) => Ok(ChannelOutcome {
            verified: true,
            error: None,
        }),
        Err(e @ EnrollmentError::Internal(_)) => Err(e),
        Err(e) => Ok(ChannelOutcome {
            verified: false,
            error: Some(e.kind()),
        }),
    }
}

pub async fn verify_registration(
    State(state): State<AppState>,
    Json(body): Json<VerifyRegistrationRequest>,
) -> Result<impl IntoResponse, EnrollmentError> {
    let usecase = VerifyRegistrationUseCase {
        sessions: state.session_repo(),
        verify_otp: VerifyOtpUseCase {
            otps: state.otp_repo(),
            policy: state.policy,
        },
    };
    let outcome = usecase
        .execute(VerifyRegistrationInput {
            session_id: body.session_id,
            email_code: body.email_code,
            phone_code: body.phone_code,
        })
        .await?;

    let status = if outcome.is_fully_verified() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    let response = VerifyRegistrationResponse {
        email: channel_outcome(outcome.email)?,
        phone: channel_outcome(outcome.phone)?,
    };
    Ok((status, Json(response)))
}

// ── POST /auth/registration/resend ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResendOtpRequest {
    pub email: String,
    pub phone: String,
}

pub async fn resend_otp(
    State(state): State<AppState>,
    Json(body): Json<ResendOtpRequest>,
) -> Result<StatusCode, EnrollmentError> {
    let usecase = ResendOtpUseCase {
        issue_otp: IssueOtpUseCase {
            otps: state.otp_repo(),
            notifier: state.notifier(),
            policy: state.policy,
        },
    };
    usecase
        .execute(ResendOtpInput {
            email: body.email,
            phone: body.phone,
        })
        .await?;
    Ok(StatusCode::ACCEPTED)
}

// ── POST /auth/registration/password ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct FinalizeRegistrationRequest {
    pub session_id: Uuid,
    pub password: String,
}

#[derive(Serialize)]
pub struct FinalizeRegistrationResponse {
    pub account_id: Uuid,
    pub email: String,
}

pub async fn finalize_registration(
    State(state): State<AppState>,
    Json(body): Json<FinalizeRegistrationRequest>,
) -> Result<impl IntoResponse, EnrollmentError> {
    let usecase = FinalizeRegistrationUseCase {
        sessions: state.session_repo(),
        hasher: state.hasher(),
    };
    let account = usecase
        .execute(FinalizeRegistrationInput {
            session_id: body.session_id,
            password: body.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(FinalizeRegistrationResponse {
            account_id: account.id,
            email: account.email,
        }),
    ))
}
