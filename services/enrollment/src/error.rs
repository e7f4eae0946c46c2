use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Enrollment service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentError {
    #[error("no code issued for this destination")]
    OtpNotFound,
    #[error("code expired")]
    OtpExpired,
    #[error("too many failed attempts")]
    OtpLocked,
    #[error("incorrect code")]
    OtpMismatch,
    #[error("registration session not found")]
    SessionNotFound,
    #[error("registration session expired")]
    SessionExpired,
    #[error("email already registered")]
    DuplicateEmail,
    #[error("phone already registered")]
    DuplicatePhone,
    #[error("both channels must be verified")]
    VerificationIncomplete,
    #[error("account not found")]
    AccountNotFound,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid refresh token")]
    InvalidRefreshToken,
    #[error("unknown catalog entry")]
    UnknownCatalogEntry,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl EnrollmentError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OtpNotFound => "OTP_NOT_FOUND",
            Self::OtpExpired => "OTP_EXPIRED",
            Self::OtpLocked => "OTP_LOCKED",
            Self::OtpMismatch => "OTP_MISMATCH",
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::DuplicatePhone => "DUPLICATE_PHONE",
            Self::VerificationIncomplete => "VERIFICATION_INCOMPLETE",
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::UnknownCatalogEntry => "UNKNOWN_CATALOG_ENTRY",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for EnrollmentError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::OtpNotFound | Self::SessionNotFound | Self::AccountNotFound
            | Self::ProfileNotFound => StatusCode::NOT_FOUND,
            Self::OtpExpired
            | Self::OtpMismatch
            | Self::VerificationIncomplete
            | Self::UnknownCatalogEntry => StatusCode::BAD_REQUEST,
            Self::OtpLocked => StatusCode::TOO_MANY_REQUESTS,
            Self::SessionExpired => StatusCode::GONE,
            Self::DuplicateEmail | Self::DuplicatePhone => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::InvalidRefreshToken => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
