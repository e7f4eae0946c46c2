//! Bearer-token identity extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use crate::state::AppState;
use crate::usecase::token::validate_token;

/// Authenticated account identity carried by an `Authorization: Bearer`
/// access token.
///
/// Returns 401 if the header is absent, malformed, or the token fails
/// signature or expiry validation.
#[derive(Debug, Clone)]
pub struct Identity {
    pub account_id: Uuid,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let account_id = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .and_then(|token| validate_token(token, &state.jwt_secret).ok())
            .and_then(|claims| claims.sub.parse::<Uuid>().ok());

        async move {
            let account_id = account_id.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { account_id })
        }
    }
}
