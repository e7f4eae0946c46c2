use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EnrollmentError;
use crate::state::AppState;
use crate::usecase::token::{LoginInput, LoginUseCase, RefreshTokenUseCase};

#[derive(Serialize)]
pub struct TokenResponse {
    pub account_id: Uuid,
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
}

// ── POST /auth/token ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, EnrollmentError> {
    let usecase = LoginUseCase {
        accounts: state.account_repo(),
        hasher: state.hasher(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let output = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(TokenResponse {
        account_id: output.account.id,
        access_token: output.access_token,
        access_token_exp: output.access_token_exp,
        refresh_token: output.refresh_token,
    }))
}

// ── PATCH /auth/token ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(body): Json<RefreshTokenRequest>,
) -> Result<Json<TokenResponse>, EnrollmentError> {
    let usecase = RefreshTokenUseCase {
        accounts: state.account_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let output = usecase.execute(&body.refresh_token).await?;
    Ok(Json(TokenResponse {
        account_id: output.account_id,
        access_token: output.access_token,
        access_token_exp: output.access_token_exp,
        refresh_token: output.refresh_token,
    }))
}
