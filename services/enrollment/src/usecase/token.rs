use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::domain::repository::{AccountRepository, CredentialHasher};
use crate::domain::types::Account;
use crate::error::EnrollmentError;

/// Access token lifetime in seconds (1 hour).
pub const ACCESS_TOKEN_EXP: u64 = 60 * 60;
/// Refresh token lifetime in seconds (30 days).
pub const REFRESH_TOKEN_EXP: u64 = 60 * 60 * 24 * 30;

/// JWT claims for both access and refresh tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

pub fn issue_access_token(
    account_id: Uuid,
    secret: &str,
) -> Result<(String, u64), EnrollmentError> {
    let exp = now_secs() + ACCESS_TOKEN_EXP;
    let claims = TokenClaims {
        sub: account_id.to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| EnrollmentError::Internal(e.into()))?;
    Ok((token, exp))
}

pub fn issue_refresh_token(account_id: Uuid, secret: &str) -> Result<String, EnrollmentError> {
    let exp = now_secs() + REFRESH_TOKEN_EXP;
    let claims = TokenClaims {
        sub: account_id.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| EnrollmentError::Internal(e.into()))
}

/// Validate a token and return its claims. Used by both the refresh
/// flow and the bearer-token extractor.
pub fn validate_token(token: &str, secret: &str) -> Result<TokenClaims, EnrollmentError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| EnrollmentError::InvalidRefreshToken)?;

    Ok(data.claims)
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub account: Account,
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
}

pub struct LoginUseCase<A: AccountRepository, H: CredentialHasher> {
    pub accounts: A,
    pub hasher: H,
    pub jwt_secret: String,
}

impl<A: AccountRepository, H: CredentialHasher> LoginUseCase<A, H> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, EnrollmentError> {
        let account = self
            .accounts
            .find_by_email(&input.email)
            .await?
            .ok_or(EnrollmentError::AccountNotFound)?;

        if !self.hasher.verify(&input.password, &account.password_hash) {
            return Err(EnrollmentError::InvalidCredentials);
        }

        let (access_token, access_token_exp) = issue_access_token(account.id, &self.jwt_secret)?;
        let refresh_token = issue_refresh_token(account.id, &self.jwt_secret)?;

        Ok(LoginOutput {
            account,
            access_token,
            access_token_exp,
            refresh_token,
        })
    }
}

// ── RefreshToken ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct RefreshTokenOutput {
    pub account_id: Uuid,
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
}

pub struct RefreshTokenUseCase<A: AccountRepository> {
    pub accounts: A,
    pub jwt_secret: String,
}

impl<A: AccountRepository> RefreshTokenUseCase<A> {
    pub async fn execute(
        &self,
        refresh_token_value: &str,
    ) -> Result<RefreshTokenOutput, EnrollmentError> {
        // Validate refresh token (sig + exp); an expired access token
        // is irrelevant here.
        let claims = validate_token(refresh_token_value, &self.jwt_secret)?;

        let account_id = claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| EnrollmentError::InvalidRefreshToken)?;

        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or(EnrollmentError::InvalidRefreshToken)?;

        let (access_token, access_token_exp) = issue_access_token(account.id, &self.jwt_secret)?;
        let refresh_token = issue_refresh_token(account.id, &self.jwt_secret)?;

        Ok(RefreshTokenOutput {
            account_id: account.id,
            access_token,
            access_token_exp,
            refresh_token,
        })
    }
}
