/// Enrollment service configuration loaded from environment variables.
#[derive(Debug)]
pub struct EnrollmentConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing JWT access and refresh tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3110). Env var: `ENROLLMENT_PORT`.
    pub enrollment_port: u16,
    /// One-time code lifetime in minutes (default 5). Env var: `OTP_TTL_MIN`.
    pub otp_ttl_min: u64,
    /// Failed attempts before a code locks (default 3). Env var: `OTP_MAX_ATTEMPTS`.
    pub otp_max_attempts: u32,
    /// Registration session lifetime in hours (default 24). Env var: `SESSION_TTL_HOURS`.
    pub session_ttl_hours: u64,
}

impl EnrollmentConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            enrollment_port: std::env::var("ENROLLMENT_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3110),
            otp_ttl_min: std::env::var("OTP_TTL_MIN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            otp_max_attempts: std::env::var("OTP_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            session_ttl_hours: std::env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(24),
        }
    }
}
