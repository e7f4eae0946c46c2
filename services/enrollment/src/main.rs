use chrono::Duration;
use sea_orm::Database;
use tracing::info;

use campus_core::tracing::init_tracing;
use campus_enrollment::config::EnrollmentConfig;
use campus_enrollment::domain::types::RegistrationPolicy;
use campus_enrollment::router::build_router;
use campus_enrollment::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing("campus_enrollment=info,tower_http=info");

    let config = EnrollmentConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let policy = RegistrationPolicy {
        otp_ttl: Duration::minutes(config.otp_ttl_min as i64),
        max_otp_attempts: config.otp_max_attempts,
        session_ttl: Duration::hours(config.session_ttl_hours as i64),
    };

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        policy,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.enrollment_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("enrollment service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
