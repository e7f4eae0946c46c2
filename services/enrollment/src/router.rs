use axum::{
    Router,
    routing::{get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use campus_core::health::healthz;
use campus_core::middleware::request_id_layer;

use crate::handlers::{
    health::readyz,
    profile::{
        get_education_profile, get_me, get_student_profile, update_education_profile,
        update_student_profile,
    },
    registration::{finalize_registration, resend_otp, start_registration, verify_registration},
    selection::{get_selection, update_selection},
    token::{login, refresh_token},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Registration
        .route("/auth/registration", post(start_registration))
        .route("/auth/registration/verify", post(verify_registration))
        .route("/auth/registration/resend", post(resend_otp))
        .route("/auth/registration/password", post(finalize_registration))
        // Tokens
        .route("/auth/token", post(login))
        .route("/auth/token", patch(refresh_token))
        // Account
        .route("/accounts/@me", get(get_me))
        .route("/accounts/@me/profile", get(get_student_profile))
        .route("/accounts/@me/profile", put(update_student_profile))
        .route("/accounts/@me/education", get(get_education_profile))
        .route("/accounts/@me/education", put(update_education_profile))
        // Course application
        .route("/accounts/@me/application", get(get_selection))
        .route("/accounts/@me/application", put(update_selection))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
