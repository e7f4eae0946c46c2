use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check. Readiness is
/// service-specific (backing-store ping) and lives with each
/// service's router.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
