use axum::{Json, extract::State};

use crate::domain::types::DesiredSelection;
use crate::error::EnrollmentError;
use crate::identity::Identity;
use crate::state::AppState;
use crate::usecase::selection::{GetSelectionUseCase, SelectionContext, UpdateSelectionUseCase};

// ── GET /accounts/@me/application ────────────────────────────────────────────

pub async fn get_selection(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<SelectionContext>, EnrollmentError> {
    let usecase = GetSelectionUseCase {
        applications: state.application_repo(),
        catalog: state.catalog_repo(),
    };
    let context = usecase.execute(identity.account_id).await?;
    Ok(Json(context))
}

// ── PUT /accounts/@me/application ────────────────────────────────────────────

pub async fn update_selection(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<DesiredSelection>,
) -> Result<Json<SelectionContext>, EnrollmentError> {
    let usecase = UpdateSelectionUseCase {
        applications: state.application_repo(),
        catalog: state.catalog_repo(),
    };
    let context = usecase.execute(identity.account_id, body).await?;
    Ok(Json(context))
}
