//! Handlers for the read-only `/templates` catalog.

use axum::extract::State;
use axum::Json;
use dtp_core::error::CoreError;
use dtp_core::template::{Phase, Template};
use dtp_db::repositories::TemplateRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::query::TemplateListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/templates
///
/// Optional `?phase=` filter, matched case-insensitively.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<TemplateListParams>,
) -> AppResult<Json<DataResponse<Vec<Template>>>> {
    let phase = params
        .phase
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(Phase::parse)
        .transpose()?;
    let templates = TemplateRepo::list(&state.store, phase).await?;
    Ok(Json(DataResponse { data: templates }))
}

/// GET /api/templates/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<DataResponse<Template>>> {
    let template = TemplateRepo::find_by_id(&state.store, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Template", &id)))?;
    Ok(Json(DataResponse { data: template }))
}
