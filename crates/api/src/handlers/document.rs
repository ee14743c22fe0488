//! Handlers for the `/documents` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dtp_core::error::CoreError;
use dtp_core::render::{self, RenderTree};
use dtp_core::types::EntityId;
use dtp_db::models::document::{
    CreateDocument, Document, DocumentDetail, DocumentWithTemplate, UpdateDocument,
};
use dtp_db::repositories::DocumentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::DocumentListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/documents?projectId=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<DocumentListParams>,
) -> AppResult<Json<DataResponse<Vec<DocumentWithTemplate>>>> {
    let project_id = params
        .project_id
        .ok_or_else(|| AppError::BadRequest("projectId query parameter is required".into()))?;
    let documents = DocumentRepo::list_by_project(&state.store, project_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", project_id)))?;
    Ok(Json(DataResponse { data: documents }))
}

/// POST /api/documents
///
/// When `content` is omitted or `null` the template's default content is
/// stored.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateDocument>,
) -> AppResult<(StatusCode, Json<DataResponse<Document>>)> {
    let document = DocumentRepo::create(&state.store, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: document })))
}

/// GET /api/documents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<Json<DataResponse<DocumentDetail>>> {
    let detail = DocumentRepo::find_detail(&state.store, id)
        .await?
        .ok_or_else(|| document_not_found(id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/documents/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(input): AppJson<UpdateDocument>,
) -> AppResult<Json<DataResponse<Document>>> {
    let document = DocumentRepo::update(&state.store, id, &input)
        .await?
        .ok_or_else(|| document_not_found(id))?;
    Ok(Json(DataResponse { data: document }))
}

/// DELETE /api/documents/{id}
///
/// Idempotent: deleting an absent document still answers 204.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    if !DocumentRepo::delete(&state.store, id).await? {
        tracing::debug!(document_id = %id, "Delete of absent document ignored");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/documents/{id}/render
pub async fn render(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<Json<DataResponse<RenderTree>>> {
    let detail = DocumentRepo::find_detail(&state.store, id)
        .await?
        .ok_or_else(|| document_not_found(id))?;
    let template = detail.template.ok_or_else(|| {
        AppError::Core(CoreError::not_found(
            "Template",
            &detail.document.template_id,
        ))
    })?;

    let tree = render::render(&template, &detail.document.content);
    Ok(Json(DataResponse { data: tree }))
}

fn document_not_found(id: EntityId) -> AppError {
    AppError::Core(CoreError::not_found("Document", id))
}
