//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dtp_core::error::CoreError;
use dtp_core::types::EntityId;
use dtp_db::models::document::DocumentWithTemplate;
use dtp_db::models::project::{CreateProject, Project, ProjectDetail, UpdateProject};
use dtp_db::repositories::{DocumentRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    let project = ProjectRepo::create(&state.store, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.store).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/projects/{id}
///
/// Returns the project with its documents embedded.
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let detail = ProjectRepo::find_detail(&state.store, id)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::update(&state.store, id, &input)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/projects/{id}
///
/// Removes the project and all of its documents.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    match ProjectRepo::delete(&state.store, id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(project_not_found(id)),
    }
}

/// GET /api/projects/{id}/documents
pub async fn list_documents(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<Json<DataResponse<Vec<DocumentWithTemplate>>>> {
    let documents = DocumentRepo::list_by_project(&state.store, id)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    Ok(Json(DataResponse { data: documents }))
}

fn project_not_found(id: EntityId) -> AppError {
    AppError::Core(CoreError::not_found("Project", id))
}
