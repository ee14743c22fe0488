//! Repository for the projects collection.

use chrono::Utc;
use dtp_core::types::{new_entity_id, EntityId};
use dtp_core::validation::validate_project_name;

use crate::error::StoreError;
use crate::models::document::Document;
use crate::models::project::{CreateProject, Project, ProjectDetail, UpdateProject};
use crate::store::{Store, WriteBatch, DOCUMENTS_KEY, PROJECTS_KEY};

/// Provides CRUD operations for projects, with cascading delete.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created record.
    ///
    /// `created_at` and `updated_at` are set to the same instant.
    pub async fn create(store: &Store, input: &CreateProject) -> Result<Project, StoreError> {
        validate_project_name(&input.name)?;

        let _guard = store.lock().await;
        let mut projects: Vec<Project> = store.load(PROJECTS_KEY).await?;

        let now = Utc::now();
        let project = Project {
            id: new_entity_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            created_at: now,
            updated_at: now,
        };
        projects.push(project.clone());
        store.save(PROJECTS_KEY, &projects).await?;

        tracing::info!(project_id = %project.id, name = %project.name, "Project created");
        Ok(project)
    }

    /// Find a project by id.
    pub async fn find_by_id(store: &Store, id: EntityId) -> Result<Option<Project>, StoreError> {
        let _guard = store.lock().await;
        let projects: Vec<Project> = store.load(PROJECTS_KEY).await?;
        Ok(projects.into_iter().find(|p| p.id == id))
    }

    /// Find a project by id together with its documents, most recently
    /// updated first.
    pub async fn find_detail(
        store: &Store,
        id: EntityId,
    ) -> Result<Option<ProjectDetail>, StoreError> {
        let _guard = store.lock().await;
        let projects: Vec<Project> = store.load(PROJECTS_KEY).await?;
        let Some(project) = projects.into_iter().find(|p| p.id == id) else {
            return Ok(None);
        };

        let mut documents: Vec<Document> = store
            .load::<Document>(DOCUMENTS_KEY)
            .await?
            .into_iter()
            .filter(|d| d.project_id == id)
            .collect();
        documents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        Ok(Some(ProjectDetail { project, documents }))
    }

    /// List all projects, most recently updated first.
    pub async fn list(store: &Store) -> Result<Vec<Project>, StoreError> {
        let _guard = store.lock().await;
        let mut projects: Vec<Project> = store.load(PROJECTS_KEY).await?;
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(projects)
    }

    /// Update a project. Only `Some` fields in `input` are applied; the
    /// update always bumps `updated_at`.
    ///
    /// Returns `None` if no project with the given `id` exists.
    pub async fn update(
        store: &Store,
        id: EntityId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, StoreError> {
        if let Some(name) = &input.name {
            validate_project_name(name)?;
        }

        let _guard = store.lock().await;
        let mut projects: Vec<Project> = store.load(PROJECTS_KEY).await?;
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(name) = &input.name {
            project.name = name.clone();
        }
        if let Some(description) = &input.description {
            project.description = Some(description.clone());
        }
        project.updated_at = Utc::now();
        let updated = project.clone();

        store.save(PROJECTS_KEY, &projects).await?;

        tracing::info!(project_id = %id, "Project updated");
        Ok(Some(updated))
    }

    /// Delete a project and every document it owns in one atomic write.
    ///
    /// Returns `None` if no project with the given `id` exists, otherwise
    /// the number of documents removed with it.
    pub async fn delete(store: &Store, id: EntityId) -> Result<Option<usize>, StoreError> {
        let _guard = store.lock().await;
        let mut projects: Vec<Project> = store.load(PROJECTS_KEY).await?;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Ok(None);
        }

        let mut documents: Vec<Document> = store.load(DOCUMENTS_KEY).await?;
        let doc_count = documents.len();
        documents.retain(|d| d.project_id != id);
        let removed = doc_count - documents.len();

        let mut batch = WriteBatch::default();
        batch
            .put(PROJECTS_KEY, &projects)?
            .put(DOCUMENTS_KEY, &documents)?;
        store.commit(batch).await?;

        tracing::info!(project_id = %id, documents_removed = removed, "Project deleted");
        Ok(Some(removed))
    }
}
