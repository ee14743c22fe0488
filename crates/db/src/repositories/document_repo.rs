//! Repository for the documents collection.

use chrono::Utc;
use dtp_core::editor::default_content;
use dtp_core::error::CoreError;
use dtp_core::template::Template;
use dtp_core::types::{new_entity_id, EntityId};
use dtp_core::validation::{validate_document_content, validate_template_id};
use serde_json::Value;

use crate::error::StoreError;
use crate::models::document::{
    CreateDocument, Document, DocumentDetail, DocumentWithTemplate, UpdateDocument,
};
use crate::models::project::Project;
use crate::repositories::template_repo::load_catalog;
use crate::store::{Store, DOCUMENTS_KEY, PROJECTS_KEY};

/// Provides CRUD operations for documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a new document, returning the created record.
    ///
    /// Fails with `NotFound` if the project does not exist. The template id
    /// is not checked: a document may reference a template the catalog does
    /// not (or no longer) contain. Missing or `null` content is replaced by
    /// the template's default content when the template is known; any other
    /// object, including `{}`, is stored unchanged.
    pub async fn create(store: &Store, input: &CreateDocument) -> Result<Document, StoreError> {
        validate_template_id(&input.template_id)?;
        let supplied = input.content.as_ref().filter(|c| !c.is_null());
        if let Some(content) = supplied {
            validate_document_content(content)?;
        }

        let _guard = store.lock().await;
        let projects: Vec<Project> = store.load(PROJECTS_KEY).await?;
        if !projects.iter().any(|p| p.id == input.project_id) {
            return Err(CoreError::not_found("Project", input.project_id).into());
        }

        let content = match supplied {
            Some(content) => content.clone(),
            None => load_catalog(store)
                .await?
                .iter()
                .find(|t| t.id == input.template_id)
                .map(default_content)
                .unwrap_or_else(|| Value::Object(Default::default())),
        };

        let mut documents: Vec<Document> = store.load(DOCUMENTS_KEY).await?;
        let now = Utc::now();
        let document = Document {
            id: new_entity_id(),
            project_id: input.project_id,
            template_id: input.template_id.clone(),
            content,
            created_at: now,
            updated_at: now,
        };
        documents.push(document.clone());
        store.save(DOCUMENTS_KEY, &documents).await?;

        tracing::info!(
            document_id = %document.id,
            project_id = %document.project_id,
            template_id = %document.template_id,
            "Document created"
        );
        Ok(document)
    }

    /// Find a document by id.
    pub async fn find_by_id(store: &Store, id: EntityId) -> Result<Option<Document>, StoreError> {
        let _guard = store.lock().await;
        let documents: Vec<Document> = store.load(DOCUMENTS_KEY).await?;
        Ok(documents.into_iter().find(|d| d.id == id))
    }

    /// Find a document by id, joined with its template and project.
    pub async fn find_detail(
        store: &Store,
        id: EntityId,
    ) -> Result<Option<DocumentDetail>, StoreError> {
        let _guard = store.lock().await;
        let documents: Vec<Document> = store.load(DOCUMENTS_KEY).await?;
        let Some(document) = documents.into_iter().find(|d| d.id == id) else {
            return Ok(None);
        };

        let template = find_template(&load_catalog(store).await?, &document.template_id);
        let project = store
            .load::<Project>(PROJECTS_KEY)
            .await?
            .into_iter()
            .find(|p| p.id == document.project_id);

        Ok(Some(DocumentDetail {
            document,
            template,
            project,
        }))
    }

    /// List a project's documents, most recently updated first, each with
    /// its template resolved.
    ///
    /// Returns `None` if no project with the given `id` exists. The check and
    /// the listing happen under one lock.
    pub async fn list_by_project(
        store: &Store,
        project_id: EntityId,
    ) -> Result<Option<Vec<DocumentWithTemplate>>, StoreError> {
        let _guard = store.lock().await;
        let projects: Vec<Project> = store.load(PROJECTS_KEY).await?;
        if !projects.iter().any(|p| p.id == project_id) {
            return Ok(None);
        }

        let templates = load_catalog(store).await?;
        let mut documents: Vec<Document> = store
            .load::<Document>(DOCUMENTS_KEY)
            .await?
            .into_iter()
            .filter(|d| d.project_id == project_id)
            .collect();
        documents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        let listed = documents
            .into_iter()
            .map(|document| {
                let template = find_template(&templates, &document.template_id);
                if template.is_none() {
                    tracing::warn!(
                        document_id = %document.id,
                        template_id = %document.template_id,
                        "Document references a template missing from the catalog"
                    );
                }
                DocumentWithTemplate { document, template }
            })
            .collect();
        Ok(Some(listed))
    }

    /// Replace a document's content and bump `updated_at`.
    ///
    /// Returns `None` if no document with the given `id` exists.
    pub async fn update(
        store: &Store,
        id: EntityId,
        input: &UpdateDocument,
    ) -> Result<Option<Document>, StoreError> {
        validate_document_content(&input.content)?;

        let _guard = store.lock().await;
        let mut documents: Vec<Document> = store.load(DOCUMENTS_KEY).await?;
        let Some(document) = documents.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        document.content = input.content.clone();
        document.updated_at = Utc::now();
        let updated = document.clone();

        store.save(DOCUMENTS_KEY, &documents).await?;

        tracing::debug!(document_id = %id, "Document content saved");
        Ok(Some(updated))
    }

    /// Delete a document. Returns `true` if a document was removed.
    pub async fn delete(store: &Store, id: EntityId) -> Result<bool, StoreError> {
        let _guard = store.lock().await;
        let mut documents: Vec<Document> = store.load(DOCUMENTS_KEY).await?;
        let before = documents.len();
        documents.retain(|d| d.id != id);
        if documents.len() == before {
            return Ok(false);
        }
        store.save(DOCUMENTS_KEY, &documents).await?;

        tracing::info!(document_id = %id, "Document deleted");
        Ok(true)
    }
}

fn find_template(templates: &[Template], id: &str) -> Option<Template> {
    templates.iter().find(|t| t.id == id).cloned()
}
