//! Repository for the template catalog.

use dtp_core::catalog::{builtin_templates, CATALOG_VERSION};
use dtp_core::template::{Phase, Template};

use crate::error::StoreError;
use crate::store::{Store, WriteBatch, TEMPLATES_KEY, VERSION_KEY};

/// Read-only access to the template catalog, seeded on first use.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Seed the built-in catalog if the store has none yet.
    ///
    /// Returns `true` if this call wrote the catalog. The guard is a presence
    /// check, so an existing catalog is never replaced.
    pub async fn ensure_seeded(store: &Store) -> Result<bool, StoreError> {
        let _guard = store.lock().await;
        seed_if_absent(store).await
    }

    /// List templates sorted by title, optionally restricted to one phase.
    pub async fn list(store: &Store, phase: Option<Phase>) -> Result<Vec<Template>, StoreError> {
        let _guard = store.lock().await;
        let mut templates: Vec<Template> = load_catalog(store)
            .await?
            .into_iter()
            .filter(|t| phase.map_or(true, |p| t.phase == p))
            .collect();
        templates.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(templates)
    }

    /// Find a template by its slug id.
    pub async fn find_by_id(store: &Store, id: &str) -> Result<Option<Template>, StoreError> {
        let _guard = store.lock().await;
        Ok(load_catalog(store).await?.into_iter().find(|t| t.id == id))
    }
}

async fn seed_if_absent(store: &Store) -> Result<bool, StoreError> {
    if store.exists(TEMPLATES_KEY).await? {
        return Ok(false);
    }

    let templates = builtin_templates();
    let mut batch = WriteBatch::default();
    batch
        .put(TEMPLATES_KEY, &templates)?
        .put_raw(VERSION_KEY, CATALOG_VERSION.to_string());
    store.commit(batch).await?;

    tracing::info!(
        count = templates.len(),
        version = CATALOG_VERSION,
        "Seeded template catalog"
    );
    Ok(true)
}

/// Load the catalog, seeding it first if absent. Caller must hold the lock.
pub(crate) async fn load_catalog(store: &Store) -> Result<Vec<Template>, StoreError> {
    seed_if_absent(store).await?;
    store.load(TEMPLATES_KEY).await
}
