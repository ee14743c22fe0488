//! Integration tests for the project, document, and template repositories.
//!
//! Exercises the full repository layer against an in-memory store:
//! - Catalog seeding and lookup
//! - Project CRUD with cascading delete
//! - Document creation defaults, joins, update and delete

use assert_matches::assert_matches;
use dtp_core::error::CoreError;
use dtp_core::template::Phase;
use dtp_core::types::new_entity_id;
use dtp_db::models::document::{CreateDocument, Document, UpdateDocument};
use dtp_db::models::project::{CreateProject, UpdateProject};
use dtp_db::repositories::{DocumentRepo, ProjectRepo, TemplateRepo};
use dtp_db::store::{WriteBatch, DOCUMENTS_KEY, TEMPLATES_KEY, VERSION_KEY};
use dtp_db::{Store, StoreError};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: None,
    }
}

fn new_document(project_id: uuid::Uuid, template_id: &str) -> CreateDocument {
    CreateDocument {
        project_id,
        template_id: template_id.to_string(),
        content: None,
    }
}

/// Content with nesting, `null`, floats, integer extremes and escapes.
fn nested_content() -> Value {
    json!({
        "a": [1, 2.5, null, { "b": "é\"\n" }],
        "big": u64::MAX,
        "neg": i64::MIN,
        "nested": { "x": { "y": [] } },
        "flag": false
    })
}

/// Sleep long enough for `Utc::now()` to advance between writes.
async fn tick() {
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
}

// ---------------------------------------------------------------------------
// Test: Template catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_catalog_seeds_once() {
    let store = Store::in_memory();
    assert!(TemplateRepo::ensure_seeded(&store).await.unwrap());
    assert!(!TemplateRepo::ensure_seeded(&store).await.unwrap());

    let templates = TemplateRepo::list(&store, None).await.unwrap();
    assert_eq!(templates.len(), 19);
    assert!(store.exists(VERSION_KEY).await.unwrap());
}

#[tokio::test]
async fn test_catalog_seeds_lazily_on_first_read() {
    let store = Store::in_memory();
    let template = TemplateRepo::find_by_id(&store, "empathy-map")
        .await
        .unwrap()
        .expect("empathy-map should be seeded");
    assert_eq!(template.title, "Empathy Map");
    assert_eq!(template.phase, Phase::Empathize);
}

#[tokio::test]
async fn test_existing_catalog_is_not_replaced() {
    let store = Store::in_memory();
    let mut batch = WriteBatch::default();
    batch.put_raw(TEMPLATES_KEY, "[]");
    store.commit(batch).await.unwrap();

    assert!(!TemplateRepo::ensure_seeded(&store).await.unwrap());
    assert!(TemplateRepo::list(&store, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_templates_sorted_and_filtered() {
    let store = Store::in_memory();
    let all = TemplateRepo::list(&store, None).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
    let mut sorted = titles.clone();
    sorted.sort();
    assert_eq!(titles, sorted);

    let ideate = TemplateRepo::list(&store, Some(Phase::Ideate)).await.unwrap();
    assert!(!ideate.is_empty());
    assert!(ideate.iter().all(|t| t.phase == Phase::Ideate));
}

#[tokio::test]
async fn test_unknown_template_is_none() {
    let store = Store::in_memory();
    assert!(TemplateRepo::find_by_id(&store, "does-not-exist")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_project_sets_timestamps() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(&store, &new_project("Mobile App Redesign"))
        .await
        .unwrap();
    assert_eq!(project.name, "Mobile App Redesign");
    assert_eq!(project.created_at, project.updated_at);
    assert_eq!(project.description, None);

    let found = ProjectRepo::find_by_id(&store, project.id).await.unwrap();
    assert_eq!(found, Some(project));
}

#[tokio::test]
async fn test_create_project_rejects_blank_name() {
    let store = Store::in_memory();
    let result = ProjectRepo::create(&store, &new_project("  ")).await;
    assert_matches!(result, Err(StoreError::Core(CoreError::Validation(_))));
    assert!(ProjectRepo::list(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_projects_most_recent_first() {
    let store = Store::in_memory();
    let first = ProjectRepo::create(&store, &new_project("First")).await.unwrap();
    tick().await;
    let second = ProjectRepo::create(&store, &new_project("Second")).await.unwrap();

    let ids: Vec<_> = ProjectRepo::list(&store)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);

    tick().await;
    ProjectRepo::update(&store, first.id, &UpdateProject::default())
        .await
        .unwrap();
    let ids: Vec<_> = ProjectRepo::list(&store)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_update_project_applies_only_given_fields() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(
        &store,
        &CreateProject {
            name: "Checkout".to_string(),
            description: Some("Initial".to_string()),
        },
    )
    .await
    .unwrap();
    tick().await;

    let updated = ProjectRepo::update(
        &store,
        project.id,
        &UpdateProject {
            name: Some("Checkout Flow".to_string()),
            description: None,
        },
    )
    .await
    .unwrap()
    .expect("project exists");

    assert_eq!(updated.name, "Checkout Flow");
    assert_eq!(updated.description.as_deref(), Some("Initial"));
    assert_eq!(updated.created_at, project.created_at);
    assert!(updated.updated_at > project.updated_at);
}

#[tokio::test]
async fn test_update_missing_project_returns_none() {
    let store = Store::in_memory();
    let result = ProjectRepo::update(&store, new_entity_id(), &UpdateProject::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_project_cascades_to_its_documents_only() {
    let store = Store::in_memory();
    let doomed = ProjectRepo::create(&store, &new_project("Doomed")).await.unwrap();
    let kept = ProjectRepo::create(&store, &new_project("Kept")).await.unwrap();

    DocumentRepo::create(&store, &new_document(doomed.id, "empathy-map"))
        .await
        .unwrap();
    DocumentRepo::create(&store, &new_document(doomed.id, "scamper"))
        .await
        .unwrap();
    let survivor = DocumentRepo::create(&store, &new_document(kept.id, "empathy-map"))
        .await
        .unwrap();

    let removed = ProjectRepo::delete(&store, doomed.id).await.unwrap();
    assert_eq!(removed, Some(2));

    assert!(ProjectRepo::find_by_id(&store, doomed.id).await.unwrap().is_none());
    assert!(DocumentRepo::list_by_project(&store, doomed.id)
        .await
        .unwrap()
        .is_none());

    let all: Vec<Document> = store.load(DOCUMENTS_KEY).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, survivor.id);
}

#[tokio::test]
async fn test_delete_missing_project_returns_none() {
    let store = Store::in_memory();
    assert_eq!(ProjectRepo::delete(&store, new_entity_id()).await.unwrap(), None);
}

#[tokio::test]
async fn test_project_detail_includes_documents() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(&store, &new_project("Detail")).await.unwrap();
    let doc = DocumentRepo::create(&store, &new_document(project.id, "user-needs"))
        .await
        .unwrap();

    let detail = ProjectRepo::find_detail(&store, project.id)
        .await
        .unwrap()
        .expect("project exists");
    assert_eq!(detail.project, project);
    assert_eq!(detail.documents.len(), 1);
    assert_eq!(detail.documents[0].id, doc.id);
}

// ---------------------------------------------------------------------------
// Test: Documents
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_document_with_content() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(&store, &new_project("Mobile App Redesign"))
        .await
        .unwrap();

    let doc = DocumentRepo::create(
        &store,
        &CreateDocument {
            project_id: project.id,
            template_id: "empathy-map".to_string(),
            content: Some(json!({ "says": "It's slow" })),
        },
    )
    .await
    .unwrap();
    assert_eq!(doc.content, json!({ "says": "It's slow" }));
    assert_eq!(doc.created_at, doc.updated_at);

    let listed = DocumentRepo::list_by_project(&store, project.id)
        .await
        .unwrap()
        .expect("project exists");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].document, doc);
    assert_eq!(
        listed[0].template.as_ref().map(|t| t.title.as_str()),
        Some("Empathy Map")
    );
}

#[tokio::test]
async fn test_create_document_without_content_uses_template_default() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(&store, &new_project("Defaults")).await.unwrap();

    let form = DocumentRepo::create(&store, &new_document(project.id, "empathy-map"))
        .await
        .unwrap();
    assert_eq!(form.content["says"], "");
    assert_eq!(form.content["feels"], "");

    let journey = DocumentRepo::create(
        &store,
        &CreateDocument {
            content: Some(Value::Null),
            ..new_document(project.id, "user-journey-map")
        },
    )
    .await
    .unwrap();
    assert!(journey.content["grid"].is_object());
}

#[tokio::test]
async fn test_create_document_keeps_explicit_empty_object() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(&store, &new_project("Blank")).await.unwrap();

    let doc = DocumentRepo::create(
        &store,
        &CreateDocument {
            content: Some(json!({})),
            ..new_document(project.id, "empathy-map")
        },
    )
    .await
    .unwrap();
    assert_eq!(doc.content, json!({}));

    let reloaded = DocumentRepo::find_by_id(&store, doc.id)
        .await
        .unwrap()
        .expect("document exists");
    assert_eq!(reloaded.content, json!({}));
}

#[tokio::test]
async fn test_nested_content_survives_create_and_update() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(&store, &new_project("Nested")).await.unwrap();

    let created_content = nested_content();
    let doc = DocumentRepo::create(
        &store,
        &CreateDocument {
            content: Some(created_content.clone()),
            ..new_document(project.id, "mind-mapping")
        },
    )
    .await
    .unwrap();
    let reloaded = DocumentRepo::find_by_id(&store, doc.id).await.unwrap().unwrap();
    assert_eq!(reloaded.content, created_content);
    assert_eq!(reloaded.content["big"].as_u64(), Some(u64::MAX));
    assert_eq!(reloaded.content["neg"].as_i64(), Some(i64::MIN));

    let mut edited = nested_content();
    edited["a"][3]["b"] = json!("ünïcödé \\ \t 🙂");
    edited["nested"]["x"]["y"] = json!([[], {}, -0.125]);
    DocumentRepo::update(&store, doc.id, &UpdateDocument { content: edited.clone() })
        .await
        .unwrap()
        .expect("document exists");

    let reloaded = DocumentRepo::find_by_id(&store, doc.id).await.unwrap().unwrap();
    assert_eq!(reloaded.content, edited);
}

#[tokio::test]
async fn test_list_documents_for_unknown_project_returns_none() {
    let store = Store::in_memory();
    let listed = DocumentRepo::list_by_project(&store, new_entity_id())
        .await
        .unwrap();
    assert!(listed.is_none());
}

#[tokio::test]
async fn test_create_document_for_unknown_project_fails() {
    let store = Store::in_memory();
    let result = DocumentRepo::create(&store, &new_document(new_entity_id(), "empathy-map")).await;
    assert_matches!(
        result,
        Err(StoreError::Core(CoreError::NotFound { entity: "Project", .. }))
    );
}

#[tokio::test]
async fn test_create_document_rejects_non_object_content() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(&store, &new_project("Bad")).await.unwrap();
    let result = DocumentRepo::create(
        &store,
        &CreateDocument {
            content: Some(json!(["not", "an", "object"])),
            ..new_document(project.id, "empathy-map")
        },
    )
    .await;
    assert_matches!(result, Err(StoreError::Core(CoreError::Validation(_))));
}

#[tokio::test]
async fn test_document_with_missing_template_lists_without_template() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(&store, &new_project("Orphans")).await.unwrap();
    let doc = DocumentRepo::create(&store, &new_document(project.id, "retired-template"))
        .await
        .unwrap();
    assert_eq!(doc.content, json!({}));

    let listed = DocumentRepo::list_by_project(&store, project.id)
        .await
        .unwrap()
        .expect("project exists");
    assert_eq!(listed.len(), 1);
    assert!(listed[0].template.is_none());
}

#[tokio::test]
async fn test_update_document_replaces_content() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(&store, &new_project("Edits")).await.unwrap();
    let doc = DocumentRepo::create(&store, &new_document(project.id, "empathy-map"))
        .await
        .unwrap();
    tick().await;

    let updated = DocumentRepo::update(
        &store,
        doc.id,
        &UpdateDocument {
            content: json!({ "thinks": "Why so many steps?" }),
        },
    )
    .await
    .unwrap()
    .expect("document exists");

    assert_eq!(updated.content, json!({ "thinks": "Why so many steps?" }));
    assert_eq!(updated.created_at, doc.created_at);
    assert!(updated.updated_at > doc.updated_at);

    let reloaded = DocumentRepo::find_by_id(&store, doc.id).await.unwrap();
    assert_eq!(reloaded, Some(updated));
}

#[tokio::test]
async fn test_update_missing_document_returns_none() {
    let store = Store::in_memory();
    let result = DocumentRepo::update(
        &store,
        new_entity_id(),
        &UpdateDocument { content: json!({}) },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_documents_listed_most_recent_first() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(&store, &new_project("Order")).await.unwrap();
    let older = DocumentRepo::create(&store, &new_document(project.id, "empathy-map"))
        .await
        .unwrap();
    tick().await;
    let newer = DocumentRepo::create(&store, &new_document(project.id, "scamper"))
        .await
        .unwrap();

    let ids: Vec<_> = DocumentRepo::list_by_project(&store, project.id)
        .await
        .unwrap()
        .expect("project exists")
        .into_iter()
        .map(|d| d.document.id)
        .collect();
    assert_eq!(ids, vec![newer.id, older.id]);
}

#[tokio::test]
async fn test_document_detail_joins_template_and_project() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(&store, &new_project("Joined")).await.unwrap();
    let doc = DocumentRepo::create(&store, &new_document(project.id, "questionnaire"))
        .await
        .unwrap();

    let detail = DocumentRepo::find_detail(&store, doc.id)
        .await
        .unwrap()
        .expect("document exists");
    assert_eq!(detail.document, doc);
    assert_eq!(detail.project, Some(project));
    assert_eq!(
        detail.template.map(|t| t.id),
        Some("questionnaire".to_string())
    );
}

#[tokio::test]
async fn test_delete_document() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(&store, &new_project("Delete")).await.unwrap();
    let doc = DocumentRepo::create(&store, &new_document(project.id, "empathy-map"))
        .await
        .unwrap();

    assert!(DocumentRepo::delete(&store, doc.id).await.unwrap());
    assert!(!DocumentRepo::delete(&store, doc.id).await.unwrap());
    assert!(DocumentRepo::find_by_id(&store, doc.id).await.unwrap().is_none());
    assert!(ProjectRepo::find_by_id(&store, project.id)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_document_content_is_stored_as_encoded_string() {
    let store = Store::in_memory();
    let project = ProjectRepo::create(&store, &new_project("Wire")).await.unwrap();
    DocumentRepo::create(
        &store,
        &CreateDocument {
            content: Some(json!({ "says": "hello" })),
            ..new_document(project.id, "empathy-map")
        },
    )
    .await
    .unwrap();

    let raw: Vec<serde_json::Value> = store.load(DOCUMENTS_KEY).await.unwrap();
    let content = raw[0]["content"].as_str().expect("content is a string");
    let decoded: serde_json::Value = serde_json::from_str(content).unwrap();
    assert_eq!(decoded, json!({ "says": "hello" }));
    assert_eq!(raw[0]["projectId"], json!(project.id.to_string()));
}
