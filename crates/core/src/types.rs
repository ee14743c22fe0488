/// Projects and documents are keyed by random v4 UUIDs.
pub type EntityId = uuid::Uuid;

/// Templates are keyed by stable slugs such as `empathy-map`.
pub type TemplateId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh entity id.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::new_v4()
}
