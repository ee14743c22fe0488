pub mod document;
pub mod health;
pub mod project;
pub mod template;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                          list, create
/// /projects/{id}                     get (with documents), update, delete (cascade)
/// /projects/{id}/documents           documents of a project with templates
///
/// /templates                         list (?phase=)
/// /templates/{id}                    get
///
/// /documents                         list (?projectId=), create
/// /documents/{id}                    get (with template and project), update, delete
/// /documents/{id}/render             render tree
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/templates", template::router())
        .nest("/documents", document::router())
}
