use axum::routing::get;
use axum::Router;

use crate::handlers::template;
use crate::state::AppState;

/// Routes mounted at `/templates`. The catalog is read-only.
///
/// ```text
/// GET    /                    -> list (?phase=)
/// GET    /{id}                -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(template::list))
        .route("/{id}", get(template::get_by_id))
}
