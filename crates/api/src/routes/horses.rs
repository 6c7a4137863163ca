//! Route definitions for the `/horses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::horses;
use crate::state::AppState;

/// Routes mounted at `/horses`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// GET    /name/{name}        -> get_by_name
/// GET    /parents/{name}     -> get_by_parent
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(horses::list).post(horses::create))
        .route(
            "/{id}",
            get(horses::get_by_id)
                .put(horses::update)
                .delete(horses::delete),
        )
        .route("/name/{name}", get(horses::get_by_name))
        .route("/parents/{name}", get(horses::get_by_parent))
}
