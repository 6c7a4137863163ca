pub mod health;
pub mod horses;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /horses                          list (GET), create (POST, editor)
/// /horses/{id}                     get (GET), update (PUT, editor), delete (DELETE, editor)
/// /horses/name/{name}              lookup by name (GET)
/// /horses/parents/{name}           offspring of a sire or dam, paginated (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/horses", horses::router())
}
