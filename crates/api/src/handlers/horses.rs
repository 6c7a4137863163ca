//! Handlers for the `/horses` resource.
//!
//! Reads are public. Create, update and delete take [`RequireEditor`], so
//! the authorization decision is made before the body is parsed and before
//! the Horse Data Service is touched.
//!
//! Path, query and body rejections are mapped to [`AppError::BadRequest`]
//! so every 400 carries the same body shape.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use studbook_core::error::CoreError;
use studbook_core::messages::{NO_HORSES_REGISTERED, NO_HORSES_WITH_NAME, NO_OFFSPRING_REGISTERED};
use studbook_core::pagination::OffspringPage;
use studbook_core::types::DbId;
use studbook_db::models::horse::{CreateHorse, DeleteResult, Horse, UpdateHorse};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::PaginationParams;
use crate::state::AppState;

/// Turn an empty lookup into a 404 carrying `message`.
fn non_empty(horses: Vec<Horse>, message: &str) -> AppResult<Json<Vec<Horse>>> {
    if horses.is_empty() {
        return Err(AppError::Core(CoreError::NotFound(message.to_string())));
    }
    Ok(Json(horses))
}

/// GET /api/v1/horses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Horse>>> {
    let horses = state.horses.list().await?;
    non_empty(horses, NO_HORSES_REGISTERED)
}

/// GET /api/v1/horses/{id}
///
/// An unknown id is not an error here: the body is `null`.
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Option<Horse>>> {
    let Path(id) = id.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let horse = state.horses.find_by_id(id).await?;
    Ok(Json(horse))
}

/// GET /api/v1/horses/name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Horse>>> {
    let horses = state.horses.find_by_name(&name).await?;
    non_empty(horses, NO_HORSES_WITH_NAME)
}

/// GET /api/v1/horses/parents/{name}?limit=&offset=
///
/// Paging is validated before the service is called.
pub async fn get_by_parent(
    State(state): State<AppState>,
    Path(name): Path<String>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Json<Vec<Horse>>> {
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let page = OffspringPage::from_query(params.limit, params.offset)?;

    let horses = state
        .horses
        .find_by_parent(&name, page.limit, page.offset)
        .await?;
    non_empty(horses, NO_OFFSPRING_REGISTERED)
}

/// POST /api/v1/horses
///
/// Field values are passed through unchecked; the store decides what it
/// accepts.
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    input: Result<Json<CreateHorse>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Horse>)> {
    let Json(input) = input.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let horse = state.horses.create(&input).await?;

    tracing::info!(
        horse_id = horse.id,
        name = %horse.name,
        subject = %user.subject,
        "Horse registered",
    );

    Ok((StatusCode::CREATED, Json(horse)))
}

/// PUT /api/v1/horses/{id}
///
/// Responds 404 with `{}` when nothing was modified, which covers both an
/// unknown id and a body identical to the stored record.
pub async fn update(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    input: Result<Json<UpdateHorse>, JsonRejection>,
) -> AppResult<Response> {
    let Path(id) = id.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let Json(input) = input.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let result = state.horses.update(id, &input).await?;

    if result.modified_count == 0 {
        return Ok((StatusCode::NOT_FOUND, Json(json!({}))).into_response());
    }

    tracing::info!(horse_id = id, subject = %user.subject, "Horse updated");

    Ok(Json(result).into_response())
}

/// DELETE /api/v1/horses/{id}
pub async fn delete(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DeleteResult>> {
    let Path(id) = id.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let result = state.horses.delete(id).await?;

    tracing::info!(
        horse_id = id,
        deleted = result.deleted_count,
        subject = %user.subject,
        "Horse deleted",
    );

    Ok(Json(result))
}
