//! Authorization extractor for mutating registry routes.
//!
//! Extractors run before the request body is read, so a denied caller
//! never reaches the handler and the Horse Data Service is never invoked.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use studbook_core::error::CoreError;
use studbook_core::messages::USER_NOT_AUTHORIZED;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a profile the registry [`Authorizer`](crate::authorization::Authorizer)
/// admits. Rejects with 403 Forbidden otherwise, or 500 if the checker fails.
///
/// ```ignore
/// async fn edit(RequireEditor(user): RequireEditor) -> AppResult<Json<()>> {
///     // user.profile is allowed to change records here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireEditor(pub AuthUser);

impl FromRequestParts<AppState> for RequireEditor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if !state.authorizer.authorize(&user.profile).await? {
            tracing::warn!(
                subject = %user.subject,
                profile = %user.profile,
                "Registry edit denied",
            );
            return Err(AppError::Core(CoreError::Forbidden(
                USER_NOT_AUTHORIZED.into(),
            )));
        }

        Ok(RequireEditor(user))
    }
}
