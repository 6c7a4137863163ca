//! Authorization Checker: decides whether a caller profile may change
//! registry records.
//!
//! Mutating handlers never call this directly; they take the
//! [`RequireEditor`](crate::middleware::rbac::RequireEditor) extractor,
//! which consults the [`Authorizer`] held in state.

use async_trait::async_trait;
use studbook_core::error::CoreError;
use studbook_core::roles::is_editor_profile;

/// Decides whether `profile` may create, update or delete horses.
///
/// `Ok(false)` is a denial (403). `Err(_)` means the decision itself could
/// not be made and is reported as a 500.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn authorize(&self, profile: &str) -> Result<bool, CoreError>;
}

/// [`Authorizer`] that admits a fixed set of profiles.
#[derive(Debug, Clone)]
pub struct ProfileAuthorizer {
    editor_profiles: Vec<String>,
}

impl ProfileAuthorizer {
    pub fn new(editor_profiles: Vec<String>) -> Self {
        Self { editor_profiles }
    }
}

#[async_trait]
impl Authorizer for ProfileAuthorizer {
    async fn authorize(&self, profile: &str) -> Result<bool, CoreError> {
        Ok(is_editor_profile(profile, &self.editor_profiles))
    }
}
