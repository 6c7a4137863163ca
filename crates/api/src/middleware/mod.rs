//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the caller from a JWT Bearer token.
//! - [`rbac::RequireEditor`] -- Requires a profile the registry
//!   [`Authorizer`](crate::authorization::Authorizer) admits for edits.

pub mod auth;
pub mod rbac;
