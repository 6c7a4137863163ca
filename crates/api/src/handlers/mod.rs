//! Request handlers.
//!
//! Handlers delegate to the collaborators held in
//! [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod horses;
