//! Domain building blocks for the studbook registry.
//!
//! Holds the pieces shared by the database and HTTP layers: id and
//! timestamp aliases, the domain error type, paging rules for offspring
//! lookups, localized client messages, and registry profile rules.

pub mod error;
pub mod messages;
pub mod pagination;
pub mod roles;
pub mod types;
