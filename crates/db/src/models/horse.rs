//! Horse models and DTOs.
//!
//! A horse row stores its parents by name rather than by id: imported
//! pedigrees routinely reference ancestors that were never registered
//! themselves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studbook_core::types::{DbId, Timestamp};

use super::double_option;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `horses` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Horse {
    pub id: DbId,
    pub name: String,
    pub father: Option<String>,
    pub mother: Option<String>,
    pub gender: Option<String>,
    pub coat: Option<String>,
    pub birth: Option<NaiveDate>,
    pub owner: Option<String>,
    pub book: Option<String>,
    pub register: Option<String>,
    pub alive: bool,
    pub blocked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for registering a new horse.
///
/// `name` is optional here so a payload without it reaches the store,
/// which rejects the row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateHorse {
    pub name: Option<String>,
    pub father: Option<String>,
    pub mother: Option<String>,
    pub gender: Option<String>,
    pub coat: Option<String>,
    pub birth: Option<NaiveDate>,
    pub owner: Option<String>,
    pub book: Option<String>,
    pub register: Option<String>,
    /// Defaults to `true` in the database when omitted.
    pub alive: Option<bool>,
    /// Defaults to `false` in the database when omitted.
    pub blocked: Option<bool>,
}

/// DTO for updating a horse.
///
/// Only these eleven fields can change; anything else in the request body
/// (including `id`) is dropped during deserialization. Omitted fields keep
/// their stored value. The nullable columns use `Option<Option<T>>`: an
/// explicit `null` clears the stored value. `name`, `alive` and `blocked`
/// cannot hold `NULL`, so `null` leaves them unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateHorse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub father: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub mother: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub gender: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub coat: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub birth: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub owner: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub book: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub register: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
}

// ---------------------------------------------------------------------------
// Write acknowledgments
// ---------------------------------------------------------------------------

/// Outcome of an update.
///
/// `matched_count` counts rows with the requested id; `modified_count`
/// counts rows whose stored values actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct UpdateResult {
    pub matched_count: i64,
    pub modified_count: i64,
}

/// Outcome of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub deleted_count: u64,
}
