//! Row models and request DTOs.

pub mod horse;

use serde::{Deserialize, Deserializer};

/// Deserialize a field that is present in the payload as `Some`, even when
/// its value is `null`.
///
/// Pair with `#[serde(default)]` so an absent field stays `None`; the
/// result distinguishes "leave unchanged" (`None`) from "clear"
/// (`Some(None)`).
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
