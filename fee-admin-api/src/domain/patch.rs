//! Helpers for partial-update (PATCH) request bodies.
//!
//! A nullable column needs three states in a patch body: absent (leave the
//! column alone), `null` (clear it) and a value (overwrite it). Those map to
//! `None`, `Some(None)` and `Some(Some(v))` on an `Option<Option<T>>` field
//! declared with `#[serde(default, deserialize_with = "deserialize_some")]`.

use serde::{Deserialize, Deserializer};

/// Wraps any present value, including `null`, in `Some`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
