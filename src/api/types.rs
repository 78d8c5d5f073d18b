//! User directory API response types.

use serde::{Deserialize, Serialize};

/// A single user record as returned by the directory API.
///
/// Records are immutable once fetched; a re-fetch replaces the whole set,
/// never merges. Every field carries a default so a response object missing
/// a field deserializes to an empty value and renders as an empty cell
/// instead of failing the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Numeric identifier assigned by the service.
    #[serde(default)]
    pub id: u64,
    /// The user's first name.
    #[serde(default)]
    pub first_name: String,
    /// The user's email address.
    #[serde(default)]
    pub email: String,
    /// The user's phone number.
    #[serde(default)]
    pub phone_number: String,
    /// Opaque unique identifier string.
    #[serde(default)]
    pub uid: String,
}
