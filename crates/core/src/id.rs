//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a medicine record.
///
/// Wraps the opaque string code carried by the record (an NDC or equivalent).
/// Seeded data arrives with hand-assigned codes; fresh identifiers are
/// generated from a UUIDv7 (time-ordered), prefixed `NDC-`.
///
/// An identifier may be empty only while a record is a transient draft; the
/// store rejects empty identifiers on insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MedicineId(String);

impl MedicineId {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generate a fresh identifier from a time-ordered source.
    ///
    /// Uniqueness against an existing collection is the caller's concern
    /// (the store re-draws on collision).
    pub fn generate() -> Self {
        Self(format!("NDC-{}", Uuid::now_v7().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for MedicineId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for MedicineId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for MedicineId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
