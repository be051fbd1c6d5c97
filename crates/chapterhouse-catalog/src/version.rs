//! Content version tokens.
//!
//! A [`CatalogVersion`] is the blake3 hash of a value's canonical JSON text.
//! Two sources with equal content share a version, so memo cells keyed on it
//! recompute only when the content actually changes.

use std::fmt;

use serde_json::Value;

/// Content hash of a catalog source.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CatalogVersion([u8; 32]);

impl CatalogVersion {
    /// Hash a JSON value. Object keys are emitted in sorted order, so the
    /// result does not depend on authoring order.
    pub fn of_value(value: &Value) -> Self {
        Self(*blake3::hash(value.to_string().as_bytes()).as_bytes())
    }

    /// Combine several versions into one, order-sensitive.
    pub fn combine<'a>(versions: impl IntoIterator<Item = &'a CatalogVersion>) -> Self {
        let mut hasher = blake3::Hasher::new();
        for version in versions {
            hasher.update(&version.0);
        }
        Self(*hasher.finalize().as_bytes())
    }

    /// Lowercase hex form of the first 8 bytes, for log fields.
    pub fn short(&self) -> String {
        self.0[..8].iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Debug for CatalogVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CatalogVersion({})", self.short())
    }
}

impl fmt::Display for CatalogVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}
