//! Kingdom records.
//!
//! Each kingdom is authored as its own JSON document. Only `id` and `name` are
//! interpreted here; everything else the author wrote (chapters, map tiles,
//! lore) is carried through untouched in [`KingdomCatalog::extra`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Static definition of one kingdom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KingdomCatalog {
    /// Catalog identifier (e.g. `"north"`).
    pub id: String,
    /// Human-readable kingdom name.
    pub name: String,
    /// All other authored fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl KingdomCatalog {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Look up an authored field outside `id` and `name`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
