//! Catalog configuration.
//!
//! A [`CatalogManifest`] lists the documents that make up a catalog: one
//! knight document and any number of kingdom documents, the latter in the
//! order they should appear in the aggregate. [`LoadOptions`] controls how
//! strictly the documents are checked while loading.
//!
//! ```
//! use chapterhouse_catalog::config::CatalogManifest;
//!
//! let manifest: CatalogManifest = serde_json::from_str(
//!     r#"{ "knights": "knights.json", "kingdoms": ["kingdoms/north.json"] }"#,
//! )
//! .unwrap();
//! assert_eq!(manifest.kingdoms.len(), 1);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CatalogError;

// ---------------------------------------------------------------------------
// CatalogManifest
// ---------------------------------------------------------------------------

/// The documents forming a catalog. Relative paths resolve against the
/// directory passed to [`Catalog::load`](crate::Catalog::load).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Path to the knight document (a JSON array of knight records).
    #[serde(default = "default_knights_path")]
    pub knights: PathBuf,
    /// Paths to kingdom documents, in declaration order.
    #[serde(default)]
    pub kingdoms: Vec<PathBuf>,
}

fn default_knights_path() -> PathBuf {
    PathBuf::from("knights.json")
}

impl Default for CatalogManifest {
    fn default() -> Self {
        Self {
            knights: default_knights_path(),
            kingdoms: Vec::new(),
        }
    }
}

impl CatalogManifest {
    /// Read a manifest from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let value = read_json(path)?;
        serde_json::from_value(value).map_err(|source| CatalogError::Json {
            document: path.display().to_string(),
            source,
        })
    }
}

// ---------------------------------------------------------------------------
// LoadOptions
// ---------------------------------------------------------------------------

/// How strictly catalog documents are checked while loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Reject a knight document that is not an array, and a manifest with
    /// no kingdoms, instead of degrading to empty catalogs.
    #[serde(default)]
    pub strict: bool,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Read a file and parse it as JSON.
pub(crate) fn read_json(path: &Path) -> Result<Value, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CatalogError::Json {
        document: path.display().to_string(),
        source,
    })
}
