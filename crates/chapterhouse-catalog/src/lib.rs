//! Chapterhouse Catalog -- static campaign content loaded once per process.
//!
//! This crate owns the knight and kingdom catalogs that the companion app
//! reads from. Catalog documents are authored as JSON, parsed once at the
//! loading boundary, and handed out through an immutable [`Catalog`] handle.
//!
//! # Quick Start
//!
//! ```
//! use chapterhouse_catalog::prelude::*;
//! use serde_json::json;
//!
//! let catalog = Catalog::from_documents(
//!     json!([{ "id": "percival" }, { "id": null }, { "id": "gawain" }]),
//!     vec![json!({ "id": "north", "name": "The Northern March" })],
//!     &LoadOptions::default(),
//! )
//! .unwrap();
//!
//! let ids: Vec<&str> = catalog.knights().ids.iter().map(|id| id.as_str()).collect();
//! assert_eq!(ids, ["percival", "gawain"]);
//! assert_eq!(catalog.kingdoms().len(), 1);
//! ```
//!
//! # Modules
//!
//! - [`knight`]: knight records and identifiers.
//! - [`kingdom`]: kingdom records.
//! - [`version`]: content version tokens used as memoization keys.
//! - [`memo`]: single-slot memo cell keyed on a token.
//! - [`accessor`]: the knight catalog accessor (ids + records, memoized).
//! - [`aggregate`]: ordered kingdom aggregation and kingdom document parsing.
//! - [`config`]: catalog manifest and load options.
//! - [`catalog`]: the immutable [`Catalog`] handle.

#![deny(unsafe_code)]

use std::path::PathBuf;

pub mod accessor;
pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod kingdom;
pub mod knight;
pub mod memo;
pub mod version;

pub use catalog::Catalog;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced at the catalog loading boundary.
///
/// Accessors over already-loaded data never fail; only reading and parsing
/// catalog documents can.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A catalog document could not be read from disk.
    #[error("failed to read catalog document '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog document is not valid JSON or does not match the expected shape.
    #[error("failed to parse catalog document '{document}': {source}")]
    Json {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    /// The knight document is not a JSON array (strict loading only).
    #[error("knight document '{document}' must be a JSON array, found {found}")]
    NotASequence {
        document: String,
        found: &'static str,
    },

    /// The manifest lists no kingdom documents (strict loading only).
    #[error("catalog manifest lists no kingdom documents")]
    EmptyManifest,
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::accessor::{derive_view, KnightCatalogAccessor, KnightCatalogView, KnightSource};
    pub use crate::aggregate::{aggregate_kingdoms, load_kingdom, parse_kingdom};
    pub use crate::catalog::Catalog;
    pub use crate::config::{CatalogManifest, LoadOptions};
    pub use crate::kingdom::KingdomCatalog;
    pub use crate::knight::{KnightId, KnightRecord};
    pub use crate::memo::Memo;
    pub use crate::version::CatalogVersion;
    pub use crate::CatalogError;
}

/// Short name of a JSON value's kind, for diagnostics.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
