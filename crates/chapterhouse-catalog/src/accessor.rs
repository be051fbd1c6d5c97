//! Knight catalog accessor.
//!
//! Screens that list knights need two things from the catalog: the ordered
//! list of knight identifiers and the records themselves. The
//! [`KnightCatalogAccessor`] derives both from a [`KnightSource`] and memoizes
//! the result on the source's [`CatalogVersion`], so repeated evaluation
//! passes over an unchanged catalog reuse the same [`KnightCatalogView`].
//!
//! # Degradation
//!
//! The accessor never fails. A source that is not a JSON array produces an
//! empty view (and a `warn` log line). Records without a usable `id` stay in
//! [`KnightCatalogView::list`] but are left out of
//! [`KnightCatalogView::ids`].
//!
//! # Example
//!
//! ```
//! use chapterhouse_catalog::accessor::{KnightCatalogAccessor, KnightSource};
//! use serde_json::json;
//!
//! let source = KnightSource::new(json!([{ "id": "a" }, { "id": null }, { "id": "b" }]));
//! let mut accessor = KnightCatalogAccessor::new();
//!
//! let view = accessor.view(&source);
//! assert_eq!(view.id_strs(), ["a", "b"]);
//! assert_eq!(view.list.len(), 3);
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::knight::{KnightId, KnightRecord};
use crate::memo::Memo;
use crate::version::CatalogVersion;

// ---------------------------------------------------------------------------
// KnightSource
// ---------------------------------------------------------------------------

/// A knight catalog document as authored, tagged with its content version.
#[derive(Debug, Clone)]
pub struct KnightSource {
    value: Arc<Value>,
    version: CatalogVersion,
}

impl KnightSource {
    pub fn new(value: Value) -> Self {
        let version = CatalogVersion::of_value(&value);
        Self {
            value: Arc::new(value),
            version,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn version(&self) -> CatalogVersion {
        self.version
    }

    /// Whether the document has the expected array shape.
    pub fn is_sequence(&self) -> bool {
        self.value.is_array()
    }
}

// ---------------------------------------------------------------------------
// KnightCatalogView
// ---------------------------------------------------------------------------

/// Derived view over a knight source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnightCatalogView {
    /// Identifiers of every record that has one, in source order.
    pub ids: Vec<KnightId>,
    /// Every record of the source, in source order. Empty if the source was
    /// not an array.
    pub list: Vec<KnightRecord>,
}

impl KnightCatalogView {
    /// Identifiers as string slices.
    pub fn id_strs(&self) -> Vec<&str> {
        self.ids.iter().map(KnightId::as_str).collect()
    }

    /// First record carrying `id`.
    pub fn find(&self, id: &str) -> Option<&KnightRecord> {
        self.list
            .iter()
            .find(|record| record.id().is_some_and(|rid| rid.as_str() == id))
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// Derive a view from a raw knight document without memoization.
pub fn derive_view(value: &Value) -> KnightCatalogView {
    let Some(entries) = value.as_array() else {
        tracing::warn!(
            found = crate::json_kind(value),
            "knight catalog is not an array -- using an empty catalog"
        );
        return KnightCatalogView::default();
    };

    let list: Vec<KnightRecord> = entries
        .iter()
        .cloned()
        .map(KnightRecord::from_value)
        .collect();

    let ids: Vec<KnightId> = list.iter().filter_map(|r| r.id().cloned()).collect();

    let skipped = list.len() - ids.len();
    if skipped > 0 {
        tracing::warn!(skipped, "knight records without an id are left out of the id list");
    }

    KnightCatalogView { ids, list }
}

// ---------------------------------------------------------------------------
// KnightCatalogAccessor
// ---------------------------------------------------------------------------

/// Memoized [`derive_view`] keyed on the source's content version.
#[derive(Debug, Clone)]
pub struct KnightCatalogAccessor {
    memo: Memo<CatalogVersion, Arc<KnightCatalogView>>,
}

impl KnightCatalogAccessor {
    pub fn new() -> Self {
        Self {
            memo: Memo::new("knight_catalog"),
        }
    }

    /// The view for `source`, recomputed only if its content changed since
    /// the previous call.
    pub fn view(&mut self, source: &KnightSource) -> Arc<KnightCatalogView> {
        Arc::clone(
            self.memo
                .get_or_compute(source.version(), || Arc::new(derive_view(source.value()))),
        )
    }

    /// Number of times a view has been derived.
    pub fn recomputes(&self) -> u64 {
        self.memo.recomputes()
    }
}

impl Default for KnightCatalogAccessor {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_drop_missing_and_null() {
        let view = derive_view(&json!([{ "id": "a" }, { "id": null }, { "id": "b" }, {}]));
        assert_eq!(view.id_strs(), ["a", "b"]);
        assert_eq!(view.list.len(), 4);
    }

    #[test]
    fn non_array_source_degrades_to_empty() {
        for malformed in [json!({ "id": "a" }), json!("knights"), json!(null), json!(12)] {
            let view = derive_view(&malformed);
            assert!(view.ids.is_empty());
            assert!(view.list.is_empty());
        }
    }

    #[test]
    fn order_is_preserved() {
        let view = derive_view(&json!([{ "id": "c" }, { "id": "a" }, { "id": "b" }]));
        assert_eq!(view.id_strs(), ["c", "a", "b"]);
    }

    #[test]
    fn duplicate_ids_are_kept() {
        let view = derive_view(&json!([{ "id": "a" }, { "id": "a" }]));
        assert_eq!(view.id_strs(), ["a", "a"]);
    }

    #[test]
    fn numeric_ids_are_listed_as_integers() {
        let view = derive_view(&json!([{ "id": 7.0 }, { "id": 12 }, { "id": 0.0 }]));
        assert_eq!(view.id_strs(), ["7", "12"]);
        assert_eq!(view.find("7").map(KnightRecord::raw), Some(&json!({ "id": 7.0 })));
    }

    #[test]
    fn find_returns_first_match() {
        let view = derive_view(&json!([
            { "id": "a", "name": "First" },
            { "id": "a", "name": "Second" }
        ]));
        assert_eq!(view.find("a").and_then(KnightRecord::name), Some("First"));
        assert!(view.find("z").is_none());
    }

    #[test]
    fn accessor_memoizes_on_content() {
        let mut accessor = KnightCatalogAccessor::new();
        let source = KnightSource::new(json!([{ "id": "a" }]));

        let first = accessor.view(&source);
        let second = accessor.view(&source);
        assert!(Arc::ptr_eq(&first, &second));

        // An equal document built separately shares the version.
        let twin = KnightSource::new(json!([{ "id": "a" }]));
        let third = accessor.view(&twin);
        assert!(Arc::ptr_eq(&first, &third));
        assert_eq!(accessor.recomputes(), 1);
    }

    #[test]
    fn accessor_recomputes_on_changed_content() {
        let mut accessor = KnightCatalogAccessor::new();
        accessor.view(&KnightSource::new(json!([{ "id": "a" }])));
        let view = accessor.view(&KnightSource::new(json!([{ "id": "b" }])));
        assert_eq!(view.id_strs(), ["b"]);
        assert_eq!(accessor.recomputes(), 2);
    }
}
