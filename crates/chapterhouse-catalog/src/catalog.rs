//! The immutable catalog handle.
//!
//! A [`Catalog`] is built exactly once, at startup, from a
//! [`CatalogManifest`] (or directly from in-memory documents) and then passed
//! to every consumer. It is never mutated or reloaded. Cloning is cheap: all
//! clones share the same data.
//!
//! # Loading
//!
//! 1. The knight document is read and wrapped in a [`KnightSource`]. In
//!    strict mode a non-array document is rejected; otherwise it degrades to
//!    an empty knight list.
//! 2. Each kingdom document is read, versioned as authored and parsed in
//!    manifest order, then aggregated with [`aggregate_kingdoms`].
//! 3. The knight view is derived once and stored alongside the sources.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::accessor::{derive_view, KnightCatalogView, KnightSource};
use crate::aggregate::{aggregate_kingdoms, parse_kingdom, read_kingdom};
use crate::config::{read_json, CatalogManifest, LoadOptions};
use crate::kingdom::KingdomCatalog;
use crate::knight::KnightRecord;
use crate::version::CatalogVersion;
use crate::CatalogError;

#[derive(Debug)]
struct CatalogInner {
    knight_source: KnightSource,
    knights: KnightCatalogView,
    kingdoms: Vec<KingdomCatalog>,
    version: CatalogVersion,
}

/// Shared, read-only handle to the loaded campaign catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

impl Catalog {
    /// Load every document named by `manifest`, resolving relative paths
    /// against `base_dir`.
    pub fn load(
        manifest: &CatalogManifest,
        base_dir: &Path,
        options: &LoadOptions,
    ) -> Result<Self, CatalogError> {
        let knights_path = base_dir.join(&manifest.knights);
        let knights = read_json(&knights_path)?;
        check_knight_document(&knights_path.display().to_string(), &knights, options)?;
        check_kingdom_count(manifest.kingdoms.len(), options)?;

        let (kingdoms, versions): (Vec<_>, Vec<_>) = manifest
            .kingdoms
            .iter()
            .map(|path| read_kingdom(&base_dir.join(path)))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .unzip();

        Ok(Self::assemble(knights, aggregate_kingdoms(kingdoms), &versions))
    }

    /// Load a manifest file and the documents it names, relative to the
    /// manifest's own directory.
    pub fn load_manifest_file(path: &Path, options: &LoadOptions) -> Result<Self, CatalogError> {
        let manifest = CatalogManifest::from_json_file(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::load(&manifest, base_dir, options)
    }

    /// Build a catalog from documents that are already in memory. Kingdom
    /// documents keep the order of `kingdoms`.
    pub fn from_documents(
        knights: Value,
        kingdoms: Vec<Value>,
        options: &LoadOptions,
    ) -> Result<Self, CatalogError> {
        check_knight_document("knights", &knights, options)?;
        check_kingdom_count(kingdoms.len(), options)?;

        let (kingdoms, versions): (Vec<_>, Vec<_>) = kingdoms
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let version = CatalogVersion::of_value(&value);
                parse_kingdom(&format!("kingdoms[{index}]"), value).map(|k| (k, version))
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .unzip();

        Ok(Self::assemble(knights, aggregate_kingdoms(kingdoms), &versions))
    }

    /// `kingdom_versions` are the versions of the kingdom documents as
    /// authored, in the same order as `kingdoms`.
    fn assemble(
        knights: Value,
        kingdoms: Vec<KingdomCatalog>,
        kingdom_versions: &[CatalogVersion],
    ) -> Self {
        let knight_source = KnightSource::new(knights);
        let view = derive_view(knight_source.value());

        let version = CatalogVersion::combine(
            std::iter::once(&knight_source.version()).chain(kingdom_versions),
        );

        tracing::debug!(
            knights = view.ids.len(),
            kingdoms = kingdoms.len(),
            version = %version,
            "catalog loaded"
        );

        Self {
            inner: Arc::new(CatalogInner {
                knight_source,
                knights: view,
                kingdoms,
                version,
            }),
        }
    }

    /// The knight view derived at load time.
    pub fn knights(&self) -> &KnightCatalogView {
        &self.inner.knights
    }

    /// The knight document as authored.
    pub fn knight_source(&self) -> &KnightSource {
        &self.inner.knight_source
    }

    /// First knight record with the given id.
    pub fn knight(&self, id: &str) -> Option<&KnightRecord> {
        self.inner.knights.find(id)
    }

    /// All kingdoms, in declaration order.
    pub fn kingdoms(&self) -> &[KingdomCatalog] {
        &self.inner.kingdoms
    }

    /// First kingdom with the given id.
    pub fn kingdom(&self, id: &str) -> Option<&KingdomCatalog> {
        self.inner.kingdoms.iter().find(|k| k.id == id)
    }

    /// Combined content version of every document in the catalog.
    pub fn version(&self) -> CatalogVersion {
        self.inner.version
    }
}

fn check_knight_document(
    document: &str,
    knights: &Value,
    options: &LoadOptions,
) -> Result<(), CatalogError> {
    if options.strict && !knights.is_array() {
        return Err(CatalogError::NotASequence {
            document: document.to_owned(),
            found: crate::json_kind(knights),
        });
    }
    Ok(())
}

fn check_kingdom_count(count: usize, options: &LoadOptions) -> Result<(), CatalogError> {
    if options.strict && count == 0 {
        return Err(CatalogError::EmptyManifest);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
