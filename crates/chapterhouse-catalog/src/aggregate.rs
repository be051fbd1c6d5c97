//! Kingdom catalog aggregation.
//!
//! Kingdoms are authored one document per kingdom. The aggregate catalog is
//! their concatenation in declaration order: no sorting, no deduplication.
//! Shape checking happens once, when a document is parsed into a
//! [`KingdomCatalog`]; aggregation itself only orders.

use std::path::Path;

use serde_json::Value;

use crate::kingdom::KingdomCatalog;
use crate::version::CatalogVersion;
use crate::CatalogError;

/// Concatenate kingdom records in the order given.
pub fn aggregate_kingdoms<I>(kingdoms: I) -> Vec<KingdomCatalog>
where
    I: IntoIterator<Item = KingdomCatalog>,
{
    kingdoms.into_iter().collect()
}

/// Parse one kingdom document. `document` names the source in errors.
pub fn parse_kingdom(document: &str, value: Value) -> Result<KingdomCatalog, CatalogError> {
    serde_json::from_value(value).map_err(|source| CatalogError::Json {
        document: document.to_owned(),
        source,
    })
}

/// Read and parse one kingdom document from disk.
pub fn load_kingdom(path: &Path) -> Result<KingdomCatalog, CatalogError> {
    read_kingdom(path).map(|(kingdom, _)| kingdom)
}

/// Read and parse one kingdom document, along with the version of the
/// document as authored.
pub(crate) fn read_kingdom(path: &Path) -> Result<(KingdomCatalog, CatalogVersion), CatalogError> {
    let value = crate::config::read_json(path)?;
    let version = CatalogVersion::of_value(&value);
    let kingdom = parse_kingdom(&path.display().to_string(), value)?;
    tracing::debug!(
        kingdom = %kingdom.id,
        path = %path.display(),
        version = %version,
        "loaded kingdom document"
    );
    Ok((kingdom, version))
}
