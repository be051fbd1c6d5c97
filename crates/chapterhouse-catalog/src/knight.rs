//! Knight records and identifiers.
//!
//! Knight documents are authored by hand and are only loosely structured: the
//! one field every consumer relies on is `id`. A [`KnightRecord`] keeps the
//! authored JSON intact and extracts the identifier up front so accessors do
//! not have to re-inspect raw values.
//!
//! An identifier counts as present only when it is a non-empty string or a
//! non-zero number. `null`, `""`, `0`, `false` and a missing key all mean "no
//! identifier" and such records are dropped from id listings. Numeric ids
//! with no fractional part are spelled as integers, so `7` and `7.0` name the
//! same knight.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

// ---------------------------------------------------------------------------
// KnightId
// ---------------------------------------------------------------------------

/// Catalog identifier of a knight (e.g. `"percival"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnightId(String);

impl KnightId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract an identifier from a raw JSON `id` value, if it is present.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) => number_id(n).map(Self),
            _ => None,
        }
    }
}

/// Largest magnitude below which every integral `f64` is exact.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn number_id(n: &Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }
    let f = n.as_f64()?;
    if f == 0.0 {
        None
    } else if f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER {
        Some((f as i64).to_string())
    } else {
        Some(n.to_string())
    }
}

impl fmt::Display for KnightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KnightId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::borrow::Borrow<str> for KnightId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// KnightRecord
// ---------------------------------------------------------------------------

/// One entry of the knight catalog.
///
/// The authored JSON is preserved verbatim in [`raw`](Self::raw) and is what
/// the record serializes back to.
#[derive(Debug, Clone, PartialEq)]
pub struct KnightRecord {
    id: Option<KnightId>,
    raw: Value,
}

impl KnightRecord {
    /// Wrap an authored JSON value. Non-object values are kept but carry no id.
    pub fn from_value(raw: Value) -> Self {
        let id = raw.get("id").and_then(KnightId::from_value);
        Self { id, raw }
    }

    pub fn id(&self) -> Option<&KnightId> {
        self.id.as_ref()
    }

    /// Display name, if the record has a string `name` field.
    pub fn name(&self) -> Option<&str> {
        self.raw.get("name").and_then(Value::as_str)
    }

    /// Look up an arbitrary authored field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl Serialize for KnightRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KnightRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
