//! The player's owned-knight snapshot.
//!
//! [`KnightsOwned`] maps knight identifiers to per-knight campaign state. It
//! belongs to the player-state layer, which mutates it; this crate only reads
//! it. Every instance and every mutation is stamped with a fresh
//! [`Revision`] drawn from a process-wide counter, so a revision identifies
//! one snapshot and derived state can be memoized on it.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chapterhouse_catalog::knight::KnightId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::progress::{Progress, StageIndex};

// ---------------------------------------------------------------------------
// Revision
// ---------------------------------------------------------------------------

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Process-unique stamp of a [`KnightsOwned`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Revision(u64);

impl Revision {
    fn next() -> Self {
        Self(NEXT_REVISION.fetch_add(1, Ordering::Relaxed))
    }
}

// ---------------------------------------------------------------------------
// OwnedKnight
// ---------------------------------------------------------------------------

/// Campaign state of one owned knight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnedKnight {
    /// Where this knight is in the campaign.
    #[serde(flatten)]
    pub progress: Progress,
    /// Anything else the player-state layer stores (gear, wounds, notes).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OwnedKnight {
    pub fn at(progress: Progress) -> Self {
        Self {
            progress,
            extra: Map::new(),
        }
    }

    pub fn stage_index(&self) -> StageIndex {
        self.progress.stage_index()
    }
}

// ---------------------------------------------------------------------------
// KnightsOwned
// ---------------------------------------------------------------------------

/// Owned knights keyed by id, iterated in id order.
///
/// Equality compares contents only; revisions are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "BTreeMap<KnightId, OwnedKnight>", into = "BTreeMap<KnightId, OwnedKnight>")]
pub struct KnightsOwned {
    knights: BTreeMap<KnightId, OwnedKnight>,
    revision: Revision,
}

impl KnightsOwned {
    pub fn new() -> Self {
        Self::from(BTreeMap::new())
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.knights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knights.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&OwnedKnight> {
        self.knights.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &KnightId> {
        self.knights.keys()
    }

    /// Add or replace a knight. Always starts a new revision.
    pub fn insert(&mut self, id: KnightId, knight: OwnedKnight) -> Option<OwnedKnight> {
        self.revision = Revision::next();
        self.knights.insert(id, knight)
    }

    /// Remove a knight. Starts a new revision only if something was removed.
    pub fn remove(&mut self, id: &str) -> Option<OwnedKnight> {
        let removed = self.knights.remove(id);
        if removed.is_some() {
            self.revision = Revision::next();
        }
        removed
    }
}

impl PartialEq for KnightsOwned {
    fn eq(&self, other: &Self) -> bool {
        self.knights == other.knights
    }
}

impl Default for KnightsOwned {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<KnightId, OwnedKnight>> for KnightsOwned {
    fn from(knights: BTreeMap<KnightId, OwnedKnight>) -> Self {
        Self {
            knights,
            revision: Revision::next(),
        }
    }
}

impl From<KnightsOwned> for BTreeMap<KnightId, OwnedKnight> {
    fn from(owned: KnightsOwned) -> Self {
        owned.knights
    }
}

impl FromIterator<(KnightId, OwnedKnight)> for KnightsOwned {
    fn from_iter<I: IntoIterator<Item = (KnightId, OwnedKnight)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<BTreeMap<_, _>>())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
