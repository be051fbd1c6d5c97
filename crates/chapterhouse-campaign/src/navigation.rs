//! Campaign navigation resolver.
//!
//! Decides which campaign tab a player lands on. A player with no knights is
//! sent to the knight-selection tab; everyone else lands on the kingdoms tab.
//! The decision is derived from the externally owned [`KnightsOwned`]
//! snapshot on every evaluation; the only state kept here is a memo of the
//! "has knights" flag keyed on the snapshot's [`Revision`].

use std::fmt;

use chapterhouse_catalog::knight::KnightRecord;
use chapterhouse_catalog::memo::Memo;
use chapterhouse_catalog::Catalog;
use serde::{Deserialize, Serialize};

use crate::ownership::{KnightsOwned, Revision};
use crate::CampaignError;

// ---------------------------------------------------------------------------
// CampaignTab
// ---------------------------------------------------------------------------

/// Top-level tabs of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignTab {
    Kingdoms,
    Knights,
}

impl CampaignTab {
    /// Path segment / wire name of the tab.
    pub fn as_str(self) -> &'static str {
        match self {
            CampaignTab::Kingdoms => "kingdoms",
            CampaignTab::Knights => "knights",
        }
    }
}

impl fmt::Display for CampaignTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The landing tab for a player who does or does not own knights.
pub fn default_tab_for(has_knights: bool) -> CampaignTab {
    if has_knights {
        CampaignTab::Kingdoms
    } else {
        CampaignTab::Knights
    }
}

// ---------------------------------------------------------------------------
// CampaignNavigation
// ---------------------------------------------------------------------------

/// Derived navigation state over a [`KnightsOwned`] snapshot.
#[derive(Debug, Clone)]
pub struct CampaignNavigation {
    has_knights: Memo<Revision, bool>,
}

impl CampaignNavigation {
    pub fn new() -> Self {
        Self {
            has_knights: Memo::new("has_knights"),
        }
    }

    /// Whether the player owns at least one knight. Recomputed only when the
    /// snapshot's revision changes.
    pub fn has_knights(&mut self, owned: &KnightsOwned) -> bool {
        *self
            .has_knights
            .get_or_compute(owned.revision(), || !owned.is_empty())
    }

    /// The tab to show first: kingdoms for returning players, knights for
    /// first-run players.
    pub fn default_tab(&mut self, owned: &KnightsOwned) -> CampaignTab {
        default_tab_for(self.has_knights(owned))
    }

    /// Number of times the flag has been computed.
    pub fn recomputes(&self) -> u64 {
        self.has_knights.recomputes()
    }
}

impl Default for CampaignNavigation {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalog records of every owned knight, in id order.
///
/// Fails on the first owned id that the catalog does not know.
pub fn owned_records<'c>(
    catalog: &'c Catalog,
    owned: &KnightsOwned,
) -> Result<Vec<&'c KnightRecord>, CampaignError> {
    owned
        .ids()
        .map(|id| {
            catalog.knight(id.as_str()).ok_or_else(|| {
                tracing::warn!(knight = %id, "owned knight missing from catalog");
                CampaignError::UnknownKnight { id: id.to_string() }
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
