//! Chapterhouse Campaign -- campaign progress and navigation state.
//!
//! This crate builds on [`chapterhouse_catalog`] to provide the pieces of
//! campaign state the companion app derives on every evaluation pass:
//!
//! - [`progress`]: the chapter/investigation to stage-index mapping.
//! - [`ownership`]: the player's owned-knight snapshot.
//! - [`navigation`]: which campaign tab to land on.
//! - [`route`]: campaign paths and the one-shot redirect.
//!
//! # Quick Start
//!
//! ```
//! use chapterhouse_campaign::prelude::*;
//!
//! assert_eq!(stage_index_from_progress(3.0, 2.0), StageIndex::new(10));
//!
//! let mut owned = KnightsOwned::new();
//! let mut nav = CampaignNavigation::new();
//! assert_eq!(nav.default_tab(&owned), CampaignTab::Knights);
//!
//! owned.insert(KnightId::new("percival"), OwnedKnight::default());
//! assert_eq!(nav.default_tab(&owned), CampaignTab::Kingdoms);
//! assert_eq!(CampaignRoute::new("c1").path(nav.default_tab(&owned)), "/campaign/c1/kingdoms");
//! ```

#![deny(unsafe_code)]

pub mod navigation;
pub mod ownership;
pub mod progress;
pub mod route;

/// Re-export the catalog crate for convenience.
pub use chapterhouse_catalog;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced by typed campaign lookups.
///
/// The core derivations (stage index, default tab) are total and never
/// return these.
#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    /// An owned knight has no record in the catalog.
    #[error("owned knight '{id}' is not in the knight catalog")]
    UnknownKnight { id: String },

    /// An investigation number outside `1..=3`.
    #[error("investigation {number} does not exist (each chapter has investigations 1 to 3)")]
    InvalidInvestigation { number: u8 },
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use chapterhouse_catalog::prelude::*;

    pub use crate::navigation::{default_tab_for, owned_records, CampaignNavigation, CampaignTab};
    pub use crate::ownership::{KnightsOwned, OwnedKnight, Revision};
    pub use crate::progress::{stage_index_from_progress, Progress, StageIndex, StageRow};
    pub use crate::route::{CampaignRoute, RedirectOnce};
    pub use crate::CampaignError;
}
