//! Campaign paths and the one-shot redirect.
//!
//! Screens that receive a campaign id from the router send the player to a
//! tab of that campaign exactly once. [`CampaignRoute`] formats the paths;
//! [`RedirectOnce`] makes sure the redirect is only issued the first time a
//! usable id is seen.

use crate::navigation::CampaignTab;

/// Paths under `/campaign/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignRoute {
    campaign_id: String,
}

impl CampaignRoute {
    pub fn new(campaign_id: impl Into<String>) -> Self {
        Self {
            campaign_id: campaign_id.into(),
        }
    }

    pub fn campaign_id(&self) -> &str {
        &self.campaign_id
    }

    /// `/campaign/{id}/{tab}`
    pub fn path(&self, tab: CampaignTab) -> String {
        format!("/campaign/{}/{}", self.campaign_id, tab.as_str())
    }

    /// `/campaign/{id}/kingdoms`
    pub fn kingdoms(&self) -> String {
        self.path(CampaignTab::Kingdoms)
    }

    /// `/campaign/{id}/knights`
    pub fn knights(&self) -> String {
        self.path(CampaignTab::Knights)
    }
}

/// Issues a redirect path at most once.
#[derive(Debug, Clone, Default)]
pub struct RedirectOnce {
    issued: bool,
}

impl RedirectOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// The path to redirect to, the first time a non-empty campaign id is
    /// supplied. Returns `None` for a missing id without using up the
    /// redirect, and `None` forever after one has been issued.
    pub fn take(&mut self, campaign_id: Option<&str>, tab: CampaignTab) -> Option<String> {
        if self.issued {
            return None;
        }
        let id = campaign_id.filter(|id| !id.is_empty())?;
        self.issued = true;
        let path = CampaignRoute::new(id).path(tab);
        tracing::debug!(path = %path, "issuing campaign redirect");
        Some(path)
    }

    pub fn is_issued(&self) -> bool {
        self.issued
    }
}
