//! Alias matching.
//!
//! # Responsibilities
//! - Find the group owning a candidate token
//! - Work on borrowed byte ranges (header tokens are sub-slices)
//!
//! # Design Decisions
//! - Length check first, then ASCII case-insensitive comparison
//! - Groups and aliases scanned in configured order, first match wins
//! - O(groups × aliases); group counts are small and admin-controlled

use crate::negotiation::group::{AliasGroup, GroupConfig};

impl AliasGroup {
    /// Returns true if any alias equals `token`, ignoring ASCII case.
    pub fn matches(&self, token: &[u8]) -> bool {
        self.aliases()
            .iter()
            .any(|alias| alias.len() == token.len() && alias.as_bytes().eq_ignore_ascii_case(token))
    }
}

impl GroupConfig {
    /// Find the first group with an alias equal to `token`.
    pub fn find_group(&self, token: &[u8]) -> Option<&AliasGroup> {
        self.groups().iter().find(|group| group.matches(token))
    }
}
