//! Cross-namespace player identity index.

use std::collections::HashMap;

use crate::cli::types::{PlayerId, SportsDataId};
use crate::sleeper::types::Player;

/// The player directory re-indexed so a player resolves by either the
/// platform ID (draft picks, transactions) or the sports-data ID (rank
/// payloads). Keeping both indexes behind named accessors keeps the ID
/// namespaces from being mixed up at call sites.
#[derive(Debug, Default)]
pub struct PlayerIdentityMap {
    by_platform: HashMap<PlayerId, Player>,
    by_sports_data: HashMap<SportsDataId, PlayerId>,
}

/// Re-index the platform-keyed directory. A player without a sports-data ID
/// stays resolvable by platform ID but cannot be reached from rank data;
/// that exclusion is intentional, not an error. Rebuilding from a cached
/// directory snapshot is a single cheap pass.
pub fn build_identity_map(directory: &HashMap<PlayerId, Player>) -> PlayerIdentityMap {
    let mut map = PlayerIdentityMap::default();
    for (platform_id, player) in directory {
        if let Some(sports_data_id) = &player.sports_data_id {
            map.by_sports_data
                .insert(sports_data_id.clone(), platform_id.clone());
        }
        map.by_platform.insert(platform_id.clone(), player.clone());
    }
    map
}

impl PlayerIdentityMap {
    pub fn by_platform(&self, id: &PlayerId) -> Option<&Player> {
        self.by_platform.get(id)
    }

    pub fn by_sports_data(&self, id: &SportsDataId) -> Option<&Player> {
        self.by_sports_data
            .get(id)
            .and_then(|platform_id| self.by_platform.get(platform_id))
    }

    /// Number of players resolvable by platform ID.
    pub fn len(&self) -> usize {
        self.by_platform.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_platform.is_empty()
    }

    /// Number of players reachable from rank data.
    pub fn sports_data_len(&self) -> usize {
        self.by_sports_data.len()
    }
}
