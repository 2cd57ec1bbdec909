//! Typed Sleeper API records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cli::types::{LeagueId, PlayerId, SportsDataId};

/// League entity (`/league/{id}`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    pub league_id: LeagueId,
    pub name: String,
    pub season: String,
    #[serde(default)]
    pub previous_league_id: Option<LeagueId>,
    #[serde(default)]
    pub draft_id: Option<String>,
}

/// League member (`/league/{id}/users`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub user_id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Trade,
    FreeAgent,
    Waiver,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Complete,
    #[serde(other)]
    Other,
}

/// League transaction (`/league/{id}/transactions/{week}`).
///
/// `leg` is the week the transaction settled in; `drops` maps dropped player
/// IDs to roster IDs and is null for add-only moves.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: TransactionStatus,
    pub leg: u16,
    #[serde(default)]
    pub drops: Option<HashMap<PlayerId, u32>>,
}

/// One draft selection (`/draft/{id}/picks`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DraftPick {
    pub pick_no: u32,
    pub round: u8,
    pub player_id: PlayerId,
    #[serde(default)]
    pub picked_by: Option<String>,
}

/// Player directory entry (`/players/nfl`).
///
/// Carries the platform ID and the sports-data GUID, the two namespaces the
/// report has to reconcile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Player {
    pub player_id: PlayerId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub active: bool,
    /// Sleeper's key name for the sports-data GUID. It is the same namespace
    /// FantasyPros exposes as `sportsdata_id`, and the only key rank lookups
    /// use.
    #[serde(rename = "sportradar_id", default)]
    pub sports_data_id: Option<SportsDataId>,
}

impl Player {
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.player_id.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_league_deserialization() {
        let league: League = serde_json::from_value(json!({
            "league_id": "992",
            "name": "MWLSE",
            "season": "2023",
            "previous_league_id": "871",
            "draft_id": "992d",
            "status": "complete"
        }))
        .unwrap();

        assert_eq!(league.league_id.as_str(), "992");
        assert_eq!(league.previous_league_id.unwrap().as_str(), "871");
        assert_eq!(league.draft_id.as_deref(), Some("992d"));
    }

    #[test]
    fn test_league_without_previous_season() {
        let league: League = serde_json::from_value(json!({
            "league_id": "992",
            "name": "MWLSE",
            "season": "2023",
            "previous_league_id": null
        }))
        .unwrap();

        assert!(league.previous_league_id.is_none());
        assert!(league.draft_id.is_none());
    }

    #[test]
    fn test_transaction_deserialization() {
        let transaction: Transaction = serde_json::from_value(json!({
            "type": "trade",
            "status": "complete",
            "leg": 4,
            "drops": {"4034": 2},
            "adds": {"6786": 5}
        }))
        .unwrap();

        assert_eq!(transaction.kind, TransactionType::Trade);
        assert_eq!(transaction.status, TransactionStatus::Complete);
        assert_eq!(transaction.leg, 4);
        assert!(transaction
            .drops
            .unwrap()
            .contains_key(&PlayerId::new("4034")));
    }

    #[test]
    fn test_unknown_transaction_type_and_status_bucket_as_other() {
        let transaction: Transaction = serde_json::from_value(json!({
            "type": "commissioner",
            "status": "failed",
            "leg": 1,
            "drops": null
        }))
        .unwrap();

        assert_eq!(transaction.kind, TransactionType::Other);
        assert_eq!(transaction.status, TransactionStatus::Other);
        assert!(transaction.drops.is_none());
    }

    #[test]
    fn test_player_deserialization() {
        let player: Player = serde_json::from_value(json!({
            "player_id": "4034",
            "first_name": "Christian",
            "last_name": "McCaffrey",
            "position": "RB",
            "team": "SF",
            "active": true,
            "sportradar_id": "f96db0af",
            "espn_id": 3117251
        }))
        .unwrap();

        assert_eq!(player.full_name(), "Christian McCaffrey");
        assert_eq!(player.sports_data_id.unwrap().as_str(), "f96db0af");
    }

    #[test]
    fn test_player_without_sports_data_id() {
        let player: Player = serde_json::from_value(json!({
            "player_id": "SF",
            "first_name": "San Francisco",
            "last_name": "49ers",
            "position": "DEF",
            "team": "SF",
            "active": true,
            "sportradar_id": null
        }))
        .unwrap();

        assert!(player.sports_data_id.is_none());
        assert_eq!(player.full_name(), "San Francisco 49ers");
    }

    #[test]
    fn test_full_name_falls_back_to_player_id() {
        let player: Player = serde_json::from_value(json!({"player_id": "9999"})).unwrap();
        assert_eq!(player.full_name(), "9999");
        assert!(!player.active);
    }
}
