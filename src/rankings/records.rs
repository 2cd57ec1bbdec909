//! Canonical rank record shapes and raw-payload normalization.
//!
//! FantasyPros entries are loosely typed: numeric fields arrive as JSON
//! numbers or numeric strings depending on the field and the season. The
//! normalizers here map each raw entry to a canonical record and index the
//! batch by sports-data ID. An entry missing a required field is dropped with
//! a warning; one bad entry never fails the batch.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::cli::types::SportsDataId;

/// Expert-consensus rank entry.
///
/// Carries every identifier namespace the provider exposes, the consensus
/// rank with its spread, and the tier/positional groupings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankRecord {
    pub fantasy_pros_id: Option<u64>,
    pub yahoo_id: Option<String>,
    pub cbs_id: Option<String>,
    pub sports_data_id: SportsDataId,
    pub player_name: Option<String>,
    pub rank_ecr: u32,
    pub rank_min: Option<u32>,
    pub rank_max: Option<u32>,
    pub rank_avg: Option<f64>,
    pub rank_std: Option<f64>,
    pub tier: Option<u32>,
    pub pos_rank: Option<String>,
}

/// Average-draft-position entry.
///
/// Same shape as [`RankRecord`], but a market-derived quantity rather than an
/// expert one; kept as a distinct type so the two are never silently
/// interchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdpRecord {
    pub fantasy_pros_id: Option<u64>,
    pub yahoo_id: Option<String>,
    pub cbs_id: Option<String>,
    pub sports_data_id: SportsDataId,
    pub player_name: Option<String>,
    pub rank_ecr: u32,
    pub rank_min: Option<u32>,
    pub rank_max: Option<u32>,
    pub rank_avg: Option<f64>,
    pub rank_std: Option<f64>,
    pub tier: Option<u32>,
    pub pos_rank: Option<String>,
}

pub type RankRecordMap = HashMap<SportsDataId, RankRecord>;
pub type AdpRecordMap = HashMap<SportsDataId, AdpRecord>;

fn str_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn u64_field(raw: &Value, key: &str) -> Option<u64> {
    match raw.get(key)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn u32_field(raw: &Value, key: &str) -> Option<u32> {
    u64_field(raw, key).and_then(|v| u32::try_from(v).ok())
}

fn f64_field(raw: &Value, key: &str) -> Option<f64> {
    match raw.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

impl RankRecord {
    /// Map one provider entry to the canonical shape. `None` when a required
    /// field (`sportsdata_id`, `rank_ecr`) is missing or unusable.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        Some(Self {
            fantasy_pros_id: u64_field(raw, "player_id"),
            yahoo_id: str_field(raw, "player_yahoo_id"),
            cbs_id: str_field(raw, "cbs_player_id"),
            sports_data_id: SportsDataId::new(str_field(raw, "sportsdata_id")?),
            player_name: str_field(raw, "player_name"),
            rank_ecr: u32_field(raw, "rank_ecr")?,
            rank_min: u32_field(raw, "rank_min"),
            rank_max: u32_field(raw, "rank_max"),
            rank_avg: f64_field(raw, "rank_ave"),
            rank_std: f64_field(raw, "rank_std"),
            tier: u32_field(raw, "tier"),
            pos_rank: str_field(raw, "pos_rank"),
        })
    }
}

impl AdpRecord {
    /// Map one ADP entry to the canonical shape. The ADP payload reuses the
    /// consensus payload's key names, `rank_ecr` included.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        Some(Self {
            fantasy_pros_id: u64_field(raw, "player_id"),
            yahoo_id: str_field(raw, "player_yahoo_id"),
            cbs_id: str_field(raw, "cbs_player_id"),
            sports_data_id: SportsDataId::new(str_field(raw, "sportsdata_id")?),
            player_name: str_field(raw, "player_name"),
            rank_ecr: u32_field(raw, "rank_ecr")?,
            rank_min: u32_field(raw, "rank_min"),
            rank_max: u32_field(raw, "rank_max"),
            rank_avg: f64_field(raw, "rank_ave"),
            rank_std: f64_field(raw, "rank_std"),
            tier: u32_field(raw, "tier"),
            pos_rank: str_field(raw, "pos_rank"),
        })
    }
}

fn entry_label(raw: &Value) -> &str {
    raw.get("player_name")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>")
}

/// Index consensus entries by sports-data ID. Unusable entries are skipped
/// with a warning; a duplicate ID is last-write-wins in input order.
pub fn normalize_consensus(raw_entries: &[Value]) -> RankRecordMap {
    let mut map = RankRecordMap::new();
    for raw in raw_entries {
        match RankRecord::from_raw(raw) {
            Some(record) => {
                map.insert(record.sports_data_id.clone(), record);
            }
            None => eprintln!("⚠ Skipping ECR entry for {}: missing required fields", entry_label(raw)),
        }
    }
    map
}

/// Index ADP entries by sports-data ID, with the same skip and
/// last-write-wins behavior as [`normalize_consensus`].
pub fn normalize_adp(raw_entries: &[Value]) -> AdpRecordMap {
    let mut map = AdpRecordMap::new();
    for raw in raw_entries {
        match AdpRecord::from_raw(raw) {
            Some(record) => {
                map.insert(record.sports_data_id.clone(), record);
            }
            None => eprintln!("⚠ Skipping ADP entry for {}: missing required fields", entry_label(raw)),
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(name: &str, sports_data_id: &str, rank: u32) -> Value {
        json!({
            "player_id": 11687,
            "player_yahoo_id": "33392",
            "cbs_player_id": "2071510",
            "sportsdata_id": sports_data_id,
            "player_name": name,
            "rank_ecr": rank,
            "rank_min": "1",
            "rank_max": "4",
            "rank_ave": "1.8",
            "rank_std": 0.9,
            "tier": 1,
            "pos_rank": "RB1"
        })
    }

    #[test]
    fn test_rank_record_field_mapping() {
        let raw = entry("Christian McCaffrey", "f96db0af", 1);
        let record = RankRecord::from_raw(&raw).unwrap();

        assert_eq!(record.fantasy_pros_id, Some(11687));
        assert_eq!(record.yahoo_id.as_deref(), Some("33392"));
        assert_eq!(record.cbs_id.as_deref(), Some("2071510"));
        assert_eq!(record.sports_data_id.as_str(), "f96db0af");
        assert_eq!(record.player_name.as_deref(), Some("Christian McCaffrey"));
        assert_eq!(record.rank_ecr, 1);
        // numeric strings are accepted for numeric fields
        assert_eq!(record.rank_min, Some(1));
        assert_eq!(record.rank_max, Some(4));
        assert_eq!(record.rank_avg, Some(1.8));
        assert_eq!(record.rank_std, Some(0.9));
        assert_eq!(record.tier, Some(1));
        assert_eq!(record.pos_rank.as_deref(), Some("RB1"));
    }

    #[test]
    fn test_entry_missing_sports_data_id_is_skipped() {
        let mut raw = entry("No Id", "x", 5);
        raw.as_object_mut().unwrap().remove("sportsdata_id");

        assert!(RankRecord::from_raw(&raw).is_none());

        let map = normalize_consensus(&[raw, entry("Kept", "abc", 6)]);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&SportsDataId::new("abc")].rank_ecr, 6);
    }

    #[test]
    fn test_entry_missing_rank_is_skipped() {
        let mut raw = entry("No Rank", "abc", 5);
        raw.as_object_mut().unwrap().remove("rank_ecr");

        let map = normalize_consensus(&[raw]);
        assert!(map.is_empty());
    }

    #[test]
    fn test_duplicate_sports_data_id_last_write_wins() {
        let first = entry("First", "dup", 10);
        let second = entry("Second", "dup", 20);

        let map = normalize_consensus(&[first, second]);
        assert_eq!(map.len(), 1);

        let survivor = &map[&SportsDataId::new("dup")];
        assert_eq!(survivor.player_name.as_deref(), Some("Second"));
        assert_eq!(survivor.rank_ecr, 20);
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let raw = json!({
            "sportsdata_id": "abc",
            "rank_ecr": 42
        });

        let record = RankRecord::from_raw(&raw).unwrap();
        assert_eq!(record.fantasy_pros_id, None);
        assert_eq!(record.player_name, None);
        assert_eq!(record.rank_min, None);
        assert_eq!(record.tier, None);
    }

    #[test]
    fn test_adp_normalization_uses_same_keys() {
        let map = normalize_adp(&[entry("Justin Jefferson", "jj01", 3)]);
        let record = &map[&SportsDataId::new("jj01")];
        assert_eq!(record.rank_ecr, 3);
        assert_eq!(record.player_name.as_deref(), Some("Justin Jefferson"));
    }
}
