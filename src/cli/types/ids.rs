//! Identifier newtypes for the player-ID namespaces.
//!
//! Sleeper league and player IDs are numeric strings (defense slots use team
//! abbreviations); the sports-data ID is a GUID shared between Sleeper's
//! `sportradar_id` field and FantasyPros' `sportsdata_id` field. One newtype
//! per namespace keeps a map from ever being keyed with the wrong ID scheme.

use crate::error::{KeeperError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Sleeper league IDs.
///
/// # Examples
///
/// ```rust
/// use sleeper_keeper::LeagueId;
///
/// let league_id = LeagueId::new("992123456789012345");
/// assert_eq!(league_id.as_str(), "992123456789012345");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(pub String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = KeeperError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(KeeperError::InvalidLeagueId {
                value: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

/// Sleeper platform player ID. Numeric string for individual players, a team
/// abbreviation (e.g. "SF") for defenses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sports-data GUID. The one namespace rank lookups are keyed by: Sleeper
/// serves it as `sportradar_id`, FantasyPros as `sportsdata_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SportsDataId(pub String);

impl SportsDataId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SportsDataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_from_str_valid() {
        let id: LeagueId = "992123456789012345".parse().unwrap();
        assert_eq!(id.as_str(), "992123456789012345");
        assert_eq!(id.to_string(), "992123456789012345");
    }

    #[test]
    fn test_league_id_from_str_rejects_non_numeric() {
        let result = "not-a-league".parse::<LeagueId>();
        match result {
            Err(KeeperError::InvalidLeagueId { value }) => assert_eq!(value, "not-a-league"),
            other => panic!("expected InvalidLeagueId, got {:?}", other),
        }
    }

    #[test]
    fn test_league_id_from_str_rejects_empty() {
        assert!("".parse::<LeagueId>().is_err());
    }

    #[test]
    fn test_ids_serialize_transparent() {
        let id = PlayerId::new("4034");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"4034\"");

        let guid = SportsDataId::new("0123-abcd");
        let back: SportsDataId = serde_json::from_str("\"0123-abcd\"").unwrap();
        assert_eq!(guid, back);
    }
}
