//! Command implementations for the Sleeper keeper CLI.

pub mod keeper_report;

use std::str::FromStr;

use crate::{cli::types::LeagueId, KeeperError, Result, LEAGUE_ID_ENV_VAR};

/// Resolve the league ID from the CLI flag or the environment.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }
    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(value) => LeagueId::from_str(&value),
        Err(_) => Err(KeeperError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}
