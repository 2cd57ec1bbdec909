//! Sleeper API client.
//!
//! Five read-only operations, called strictly sequentially by the report
//! pipeline. The API is public and unauthenticated; every call is a plain
//! GET returning JSON.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

use crate::cli::types::{LeagueId, PlayerId};
use crate::sleeper::types::{DraftPick, League, Player, Transaction, User};
use crate::Result;

/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Request timeout. The upstream has no SLA; a hung fetch must not hang the
/// whole run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SleeperClient {
    client: Client,
    base_url: String,
}

impl SleeperClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(SLEEPER_BASE_URL)
    }

    /// Client against a non-default endpoint (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Shared reqwest client, reused for the FantasyPros page fetch.
    pub fn http(&self) -> &Client {
        &self.client
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        let res = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(res)
    }

    pub async fn get_league(&self, league_id: &LeagueId) -> Result<League> {
        self.get_json(&format!("league/{league_id}")).await
    }

    pub async fn get_users(&self, league_id: &LeagueId) -> Result<Vec<User>> {
        self.get_json(&format!("league/{league_id}/users")).await
    }

    pub async fn get_transactions(
        &self,
        league_id: &LeagueId,
        week: u16,
    ) -> Result<Vec<Transaction>> {
        self.get_json(&format!("league/{league_id}/transactions/{week}"))
            .await
    }

    pub async fn get_draft_picks(&self, draft_id: &str) -> Result<Vec<DraftPick>> {
        self.get_json(&format!("draft/{draft_id}/picks")).await
    }

    /// Full NFL player directory keyed by platform ID. Large (several MB);
    /// callers are expected to cache it.
    pub async fn get_all_players(&self) -> Result<HashMap<PlayerId, Player>> {
        self.get_json("players/nfl").await
    }
}
