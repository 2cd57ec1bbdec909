//! Cached access to the FantasyPros payloads.
//!
//! The raw entry lists are cached as JSON under two keys and re-normalized on
//! every load. A miss on either key refetches the page and overwrites both,
//! so the two maps always come from the same page snapshot and are superseded
//! wholesale, never merged.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::core::cache::CacheStore;
use crate::rankings::fetch::fetch_rankings;
use crate::rankings::records::{normalize_adp, normalize_consensus, AdpRecordMap, RankRecordMap};
use crate::Result;

pub const ECR_CACHE_KEY: &str = "nfl_ecr_rankings";
pub const ADP_CACHE_KEY: &str = "nfl_adp_rankings";

/// Load both rank maps, fetching from FantasyPros when either cache entry is
/// stale or absent, or when `refresh` forces it.
pub async fn load_or_fetch_rankings(
    store: &CacheStore,
    client: &Client,
    max_age: Duration,
    refresh: bool,
) -> Result<(RankRecordMap, AdpRecordMap)> {
    let cached: Option<(Vec<Value>, Vec<Value>)> = if refresh {
        None
    } else {
        match (
            store.read_json::<Vec<Value>>(ECR_CACHE_KEY, max_age)?,
            store.read_json::<Vec<Value>>(ADP_CACHE_KEY, max_age)?,
        ) {
            (Some(ecr), Some(adp)) => Some((ecr, adp)),
            _ => None,
        }
    };

    let (ecr_raw, adp_raw) = match cached {
        Some(lists) => lists,
        None => {
            let (ecr_raw, adp_raw) = fetch_rankings(client).await?;
            store.write_json(ECR_CACHE_KEY, &ecr_raw)?;
            store.write_json(ADP_CACHE_KEY, &adp_raw)?;
            (ecr_raw, adp_raw)
        }
    };

    Ok((normalize_consensus(&ecr_raw), normalize_adp(&adp_raw)))
}
