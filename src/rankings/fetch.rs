//! FantasyPros rankings page fetch and embedded-payload extraction.
//!
//! The rankings page embeds two JavaScript literals, `var ecrData = {...};`
//! (expert-consensus data, entry list under its `players` key) and
//! `var adpData = [...];` (average-draft-position entries). Both are pulled
//! out with non-greedy first-match regexes and parsed as JSON. This layer is
//! stateless and always refetches; callers own caching and retry policy.

use regex::Regex;
use reqwest::Client;
use serde_json::Value;
use std::sync::LazyLock;

use crate::{KeeperError, Result};

/// PPR cheat-sheet page carrying both embedded payloads.
pub const RANKINGS_URL: &str = "https://www.fantasypros.com/nfl/rankings/ppr-cheatsheets.php";

static ECR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var ecrData = (\{.*?\});").unwrap());
static ADP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var adpData = (\[.*?\]);").unwrap());

/// Fetch the rankings page and extract the two raw payload entry lists
/// (consensus entries, ADP entries).
pub async fn fetch_rankings(client: &Client) -> Result<(Vec<Value>, Vec<Value>)> {
    let body = client
        .get(RANKINGS_URL)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    extract_rank_payloads(&body)
}

/// Pull both payloads out of the page body. The page carries plenty of other
/// script content, so each pattern takes the first, shortest match.
pub fn extract_rank_payloads(body: &str) -> Result<(Vec<Value>, Vec<Value>)> {
    let ecr_captures = ECR_PATTERN
        .captures(body)
        .ok_or_else(|| malformed("ecrData payload not found in page"))?;
    let ecr: Value = serde_json::from_str(&ecr_captures[1])
        .map_err(|e| malformed(&format!("ecrData is not valid JSON: {e}")))?;
    let ecr_entries = ecr
        .get("players")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("ecrData has no players array"))?
        .clone();

    let adp_captures = ADP_PATTERN
        .captures(body)
        .ok_or_else(|| malformed("adpData payload not found in page"))?;
    let adp_entries: Vec<Value> = serde_json::from_str(&adp_captures[1])
        .map_err(|e| malformed(&format!("adpData is not valid JSON: {e}")))?;

    Ok((ecr_entries, adp_entries))
}

fn malformed(message: &str) -> KeeperError {
    KeeperError::MalformedSource {
        message: message.to_string(),
    }
}
