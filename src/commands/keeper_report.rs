//! Keeper report pipeline and output.
//!
//! The pipeline runs strictly sequentially against the previous season of
//! the given league: league lookup, exclusion list, user map, draft picks,
//! cached player directory, cached rank maps, then one evaluation per pick.
//! Any step failing aborts the whole report; there is no per-pick recovery.

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::types::{LeagueId, PlayerId};
use crate::commands::resolve_league_id;
use crate::core::cache::CacheStore;
use crate::keeper::eligibility::{evaluate, EligibilityResult};
use crate::keeper::exclusions::{build_exclusion_list, KeeperExclusionList};
use crate::keeper::identity::build_identity_map;
use crate::rankings::cache::load_or_fetch_rankings;
use crate::sleeper::http::SleeperClient;
use crate::sleeper::types::{League, Player, Transaction, User};
use crate::{KeeperError, Result};

/// Cache key for the NFL player directory.
pub const PLAYER_CACHE_KEY: &str = "nfl_players";

/// Weeks of the prior season scanned for roster-leaving transactions.
const TRANSACTION_WEEKS: std::ops::RangeInclusive<u16> = 1..=19;

/// Report column headers, in output order.
pub const REPORT_FIELDS: [&str; 16] = [
    "Pick",
    "Draft Round",
    "Keeper Round",
    "Player",
    "Position",
    "Team",
    "Active",
    "Manager",
    "Eligible",
    "Reason for Ineligibility",
    "ECR Rank",
    "ECR Round",
    "ECR Round Differential",
    "ADP Rank",
    "ADP Round",
    "ADP Round Differential",
];

pub struct KeeperReportParams {
    pub league_id: Option<LeagueId>,
    pub offset: u8,
    pub output: Option<PathBuf>,
    pub as_json: bool,
    pub refresh: bool,
    pub cache_dir: Option<PathBuf>,
    pub rank_ttl: Duration,
    pub player_ttl: Duration,
    pub verbose: bool,
}

/// One output row: the evaluated pick plus the drafting manager.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub manager: Option<String>,
    #[serde(flatten)]
    pub result: EligibilityResult,
}

/// The report pipeline. Every step is a blocking dependency of the next.
pub struct ReportPipeline {
    client: SleeperClient,
    store: CacheStore,
    offset: u8,
    rank_ttl: Duration,
    player_ttl: Duration,
    refresh: bool,
    verbose: bool,
}

impl ReportPipeline {
    /// Run the full pipeline. Returns the previous-season league the report
    /// covers, plus one row per draft pick.
    pub async fn run(&self, league_id: &LeagueId) -> Result<(League, Vec<ReportRow>)> {
        let league = self.client.get_league(league_id).await?;
        let previous_id =
            league
                .previous_league_id
                .clone()
                .ok_or_else(|| KeeperError::NoPreviousLeague {
                    league_id: league.league_id.as_str().to_string(),
                })?;
        let previous = self.client.get_league(&previous_id).await?;
        if self.verbose {
            println!("✓ Previous season: {} ({})", previous.name, previous.season);
        }

        let exclusions = self.build_exclusions(&previous.league_id).await?;
        if self.verbose {
            println!(
                "✓ {} players excluded by prior-season transactions",
                exclusions.len()
            );
        }

        let users = self.build_user_map(&previous.league_id).await?;

        let draft_id = previous
            .draft_id
            .clone()
            .ok_or_else(|| KeeperError::NoDraft {
                league_id: previous.league_id.as_str().to_string(),
            })?;
        let picks = self.client.get_draft_picks(&draft_id).await?;
        if self.verbose {
            println!("✓ {} draft picks loaded", picks.len());
        }

        let directory = self.load_player_directory().await?;
        let identity_map = build_identity_map(&directory);
        if self.verbose {
            println!(
                "✓ Identity map built: {} players, {} reachable from rank data",
                identity_map.len(),
                identity_map.sports_data_len()
            );
        }

        let (consensus_map, adp_map) = load_or_fetch_rankings(
            &self.store,
            self.client.http(),
            self.rank_ttl,
            self.refresh,
        )
        .await?;
        if self.verbose {
            println!(
                "✓ Rankings loaded: {} ECR, {} ADP",
                consensus_map.len(),
                adp_map.len()
            );
        }

        let mut rows = Vec::with_capacity(picks.len());
        for pick in &picks {
            let result = evaluate(
                pick,
                self.offset,
                &exclusions,
                &identity_map,
                &consensus_map,
                &adp_map,
            )?;
            let manager = pick
                .picked_by
                .as_ref()
                .and_then(|user_id| users.get(user_id))
                .map(|user| user.display_name.clone());
            rows.push(ReportRow { manager, result });
        }
        Ok((previous, rows))
    }

    async fn build_exclusions(&self, league_id: &LeagueId) -> Result<KeeperExclusionList> {
        let mut season_transactions: Vec<Transaction> = Vec::new();
        for week in TRANSACTION_WEEKS {
            season_transactions.extend(self.client.get_transactions(league_id, week).await?);
        }
        Ok(build_exclusion_list(&season_transactions))
    }

    async fn build_user_map(&self, league_id: &LeagueId) -> Result<HashMap<String, User>> {
        let users = self.client.get_users(league_id).await?;
        Ok(users
            .into_iter()
            .map(|user| (user.user_id.clone(), user))
            .collect())
    }

    /// Cached player directory. The directory is large and changes slowly,
    /// so it carries its own TTL, independent of the rank cache.
    async fn load_player_directory(&self) -> Result<HashMap<PlayerId, Player>> {
        if let Some(directory) = self.store.read_json(PLAYER_CACHE_KEY, self.player_ttl)? {
            if self.verbose {
                println!("✓ Player directory loaded (from cache)");
            }
            return Ok(directory);
        }
        let directory = self.client.get_all_players().await?;
        self.store.write_json(PLAYER_CACHE_KEY, &directory)?;
        if self.verbose {
            println!("✓ Player directory fetched ({} players)", directory.len());
        }
        Ok(directory)
    }
}

/// Handle the keeper report command.
pub async fn handle_keeper_report(params: KeeperReportParams) -> Result<()> {
    let league_id = resolve_league_id(params.league_id)?;
    let store = match &params.cache_dir {
        Some(dir) => CacheStore::new(dir.clone()),
        None => CacheStore::open_default(),
    };
    let pipeline = ReportPipeline {
        client: SleeperClient::new()?,
        store,
        offset: params.offset,
        rank_ttl: params.rank_ttl,
        player_ttl: params.player_ttl,
        refresh: params.refresh,
        verbose: params.verbose,
    };

    let (previous, rows) = pipeline.run(&league_id).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let path = params
        .output
        .unwrap_or_else(|| default_report_path(&previous));
    let file = std::fs::File::create(&path)?;
    write_report(&rows, file)?;
    println!("✓ Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// `"<league name> <season> Keeper Eligibility.csv"`
fn default_report_path(league: &League) -> PathBuf {
    PathBuf::from(format!(
        "{} {} Keeper Eligibility.csv",
        league.name, league.season
    ))
}

/// Write the CSV report. Keeper round, reason, and rank columns render blank
/// when unset; the keeper round is also blank inside the exempt rounds.
pub fn write_report<W: std::io::Write>(rows: &[ReportRow], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(REPORT_FIELDS)?;
    for row in rows {
        let r = &row.result;
        writer.write_record([
            r.pick_no.to_string(),
            r.round.to_string(),
            positive_or_blank(r.keeper_round),
            r.player_name.clone(),
            r.position.clone().unwrap_or_default(),
            r.team.clone().unwrap_or_default(),
            r.active.to_string(),
            row.manager.clone().unwrap_or_default(),
            r.eligible.to_string(),
            r.ineligibility_reason.clone().unwrap_or_default(),
            opt_string(r.ecr_rank),
            opt_string(r.ecr_round),
            opt_string(r.ecr_round_differential),
            opt_string(r.adp_rank),
            opt_string(r.adp_round),
            opt_string(r.adp_round_differential),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn positive_or_blank(keeper_round: i32) -> String {
    if keeper_round > 0 {
        keeper_round.to_string()
    } else {
        String::new()
    }
}

fn opt_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
