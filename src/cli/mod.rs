//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::LeagueId;

#[derive(Debug, Parser)]
#[clap(name = "sleeper-keeper", about = "Sleeper keeper eligibility CLI")]
pub struct SleeperKeeper {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the keeper eligibility report for last season's draft.
    ///
    /// Combines the previous season's draft picks and transaction history
    /// with FantasyPros consensus rankings (cached locally) into one row per
    /// pick, written as CSV or printed as JSON.
    KeeperReport {
        /// League ID (or set `SLEEPER_KEEPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Number of early draft rounds exempt from keeper rules.
        #[clap(long, default_value_t = 5)]
        offset: u8,

        /// Output CSV path (default: "<league> <season> Keeper Eligibility.csv").
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Print rows as JSON to stdout instead of writing a CSV.
        #[clap(long)]
        json: bool,

        /// Force refresh of the rankings cache.
        #[clap(long)]
        refresh: bool,

        /// Cache directory (default: platform cache dir).
        #[clap(long)]
        cache_dir: Option<PathBuf>,

        /// Rankings cache max age, in hours.
        #[clap(long, default_value_t = 12)]
        rank_ttl_hours: u64,

        /// Player directory cache max age, in hours.
        #[clap(long, default_value_t = 24)]
        player_ttl_hours: u64,

        /// Show detailed progress information.
        #[clap(long)]
        verbose: bool,
    },
}
