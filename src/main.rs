//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use sleeper_keeper::{
    cli::{Commands, SleeperKeeper},
    commands::keeper_report::{handle_keeper_report, KeeperReportParams},
    Result,
};
use std::time::Duration;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = SleeperKeeper::parse();

    match app.command {
        Commands::KeeperReport {
            league_id,
            offset,
            output,
            json,
            refresh,
            cache_dir,
            rank_ttl_hours,
            player_ttl_hours,
            verbose,
        } => {
            handle_keeper_report(KeeperReportParams {
                league_id,
                offset,
                output,
                as_json: json,
                refresh,
                cache_dir,
                rank_ttl: Duration::from_secs(rank_ttl_hours * 3600),
                player_ttl: Duration::from_secs(player_ttl_hours * 3600),
                verbose,
            })
            .await?
        }
    }

    Ok(())
}
