//! Keeper eligibility reporting for Sleeper fantasy football leagues.
//!
//! Combines league history and consensus-ranking data into one per-pick
//! keeper report for a league's previous-season draft:
//!
//! - **Sleeper API**: draft picks, transaction history, league members, and
//!   the platform-wide NFL player directory (cached locally, ~24h)
//! - **FantasyPros**: expert-consensus ranks (ECR) and average draft position
//!   (ADP), scraped from the rankings page and cached locally (~12h)
//!
//! The interesting part is identity reconciliation: draft picks and
//! transactions speak Sleeper player IDs, while the rank payloads are keyed
//! by a sports-data GUID. [`keeper::identity::PlayerIdentityMap`] bridges the
//! namespaces, and [`keeper::eligibility::evaluate`] folds draft round,
//! transaction history, and both rankings into one row per pick.
//!
//! ## Environment Configuration
//!
//! Set your Sleeper league ID to avoid passing it in every command:
//! ```bash
//! export SLEEPER_KEEPER_LEAGUE_ID=992123456789012345
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod keeper;
pub mod rankings;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, SportsDataId};
pub use error::{KeeperError, Result};

pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_KEEPER_LEAGUE_ID";
