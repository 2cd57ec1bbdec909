//! Error types for the Sleeper keeper eligibility CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeeperError>;

#[derive(Error, Debug)]
pub enum KeeperError {
    #[error("ranking source unavailable: {0}")]
    SourceUnavailable(#[from] reqwest::Error),

    #[error("malformed ranking source: {message}")]
    MalformedSource { message: String },

    #[error("cache I/O error: {0}")]
    CacheIo(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown player ID: {player_id}")]
    UnknownPlayer { player_id: String },

    #[error("league ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("invalid league ID: {value}")]
    InvalidLeagueId { value: String },

    #[error("league {league_id} has no previous season to draw keepers from")]
    NoPreviousLeague { league_id: String },

    #[error("league {league_id} has no draft")]
    NoDraft { league_id: String },

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}
