//! Typed CLI and value primitives.

pub mod ids;

pub use ids::{LeagueId, PlayerId, SportsDataId};
