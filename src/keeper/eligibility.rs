//! Per-pick keeper eligibility and rank-derived round projections.

use serde::Serialize;

use crate::keeper::exclusions::{ExclusionEntry, KeeperExclusionList};
use crate::keeper::identity::PlayerIdentityMap;
use crate::rankings::records::{AdpRecordMap, RankRecordMap};
use crate::sleeper::types::DraftPick;
use crate::{KeeperError, Result};

/// Assumed picks per draft round when projecting a rank onto a round.
pub const PICKS_PER_ROUND: f64 = 10.0;

/// Reason attached to picks landing inside the exempt early rounds.
pub const PRE_OFFSET_REASON: &str = "Pre-offset round";

/// One evaluated draft pick. Ephemeral: recomputed on every report run,
/// never cached.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityResult {
    pub pick_no: u32,
    pub round: u8,
    /// Draft round minus the league's keeper offset; zero or negative inside
    /// the exempt early rounds.
    pub keeper_round: i32,
    pub player_name: String,
    pub position: Option<String>,
    pub team: Option<String>,
    pub active: bool,
    pub eligible: bool,
    pub ineligibility_reason: Option<String>,
    pub ecr_rank: Option<u32>,
    pub ecr_round: Option<u32>,
    pub ecr_round_differential: Option<i32>,
    pub adp_rank: Option<u32>,
    pub adp_round: Option<u32>,
    pub adp_round_differential: Option<i32>,
}

/// Round a rank projects to under the fixed picks-per-round assumption.
fn round_projection(rank: u32) -> u32 {
    (f64::from(rank) / PICKS_PER_ROUND).ceil() as u32
}

/// Evaluate one draft pick.
///
/// The round check runs first and short-circuits: a player who is both
/// inside the exempt rounds and on the exclusion list reports only the round
/// reason. Rank lookups run regardless of eligibility, independently for ECR
/// and ADP; the differentials are suppressed by the positivity of
/// `keeper_round` alone, not by the eligibility flag.
///
/// A pick referencing a player absent from the identity map is fatal: the
/// report has no per-pick partial-result mode.
pub fn evaluate(
    pick: &DraftPick,
    draft_round_offset: u8,
    exclusions: &KeeperExclusionList,
    identity_map: &PlayerIdentityMap,
    consensus_map: &RankRecordMap,
    adp_map: &AdpRecordMap,
) -> Result<EligibilityResult> {
    let player = identity_map
        .by_platform(&pick.player_id)
        .ok_or_else(|| KeeperError::UnknownPlayer {
            player_id: pick.player_id.as_str().to_string(),
        })?;

    let keeper_round = i32::from(pick.round) - i32::from(draft_round_offset);

    let ineligibility_reason = if keeper_round < 1 {
        Some(PRE_OFFSET_REASON.to_string())
    } else {
        exclusions.get(&pick.player_id).map(ExclusionEntry::reason)
    };

    let mut result = EligibilityResult {
        pick_no: pick.pick_no,
        round: pick.round,
        keeper_round,
        player_name: player.full_name(),
        position: player.position.clone(),
        team: player.team.clone(),
        active: player.active,
        eligible: ineligibility_reason.is_none(),
        ineligibility_reason,
        ecr_rank: None,
        ecr_round: None,
        ecr_round_differential: None,
        adp_rank: None,
        adp_round: None,
        adp_round_differential: None,
    };

    if let Some(sports_data_id) = &player.sports_data_id {
        if let Some(record) = consensus_map.get(sports_data_id) {
            let projection = round_projection(record.rank_ecr);
            result.ecr_rank = Some(record.rank_ecr);
            result.ecr_round = Some(projection);
            if keeper_round > 0 {
                result.ecr_round_differential = Some(keeper_round - projection as i32);
            }
        }
        if let Some(record) = adp_map.get(sports_data_id) {
            let projection = round_projection(record.rank_ecr);
            result.adp_rank = Some(record.rank_ecr);
            result.adp_round = Some(projection);
            if keeper_round > 0 {
                result.adp_round_differential = Some(keeper_round - projection as i32);
            }
        }
    }

    Ok(result)
}
