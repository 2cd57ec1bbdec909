//! Keeper exclusion list derived from prior-season transactions.

use std::collections::HashMap;
use std::fmt;

use crate::cli::types::PlayerId;
use crate::sleeper::types::{Transaction, TransactionStatus, TransactionType};

/// How a player left a roster. Anything that is not a trade renders as a
/// plain drop, matching the report wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionKind {
    Traded,
    Dropped,
}

impl fmt::Display for ExclusionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionKind::Traded => write!(f, "Traded"),
            ExclusionKind::Dropped => write!(f, "Dropped"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionEntry {
    pub week: u16,
    pub kind: ExclusionKind,
}

impl ExclusionEntry {
    /// Ineligibility reason text, e.g. `"Traded - Week 4"`.
    pub fn reason(&self) -> String {
        format!("{} - Week {}", self.kind, self.week)
    }
}

pub type KeeperExclusionList = HashMap<PlayerId, ExclusionEntry>;

/// Collect every player dropped or traded away across the season's completed
/// transactions. `transactions` must arrive in week order; the first
/// occurrence for a player wins.
pub fn build_exclusion_list<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> KeeperExclusionList {
    let mut exclusions = KeeperExclusionList::new();
    for transaction in transactions {
        if transaction.status != TransactionStatus::Complete {
            continue;
        }
        let Some(drops) = &transaction.drops else {
            continue;
        };
        let kind = match transaction.kind {
            TransactionType::Trade => ExclusionKind::Traded,
            _ => ExclusionKind::Dropped,
        };
        for player_id in drops.keys() {
            exclusions
                .entry(player_id.clone())
                .or_insert(ExclusionEntry {
                    week: transaction.leg,
                    kind,
                });
        }
    }
    exclusions
}
