//! Keeper eligibility core: identity reconciliation, the transaction-derived
//! exclusion list, and per-pick evaluation.

pub mod eligibility;
pub mod exclusions;
pub mod identity;
