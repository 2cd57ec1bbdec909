//! FantasyPros consensus-rank (ECR) and ADP ingestion: page fetch, embedded
//! payload extraction, normalization, and cached access.

pub mod cache;
pub mod fetch;
pub mod records;
