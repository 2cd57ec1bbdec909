//! Sleeper API client and typed records.

pub mod http;
pub mod types;
