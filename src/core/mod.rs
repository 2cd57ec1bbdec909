//! Shared infrastructure: the on-disk cache store.

pub mod cache;

pub use cache::CacheStore;
