//! On-disk deduplication cache.
//!
//! A single JSON file mapping paper ids to the raw trend entries that were
//! processed. Presence of an id is all the pipeline reads back.

mod atomic;
mod store;

pub use atomic::{atomic_read_json, atomic_write_json};
pub use store::CacheStore;
