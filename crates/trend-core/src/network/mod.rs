//! Network utilities for the pipeline's HTTP calls.

mod client;

pub use client::{redact_query, HttpClient};
