//! Reader stream x-post combiner.
//!
//! Layers:
//! - domain: post keys and the pure adjacent-duplicate fold
//! - usecase: combine / append / validate workflows + progress events
//! - infrastructure: serde, JSON schema, NDJSON events, default matcher
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
