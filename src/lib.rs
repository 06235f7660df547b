//! Clipbox: single-item online clipboard
//!
//! A small HTTP service backed by a hosted key-value configuration store:
//! - One stored item at a time, every save overwrites (last-write-wins)
//! - Heuristic content-type classification for syntax highlighting
//! - JSON payloads are pretty-printed before storage
//! - Reads degrade to an empty record when the backend is unavailable

pub mod config;
pub mod content;
pub mod http;
pub mod storage;
pub mod types;

pub use config::Config;
pub use types::*;
