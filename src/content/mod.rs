//! Content detection and formatting
//!
//! Heuristic classification of pasted text into a content-type tag, plus
//! JSON pretty-printing. Both are pure functions over the input text.

mod classify;
mod format;

pub use classify::{detect_content, Detection};
pub use format::format_json;
