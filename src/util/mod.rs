//! Utilities Module - shared value helpers
//!
//! Contains helpers used by the path engine and collection operations:
//! - `constants`: Write limits for the path engine
//! - `order`: Total ordering over JSON values (default `sort` comparator)
//! - `text`: Loose string rendering of values (used by `join`)

pub mod constants;
pub mod order;
pub mod text;

// Re-export public helpers
pub use constants::MAX_SEQUENCE_GAP;
pub use order::compare_values;
pub use text::render;
