//! Common utilities shared across operation backends.

pub mod compact;
pub mod index_map;

pub use compact::{CompactedShapes, compact_dims};
pub use index_map::{IndexMap, normalize_index};
