//! Core primitives shared across the engine

pub mod money;
pub mod timeline;

// Re-exports
pub use money::{round_count, round_to_cents};
pub use timeline::{Timeline, DEFAULT_HORIZON_MONTHS, MONTHS_PER_YEAR};
