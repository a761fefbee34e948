pub(crate) mod formula;
pub mod primitives;
pub(crate) mod reaction;

// Re-exports
pub use formula::{split_at_digit, split_before_uppercases};
pub use reaction::reaction_sides;
