//! Partitions: ordered section lists covering a line range `[a, b]` with no
//! gap and no overlap.
//!
//! [`partition_sections`] repairs any candidate list into a partition;
//! [`is_valid_partition`] checks the invariant.

mod normalize;
mod validate;

pub use normalize::partition_sections;
pub use validate::is_valid_partition;
