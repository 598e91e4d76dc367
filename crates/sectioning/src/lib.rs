//! Oracle-driven sectioning and chunking of long documents.
//!
//! A document is split into lines, walked window by window through a
//! [`BoundaryOracle`](docsplit_core::BoundaryOracle), repaired into a gapless
//! partition of titled sections, and finally cut into bounded-size chunks,
//! falling back to a fixed-size splitter when the oracle's chunking is
//! implausible.

mod error;
pub mod lines;
pub mod materialize;
pub mod partition;
pub mod pipeline;
pub mod splitter;
pub mod target;
pub mod walker;

pub use error::SectioningError;
pub use lines::{DocumentLines, Line, Window};
pub use partition::{is_valid_partition, partition_sections};
pub use pipeline::{chunk_section, segment, segment_and_chunk, SegmentedDocument};
pub use splitter::{RecursiveCharacterSplitter, TextSplitter};
pub use target::{target_num_chunks, ChunkTarget};
pub use walker::WindowWalker;
