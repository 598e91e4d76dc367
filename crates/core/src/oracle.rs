use async_trait::async_trait;

use crate::boundary::{ChunkCandidate, SectionCandidate};
use crate::error::OracleError;

/// Source of section and chunk boundaries.
///
/// Windowed text is line-numbered (`[index] content`), so the indices an
/// oracle returns address document lines directly. No validity contract is
/// placed on the output; callers repair or reject it.
#[async_trait]
pub trait BoundaryOracle: Send + Sync {
    /// Propose titled sections for the window covering `start_line..=end_line`.
    async fn propose_sections(
        &self,
        windowed_text: &str,
        start_line: usize,
        end_line: usize,
    ) -> Result<Vec<SectionCandidate>, OracleError>;

    /// Propose chunk starts for a segment beginning at `start_line`, asking for
    /// between `min_chunks` and `max_chunks` chunks.
    async fn propose_chunks(
        &self,
        windowed_text: &str,
        start_line: usize,
        min_chunks: usize,
        max_chunks: usize,
    ) -> Result<Vec<ChunkCandidate>, OracleError>;
}
