//! Turning line ranges into text.
//!
//! Ends are inferred from adjacency: an item runs until the line before the
//! next item's start, or to the end of its enclosing range. This only holds
//! for lists that already went through [`partition_sections`], which is why
//! chunk starts are converted to candidates and repaired before they are
//! materialized.
//!
//! [`partition_sections`]: crate::partition::partition_sections

use docsplit_core::{Chunk, ChunkCandidate, Section, SectionCandidate, SectionContent};

use crate::lines::DocumentLines;

/// Attach content to normalized sections. The last section runs to the
/// document's final line.
pub fn materialize_sections(sections: &[Section], lines: &DocumentLines) -> Vec<SectionContent> {
    sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let end = implied_end(sections.get(i + 1).map(|s| s.start), lines.last_index());
            SectionContent {
                title: section.title.clone(),
                start: section.start,
                end,
                content: lines.joined(section.start, end),
            }
        })
        .collect()
}

/// Expand chunk starts into section candidates: each chunk ends the line
/// before the next proposed start, the final one at `segment_end`.
///
/// Out-of-order or duplicate starts produce reversed or nested candidates,
/// which the partition repair drops.
pub fn chunk_candidates(starts: &[ChunkCandidate], title: &str, segment_end: usize) -> Vec<SectionCandidate> {
    starts
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let end = match starts.get(i + 1) {
                Some(next) => next.start_index.saturating_sub(1),
                None => segment_end as i64,
            };
            SectionCandidate::new(title, chunk.start_index, end)
        })
        .collect()
}

/// Cut a segment into chunks along a repaired partition of its lines. Every
/// chunk carries the segment's title.
pub fn materialize_chunks(
    title: &str,
    parts: &[Section],
    segment_end: usize,
    lines: &DocumentLines,
) -> Vec<Chunk> {
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let end = implied_end(parts.get(i + 1).map(|p| p.start), segment_end);
            Chunk {
                title: title.to_string(),
                content: lines.terminated(part.start, end),
            }
        })
        .collect()
}

fn implied_end(next_start: Option<usize>, last: usize) -> usize {
    match next_start {
        Some(start) => start.saturating_sub(1),
        None => last,
    }
}
