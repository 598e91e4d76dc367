//! End-to-end flow: document → sections → chunks.

use docsplit_core::config::SectioningConfig;
use docsplit_core::{BoundaryOracle, Chunk, SectionContent};
use tracing::{debug, info, warn};

use crate::error::SectioningError;
use crate::lines::DocumentLines;
use crate::materialize::{chunk_candidates, materialize_chunks, materialize_sections};
use crate::partition::partition_sections;
use crate::splitter::TextSplitter;
use crate::target::target_num_chunks;
use crate::walker::WindowWalker;

/// A document cut into titled sections that tile every line exactly once.
#[derive(Debug, Clone)]
pub struct SegmentedDocument {
    pub lines: DocumentLines,
    pub sections: Vec<SectionContent>,
}

/// Walk `document` through the oracle and repair the result into a gapless
/// partition of its lines, with content attached.
pub async fn segment(
    document: &str,
    oracle: &dyn BoundaryOracle,
    config: &SectioningConfig,
) -> Result<SegmentedDocument, SectioningError> {
    let lines = DocumentLines::from_text(document);
    let candidates = WindowWalker::new(&lines, oracle, config.window_chars)
        .walk()
        .await?;
    let partition = partition_sections(&candidates, 0, lines.last_index());
    let sections = materialize_sections(&partition, &lines);

    info!(
        lines = lines.line_count(),
        candidates = candidates.len(),
        sections = sections.len(),
        "document segmented"
    );
    Ok(SegmentedDocument { lines, sections })
}

/// Cut one section into chunks.
///
/// Sections whose line-numbered text is under `min_chunking_chars` come back
/// as a single chunk. Otherwise the oracle proposes chunk starts; if their
/// count is implausible for the section's size, `splitter` is used instead.
pub async fn chunk_section(
    section: &SectionContent,
    lines: &DocumentLines,
    oracle: &dyn BoundaryOracle,
    splitter: &dyn TextSplitter,
    config: &SectioningConfig,
) -> Result<Vec<Chunk>, SectioningError> {
    let numbered = lines.numbered(section.start, section.end);
    if numbered.chars().count() < config.min_chunking_chars {
        debug!(title = %section.title, "section below chunking threshold");
        return Ok(vec![Chunk {
            title: section.title.clone(),
            content: lines.terminated(section.start, section.end),
        }]);
    }

    let target = target_num_chunks(&numbered, config.chunk_target_chars);
    let proposed = oracle
        .propose_chunks(&numbered, section.start, target.min, target.max)
        .await?;
    debug!(
        title = %section.title,
        proposed = proposed.len(),
        min = target.min,
        max = target.max,
        "oracle proposed chunks"
    );

    if target.needs_fallback(proposed.len()) {
        warn!(
            title = %section.title,
            proposed = proposed.len(),
            min = target.min,
            max = target.max,
            "implausible chunk count, using fallback splitter"
        );
        let text = lines.terminated(section.start, section.end);
        return Ok(splitter
            .split(&text)
            .into_iter()
            .map(|content| Chunk {
                title: section.title.clone(),
                content,
            })
            .collect());
    }

    let candidates = chunk_candidates(&proposed, &section.title, section.end);
    let parts = partition_sections(&candidates, section.start, section.end);
    Ok(materialize_chunks(&section.title, &parts, section.end, lines))
}

/// Segment `document` and chunk every section, in document order.
///
/// A chunking failure is reported as [`SectioningError::Chunking`] naming the
/// section.
pub async fn segment_and_chunk(
    document: &str,
    oracle: &dyn BoundaryOracle,
    splitter: &dyn TextSplitter,
    config: &SectioningConfig,
) -> Result<Vec<Chunk>, SectioningError> {
    let segmented = segment(document, oracle, config).await?;

    let mut chunks = Vec::new();
    for section in &segmented.sections {
        let section_chunks = chunk_section(section, &segmented.lines, oracle, splitter, config)
            .await
            .map_err(|source| SectioningError::Chunking {
                title: section.title.clone(),
                source: Box::new(source),
            })?;
        chunks.extend(section_chunks);
    }

    info!(
        sections = segmented.sections.len(),
        chunks = chunks.len(),
        "document chunked"
    );
    Ok(chunks)
}
