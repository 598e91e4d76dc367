use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use docsplit_core::{BoundaryOracle, ChunkCandidate, OracleError, Section, SectionCandidate, SectionContent};

/// A line of roughly 60 characters tagged with its position.
pub fn body_line(i: usize) -> String {
    format!("{i:03} lorem ipsum dolor sit amet consectetur adipiscing elit sed")
}

/// `sections` markdown-style sections, each a `# Heading k` line followed by
/// `body_lines` body lines.
pub fn heading_document(sections: usize, body_lines: usize) -> String {
    let mut lines = Vec::new();
    for s in 0..sections {
        lines.push(format!("# Heading {s}"));
        for b in 0..body_lines {
            lines.push(body_line(s * body_lines + b));
        }
    }
    lines.join("\n")
}

/// Parse `[index] content` lines back out of a windowed text.
pub fn parse_numbered(windowed_text: &str) -> Vec<(usize, &str)> {
    windowed_text
        .lines()
        .filter_map(|line| {
            let rest = line.strip_prefix('[')?;
            let (index, content) = rest.split_once("] ")?;
            Some((index.parse().ok()?, content))
        })
        .collect()
}

pub fn as_sections(contents: &[SectionContent]) -> Vec<Section> {
    contents
        .iter()
        .map(|c| Section::new(c.title.clone(), c.start, c.end))
        .collect()
}

/// Well-behaved oracle: a section per `# ` heading line, chunks every
/// `chunk_every` lines.
pub struct HeadingOracle {
    pub chunk_every: usize,
    pub section_calls: AtomicUsize,
    pub chunk_calls: AtomicUsize,
}

impl HeadingOracle {
    pub fn new(chunk_every: usize) -> Self {
        Self {
            chunk_every,
            section_calls: AtomicUsize::new(0),
            chunk_calls: AtomicUsize::new(0),
        }
    }

    pub fn chunk_calls(&self) -> usize {
        self.chunk_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BoundaryOracle for HeadingOracle {
    async fn propose_sections(
        &self,
        windowed_text: &str,
        _start_line: usize,
        end_line: usize,
    ) -> Result<Vec<SectionCandidate>, OracleError> {
        self.section_calls.fetch_add(1, Ordering::SeqCst);
        let starts: Vec<(usize, &str)> = parse_numbered(windowed_text)
            .into_iter()
            .filter_map(|(i, text)| text.strip_prefix("# ").map(|title| (i, title)))
            .collect();

        Ok(starts
            .iter()
            .enumerate()
            .map(|(k, (start, title))| {
                let end = starts.get(k + 1).map(|(next, _)| next - 1).unwrap_or(end_line);
                SectionCandidate::new(*title, *start as i64, end as i64)
            })
            .collect())
    }

    async fn propose_chunks(
        &self,
        windowed_text: &str,
        start_line: usize,
        _min_chunks: usize,
        _max_chunks: usize,
    ) -> Result<Vec<ChunkCandidate>, OracleError> {
        self.chunk_calls.fetch_add(1, Ordering::SeqCst);
        let count = parse_numbered(windowed_text).len();
        Ok((0..count)
            .step_by(self.chunk_every.max(1))
            .map(|offset| ChunkCandidate {
                start_index: (start_line + offset) as i64,
            })
            .collect())
    }
}

/// Oracle returning fixed, possibly nonsensical, answers.
pub struct FixedOracle {
    pub sections: Vec<SectionCandidate>,
    pub chunks: Vec<ChunkCandidate>,
}

#[async_trait]
impl BoundaryOracle for FixedOracle {
    async fn propose_sections(&self, _: &str, _: usize, _: usize) -> Result<Vec<SectionCandidate>, OracleError> {
        Ok(self.sections.clone())
    }

    async fn propose_chunks(&self, _: &str, _: usize, _: usize, _: usize) -> Result<Vec<ChunkCandidate>, OracleError> {
        Ok(self.chunks.clone())
    }
}

/// Oracle whose every call fails to decode.
pub struct BrokenOracle;

#[async_trait]
impl BoundaryOracle for BrokenOracle {
    async fn propose_sections(&self, _: &str, _: usize, _: usize) -> Result<Vec<SectionCandidate>, OracleError> {
        Err(OracleError::Decode {
            reason: "expected value at line 1 column 1".into(),
            raw_response: "I'm sorry, I can't help with that.".into(),
        })
    }

    async fn propose_chunks(&self, _: &str, _: usize, _: usize, _: usize) -> Result<Vec<ChunkCandidate>, OracleError> {
        Err(OracleError::Provider("rate limited".into()))
    }
}

/// Oracle that sections fine but fails every chunking call.
pub struct ChunklessOracle {
    pub sections: Vec<SectionCandidate>,
}

#[async_trait]
impl BoundaryOracle for ChunklessOracle {
    async fn propose_sections(&self, _: &str, _: usize, _: usize) -> Result<Vec<SectionCandidate>, OracleError> {
        Ok(self.sections.clone())
    }

    async fn propose_chunks(&self, _: &str, _: usize, _: usize, _: usize) -> Result<Vec<ChunkCandidate>, OracleError> {
        Err(OracleError::Provider("rate limited".into()))
    }
}
