use serde::{Deserialize, Serialize};

/// A section boundary as proposed by the oracle.
///
/// Nothing about a candidate is trusted: indices are signed, `start_index`
/// may exceed `end_index`, and candidates may overlap, repeat or fall outside
/// the range being partitioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCandidate {
    #[serde(default)]
    pub title: String,
    pub start_index: i64,
    pub end_index: i64,
}

impl SectionCandidate {
    pub fn new(title: impl Into<String>, start_index: i64, end_index: i64) -> Self {
        Self {
            title: title.into(),
            start_index,
            end_index,
        }
    }
}

impl From<&Section> for SectionCandidate {
    fn from(section: &Section) -> Self {
        Self {
            title: section.title.clone(),
            start_index: section.start as i64,
            end_index: section.end as i64,
        }
    }
}

/// A chunk boundary as proposed by the oracle. Only the start is given; the
/// end is implied by the next candidate or the enclosing segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkCandidate {
    pub start_index: i64,
}

/// An inclusive line range with a descriptive title.
///
/// An empty title marks a placeholder: a range inserted to keep a partition
/// gapless where no trustworthy oracle title exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub start: usize,
    pub end: usize,
}

impl Section {
    pub fn new(title: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            title: title.into(),
            start,
            end,
        }
    }

    pub fn placeholder(start: usize, end: usize) -> Self {
        Self::new(String::new(), start, end)
    }

    pub fn is_placeholder(&self) -> bool {
        self.title.is_empty()
    }
}

/// A normalized section together with the text it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent {
    pub title: String,
    /// First line (inclusive).
    pub start: usize,
    /// Last line (inclusive).
    pub end: usize,
    pub content: String,
}

/// Terminal output unit of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Title of the section the chunk was cut from.
    pub title: String,
    pub content: String,
}
