//! Fixed-size fallback splitting.
//!
//! Used when the oracle's chunk proposals for a segment are implausible.
//! Deterministic and oracle-free.

mod helpers;

use helpers::{char_len, pack_with_overlap, split_recursive};

/// Deterministic text splitter used in place of oracle chunking.
pub trait TextSplitter: Send + Sync {
    /// Split `text` into non-empty pieces in document order.
    fn split(&self, text: &str) -> Vec<String>;
}

/// Default separators, most significant first: paragraph, line, sentence, word.
pub const DEFAULT_SEPARATORS: &[&str] = &["\n\n", "\n", ". ", " "];

/// Character-budget splitter that prefers the most significant separator
/// that keeps pieces within `chunk_size`, falling back to hard cuts.
#[derive(Debug, Clone)]
pub struct RecursiveCharacterSplitter {
    /// Maximum characters per chunk.
    pub chunk_size: usize,
    /// Characters of the previous chunk repeated at the start of the next.
    pub overlap: usize,
    pub separators: Vec<&'static str>,
}

impl RecursiveCharacterSplitter {
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            overlap: overlap.min(chunk_size.saturating_sub(1)),
            separators: DEFAULT_SEPARATORS.to_vec(),
        }
    }
}

impl Default for RecursiveCharacterSplitter {
    fn default() -> Self {
        Self::new(800, 0)
    }
}

impl TextSplitter for RecursiveCharacterSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        if char_len(text) <= self.chunk_size {
            return vec![text.trim().to_string()];
        }
        let pieces = split_recursive(text, self.chunk_size, &self.separators);
        pack_with_overlap(pieces, self.chunk_size, self.overlap)
    }
}
