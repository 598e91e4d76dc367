//! Plausibility bounds for oracle-proposed chunk counts.

/// Expected chunk-count band for a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkTarget {
    pub min: usize,
    pub max: usize,
}

/// Size-derived chunk-count band for `text`.
///
/// `expected = chars / max_characters + 1`; the band is `expected ± 1`, or
/// `(1, 2)` when at most one chunk is expected.
pub fn target_num_chunks(text: &str, max_characters: usize) -> ChunkTarget {
    let expected = text.chars().count() / max_characters.max(1) + 1;
    if expected < 2 {
        return ChunkTarget { min: 1, max: 2 };
    }
    ChunkTarget {
        min: expected - 1,
        max: expected + 1,
    }
}

impl ChunkTarget {
    /// True when `proposed` is more than 2x off the band in either direction,
    /// i.e. outside `[min / 2, max * 2]`, and the oracle's chunk boundaries
    /// should be discarded in favour of the fixed-size splitter.
    pub fn needs_fallback(&self, proposed: usize) -> bool {
        proposed < self.min / 2 || proposed > self.max * 2
    }
}
