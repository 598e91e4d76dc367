use docsplit_core::Section;

/// Does `sections` exactly partition the inclusive range `[a, b]`?
///
/// Checks, in order: non-empty, first start is `a`, last end is `b`, every
/// section has `start <= end`, every neighbour starts right after its
/// predecessor ends.
pub fn is_valid_partition(sections: &[Section], a: usize, b: usize) -> bool {
    let (Some(first), Some(last)) = (sections.first(), sections.last()) else {
        return false;
    };
    if first.start != a || last.end != b {
        return false;
    }
    if sections.iter().any(|s| s.start > s.end) {
        return false;
    }
    sections
        .windows(2)
        .all(|pair| pair[1].start == pair[0].end + 1)
}
