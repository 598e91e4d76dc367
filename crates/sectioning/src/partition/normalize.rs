use docsplit_core::{Section, SectionCandidate};

/// Repair an arbitrary candidate list into a partition of `[a, b]`.
///
/// Single left-to-right pass with one candidate of lookahead. A cursor marks
/// the first line not yet covered by the output:
///
/// 1. Candidates with `start > end`, or starting past `b`, are dropped.
/// 2. A candidate ending before the cursor is already covered and is dropped.
/// 3. Following candidates nested inside the current one are dropped.
/// 4. If the next candidate starts inside the current one and reaches further,
///    the current candidate loses its title: only a placeholder up to the next
///    candidate's start is emitted, and the next candidate becomes current.
/// 5. Otherwise any gap before the candidate becomes a placeholder and the
///    candidate is emitted unchanged.
/// 6. A trailing gap up to `b` becomes a placeholder.
///
/// A candidate that reaches back before the cursor or past `b` cannot be
/// emitted unchanged; its uncovered part becomes a placeholder instead, so
/// titles are never attached to a clipped range.
///
/// Returns an empty list only when `a > b`.
pub fn partition_sections(candidates: &[SectionCandidate], a: usize, b: usize) -> Vec<Section> {
    if a > b {
        return Vec::new();
    }
    let (lo, hi) = (a as i64, b as i64);

    let pending: Vec<&SectionCandidate> = candidates
        .iter()
        .filter(|c| c.start_index <= c.end_index && c.start_index <= hi)
        .collect();

    let mut out = Vec::with_capacity(pending.len() + 1);
    let mut cursor = lo;
    let mut i = 0;

    while i < pending.len() {
        let current = pending[i];
        if current.end_index < cursor {
            i += 1;
            continue;
        }

        let mut next = i + 1;
        while next < pending.len() && is_nested(pending[next], current) {
            next += 1;
        }

        if let Some(successor) = pending.get(next) {
            if successor.start_index <= current.end_index {
                if current.start_index > cursor {
                    push_placeholder(&mut out, cursor, current.start_index - 1);
                    cursor = current.start_index;
                }
                push_placeholder(&mut out, cursor, successor.start_index.saturating_sub(1));
                cursor = cursor.max(successor.start_index);
                i = next;
                continue;
            }
        }

        if current.start_index > cursor {
            push_placeholder(&mut out, cursor, current.start_index - 1);
            cursor = current.start_index;
        }

        let end = current.end_index.min(hi);
        if current.start_index == cursor && current.end_index <= hi {
            out.push(Section::new(
                current.title.clone(),
                current.start_index as usize,
                current.end_index as usize,
            ));
        } else {
            push_placeholder(&mut out, cursor, end);
        }
        cursor = cursor.max(end + 1);
        i = next;
    }

    push_placeholder(&mut out, cursor, hi);
    out
}

fn is_nested(candidate: &SectionCandidate, outer: &SectionCandidate) -> bool {
    candidate.start_index <= outer.end_index && candidate.end_index <= outer.end_index
}

/// Emit an untitled section for `[start, end]` if the range is non-empty.
fn push_placeholder(out: &mut Vec<Section>, start: i64, end: i64) {
    if start <= end {
        out.push(Section::placeholder(start as usize, end as usize));
    }
}
