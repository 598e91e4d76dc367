//! Splitting and packing utilities for the fallback splitter.
//!
//! All sizes are in characters, never bytes, so cuts always land on char
//! boundaries.

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split `text` into pieces of at most `max_chars` characters.
///
/// Tries each separator in turn, keeping it attached to the end of the piece
/// it terminates, so the pieces concatenate back to `text`. Pieces still
/// oversized after the last separator are cut hard.
pub(crate) fn split_recursive<'a>(text: &'a str, max_chars: usize, separators: &[&str]) -> Vec<&'a str> {
    if char_len(text) <= max_chars {
        return vec![text];
    }
    let Some((separator, rest)) = separators.split_first() else {
        return hard_cut(text, max_chars);
    };

    let mut pieces = Vec::new();
    for piece in text.split_inclusive(*separator) {
        if char_len(piece) <= max_chars {
            pieces.push(piece);
        } else {
            pieces.extend(split_recursive(piece, max_chars, rest));
        }
    }
    pieces
}

/// Cut `text` every `max_chars` characters.
fn hard_cut(text: &str, max_chars: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in text.char_indices() {
        if count == max_chars {
            pieces.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

/// Greedily pack pieces into chunks of at most `max_chars` characters.
///
/// Each new chunk may begin with up to `overlap` trailing characters of the
/// previous one, as long as the incoming piece still fits. Chunks are trimmed
/// and whitespace-only chunks are dropped.
pub(crate) fn pack_with_overlap(pieces: Vec<&str>, max_chars: usize, overlap: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buf = String::new();
    let mut buf_len = 0usize;

    for piece in pieces {
        let piece_len = char_len(piece);
        if buf_len > 0 && buf_len + piece_len > max_chars {
            let carried = tail_chars(&buf, overlap.min(max_chars.saturating_sub(piece_len)));
            flush(&mut chunks, &buf);
            buf_len = char_len(&carried);
            buf = carried;
        }
        buf.push_str(piece);
        buf_len += piece_len;
    }
    flush(&mut chunks, &buf);
    chunks
}

/// The last `n` characters of `text`.
fn tail_chars(text: &str, n: usize) -> String {
    let skip = char_len(text).saturating_sub(n);
    text.chars().skip(skip).collect()
}

fn flush(chunks: &mut Vec<String>, buf: &str) {
    let trimmed = buf.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}
