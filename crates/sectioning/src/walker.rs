//! Window-by-window section discovery.
//!
//! The document is fed to the oracle in windows of roughly `window_chars`
//! characters. Whenever a window yields more than one section, the last one
//! is assumed to be cut off by the window edge: it is dropped and the next
//! window restarts at its first line, so the oracle sees it whole.

use docsplit_core::{BoundaryOracle, SectionCandidate};
use tracing::{debug, warn};

use crate::error::SectioningError;
use crate::lines::DocumentLines;

pub struct WindowWalker<'a> {
    lines: &'a DocumentLines,
    oracle: &'a dyn BoundaryOracle,
    window_chars: usize,
}

impl<'a> WindowWalker<'a> {
    pub fn new(lines: &'a DocumentLines, oracle: &'a dyn BoundaryOracle, window_chars: usize) -> Self {
        Self {
            lines,
            oracle,
            window_chars,
        }
    }

    /// Upper bound on oracle calls for one walk: twice the number of windows
    /// a strictly advancing walk would need.
    pub fn max_iterations(&self) -> usize {
        2 * (self.lines.char_count() / self.window_chars.max(1) + 1)
    }

    /// Collect raw section candidates for the whole document, in window order.
    ///
    /// The result is unrepaired: run it through
    /// [`partition_sections`](crate::partition::partition_sections) before use.
    pub async fn walk(&self) -> Result<Vec<SectionCandidate>, SectioningError> {
        let cap = self.max_iterations();
        let last_line = self.lines.last_index();
        let mut collected: Vec<SectionCandidate> = Vec::new();
        let mut start_line = 0usize;

        for iteration in 0..cap {
            let window = self.lines.window(start_line, self.window_chars);
            debug!(
                iteration,
                start_line = window.start_line,
                end_line = window.end_line,
                bytes = window.text.len(),
                "requesting sections for window"
            );

            let mut proposed = self
                .oracle
                .propose_sections(&window.text, window.start_line, window.end_line)
                .await?;
            debug!(count = proposed.len(), "oracle proposed sections");

            if window.end_line >= last_line {
                collected.append(&mut proposed);
                return Ok(collected);
            }

            if proposed.len() < 2 {
                collected.append(&mut proposed);
                start_line = window.end_line + 1;
                continue;
            }

            let Some(last) = proposed.pop() else {
                continue;
            };
            collected.append(&mut proposed);

            if last.start_index <= start_line as i64 {
                warn!(
                    restart = last.start_index,
                    start_line, "restart index does not advance the walk; retrying window"
                );
            } else if last.start_index > window.end_line as i64 {
                warn!(
                    restart = last.start_index,
                    end_line = window.end_line,
                    "restart index lies past the window; keeping section and advancing"
                );
                collected.push(last);
                start_line = window.end_line + 1;
            } else {
                start_line = last.start_index as usize;
            }
        }

        Err(SectioningError::IterationCapExceeded {
            iterations: cap,
            start_line,
            total_lines: self.lines.line_count(),
        })
    }
}
