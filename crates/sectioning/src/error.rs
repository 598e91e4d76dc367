use docsplit_core::OracleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SectioningError {
    #[error("oracle call failed: {0}")]
    Oracle(#[from] OracleError),

    #[error("chunking failed for section '{title}'")]
    Chunking {
        title: String,
        #[source]
        source: Box<SectioningError>,
    },

    #[error(
        "oracle made no progress: gave up after {iterations} windows at line {start_line} of {total_lines}"
    )]
    IterationCapExceeded {
        iterations: usize,
        start_line: usize,
        total_lines: usize,
    },
}
