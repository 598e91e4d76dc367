use thiserror::Error;

/// Failure of a boundary oracle call. Always fatal for the pipeline run.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("oracle provider error: {0}")]
    Provider(String),

    #[error("failed to decode oracle response: {reason}")]
    Decode {
        reason: String,
        raw_response: String,
    },

    #[error("{0}")]
    Other(String),
}
