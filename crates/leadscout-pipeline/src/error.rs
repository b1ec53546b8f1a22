use leadscout_sources::SourceError;

/// Errors surfaced to the API and CLI layers.
///
/// Enrichment and NLP failures never appear here; those stages degrade to
/// sentinels or neutral values inside the run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Request parameters failed validation before any upstream call.
    #[error("{0}")]
    Validation(String),

    /// The seed source (user search or job listings) failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A client could not be constructed at startup.
    #[error("failed to initialize pipeline: {0}")]
    Init(String),
}
