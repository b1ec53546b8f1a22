use thiserror::Error;

#[derive(Debug, Error)]
pub enum NlpError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("inference API returned status {status} for {route}")]
    ApiStatus { status: u16, route: String },

    #[error("inference response parse error for {route}: {reason}")]
    Response { route: String, reason: String },
}
