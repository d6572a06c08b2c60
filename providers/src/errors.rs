use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Serde parse error: {0}")]
    SerdeParse(#[from] serde_json::Error),
    #[error("Request to {url} failed with status {status}")]
    Http {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("No puzzle available for {0}")]
    EmptyResponse(String),
    #[error("Invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}
