use thiserror::Error;

/// The project list could not be read from the document store.
#[derive(Error, Debug)]
pub enum FetchFailure {
    #[error("document store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed document store response: {0}")]
    Malformed(String),
}

/// Errors raised while setting up a project store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid store URL: {0}")]
    Url(#[from] url::ParseError),
}
