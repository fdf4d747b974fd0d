use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with status {status_code}")]
    Rejected { status_code: u16 },

    #[error("Malformed response body: {0}")]
    MalformedResponse(String),
}
