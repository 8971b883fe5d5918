use thiserror::Error;

/// Failure talking to coinlayer. A `success: false` answer is not an error,
/// the client reports it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error occurred: status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Connection error occurred: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("Timeout error occurred: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("Redirect error occurred: {0}")]
    TooManyRedirects(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("No rate for {0} in response")]
    MissingSymbol(String),

    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err)
        } else if err.is_redirect() {
            FetchError::TooManyRedirects(err)
        } else if err.is_connect() {
            FetchError::Connection(err)
        } else {
            FetchError::Request(err)
        }
    }
}
