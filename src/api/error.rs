use thiserror::Error;

/// Failure of a single request against the recipe API.
///
/// The screens treat every variant the same way ("search request failed");
/// the variants exist so logs and the one-shot CLI can say what went wrong.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("failed to parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create HTTP client: {0}")]
    Init(#[source] reqwest::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
