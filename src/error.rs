use thiserror::Error;

/// Why a single upstream call did not produce usable data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Call failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response from {url}: {message}")]
    Malformed { url: String, message: String },

    #[error("API reported errors for {url}: {errors}")]
    Api { url: String, errors: String },

    #[error("Empty response from {url}")]
    NoData { url: String },
}

impl FetchError {
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status { status, url: url.into() }
    }

    pub fn malformed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed { url: url.into(), message: message.into() }
    }

    pub fn api(url: impl Into<String>, errors: impl Into<String>) -> Self {
        Self::Api { url: url.into(), errors: errors.into() }
    }

    pub fn no_data(url: impl Into<String>) -> Self {
        Self::NoData { url: url.into() }
    }
}
