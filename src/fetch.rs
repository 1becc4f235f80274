use std::time::Duration;

use thiserror::Error;

const USER_AGENT: &str = concat!("azimuth-asctb-reconcile/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },
    #[error("body read error: {0}")]
    Body(String),
}

pub trait RowSource {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpRowSource {
    client: reqwest::blocking::Client,
}

impl HttpRowSource {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

impl RowSource for HttpRowSource {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().map_err(|e| FetchError::Body(e.to_string()))
    }
}
