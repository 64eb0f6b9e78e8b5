use crate::error::{PickerError, PickerResult};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

/// User agent sent with the dataset download.
const USER_AGENT_VALUE: &str = concat!("emoji-picker/", env!("CARGO_PKG_VERSION"));

/// Downloads the raw dataset bytes.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> PickerResult<Vec<u8>>;
}

/// Blocking HTTP download. Uses the client library's default request timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl HttpFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> PickerResult<Vec<u8>> {
        debug!("Fetching emoji dataset from {url}");

        let client = Client::builder()
            .build()
            .map_err(|e| PickerError::fetch(url, e.to_string()))?;

        let response = client
            .get(url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()
            .map_err(|e| PickerError::fetch(url, e.to_string()))?;

        check_status(url, response.status().as_u16())?;

        let body = response
            .bytes()
            .map_err(|e| PickerError::fetch(url, e.to_string()))?;

        debug!("Downloaded {} bytes", body.len());
        Ok(body.to_vec())
    }
}

/// Anything outside 2xx is a failed download.
pub(crate) fn check_status(url: &str, status: u16) -> PickerResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(PickerError::fetch(url, format!("unexpected status: {status}")))
    }
}
