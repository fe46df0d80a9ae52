// src/core/net.rs
//
// Blocking HTTP GET with a per-request timeout. Bodies are read as bytes and
// decoded per their declared charset; non-2xx answers are errors.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::core::encoding;
use crate::error::ScrapeError;

/// Anything that can turn a URL into an HTML body.
pub trait PageSource {
    fn get(&self, url: &str) -> Result<String, ScrapeError>;
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// `accept_invalid_certs` turns off certificate and hostname checks.
    pub fn new(timeout: Duration, accept_invalid_certs: bool) -> Result<Self, ScrapeError> {
        if accept_invalid_certs {
            logw!("TLS certificate verification is DISABLED for course-page requests");
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for Fetcher {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        logd!("GET {url}");
        let http = |source| ScrapeError::Http { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(http)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status });
        }
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = resp.bytes().map_err(http)?;
        Ok(encoding::decode_page(&body, content_type.as_deref()))
    }
}
