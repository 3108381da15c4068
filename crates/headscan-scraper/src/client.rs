use std::time::Duration;

use headscan_core::{ExtractionMode, HeadingResult, Headings};
use reqwest::Client;

use crate::error::ScraperError;
use crate::normalize::normalize_url;
use crate::parse::extract_headings;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const MAX_REDIRECTS: usize = 10;

/// HTTP client that fetches pages and pulls their heading text.
///
/// One GET per page, no retries, no caching. Cloning is cheap: the
/// underlying `reqwest::Client` shares its connection pool between clones.
#[derive(Debug, Clone)]
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Creates a `PageClient` with a total per-request timeout and `User-Agent`.
    ///
    /// A request exceeding `timeout_secs` fails like any other fetch error.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `address` and extracts the headings requested by `mode`.
    ///
    /// The address is normalized first; an already-normalized URL passes
    /// through unchanged. Never fails: a fetch error yields a record whose
    /// `source_url` is the trimmed address as given and whose `error` is the
    /// generic fetch-failure message. The typed cause is only logged.
    pub async fn extract(&self, address: &str, mode: ExtractionMode) -> HeadingResult {
        let url = normalize_url(address);
        match self.fetch_headings(&url, mode).await {
            Ok(headings) => {
                let result = HeadingResult::from_page(url, headings);
                if let Some(reason) = &result.error {
                    tracing::debug!(
                        url = %result.source_url,
                        reason = %reason,
                        "page has no matching headings"
                    );
                }
                result
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "failed to fetch page");
                HeadingResult::fetch_failed(address.trim(), mode)
            }
        }
    }

    /// Fetches `url` and parses the requested heading levels out of its body.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_html`].
    pub async fn fetch_headings(
        &self,
        url: &str,
        mode: ExtractionMode,
    ) -> Result<Headings, ScraperError> {
        let html = self.fetch_html(url).await?;
        Ok(extract_headings(&html, mode))
    }

    /// Issues a single GET for `url` and returns the response body as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`]: `url` is not an absolute URL.
    /// - [`ScraperError::UnexpectedStatus`]: any non-2xx status.
    /// - [`ScraperError::Http`]: DNS, connect, TLS, timeout, or body read failure.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        let response = self
            .client
            .get(parsed)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
