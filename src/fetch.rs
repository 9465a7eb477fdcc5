use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;

use crate::error::ImportError;

/// Default User-Agent for page fetches. Recipe publishers sit behind CDNs
/// that shed requests carrying obvious bot agents, so this mimics a desktop
/// browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// One-shot page fetcher, the only side-effecting part of the importer.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ImportError> {
        Self::with_user_agent(timeout, BROWSER_USER_AGENT)
    }

    pub fn with_user_agent(
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self, ImportError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, user_agent.parse::<HeaderValue>()?);

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the page body. A single attempt; transport failures and error
    /// statuses surface as [`ImportError::FetchError`].
    pub async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        debug!("fetching {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }
}
