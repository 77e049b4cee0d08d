use std::time::Duration;

use jiten_config::scraper::ScraperConfig;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::{HttpSession, SessionFactory, TransportError};

/// Longest wait between two retries
const MAX_BACKOFF: Duration = Duration::from_secs(120);

/// In-session retries for flaky statuses and connection errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub total: u32,
    pub backoff: Duration,
    pub statuses: Vec<u16>,
}

impl RetryPolicy {
    pub fn from_config(config: &ScraperConfig) -> Self {
        Self {
            total: config.max_retries,
            backoff: Duration::from_millis(config.backoff_ms),
            statuses: config.retry_statuses.clone(),
        }
    }

    pub fn retries_status(&self, status: u16) -> bool {
        self.statuses.contains(&status)
    }

    /// Wait before retry number `retries_done + 1`, or `None` once the budget is spent
    pub fn next_delay(&self, retries_done: u32) -> Option<Duration> {
        if retries_done >= self.total {
            return None;
        }
        let factor = 2u32.saturating_pow(retries_done);
        Some(self.backoff.saturating_mul(factor).min(MAX_BACKOFF))
    }
}

/// `reqwest` session with default headers, timeout and [`RetryPolicy`]
pub struct ReqwestSession {
    client: Client,
    policy: RetryPolicy,
}

impl ReqwestSession {
    pub fn new(config: &ScraperConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!("Skipping invalid header {name}: {value}"),
            }
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            policy: RetryPolicy::from_config(config),
        })
    }
}

#[async_trait::async_trait]
impl HttpSession for ReqwestSession {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        let mut retries = 0;

        loop {
            let error = match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response.text().await?);
                    }
                    if !self.policy.retries_status(status.as_u16()) {
                        return Err(TransportError::Status(status.as_u16()));
                    }
                    TransportError::RetriesExhausted {
                        retries,
                        status: status.as_u16(),
                    }
                }
                Err(e) if e.is_connect() || e.is_timeout() => TransportError::Request(e),
                Err(e) => return Err(e.into()),
            };

            let Some(delay) = self.policy.next_delay(retries) else {
                return Err(error);
            };
            retries += 1;
            tracing::debug!(
                "Retry {retries}/{} for {url} in {delay:?}: {error}",
                self.policy.total
            );
            tokio::time::sleep(delay).await;
        }
    }
}

/// Builds [`ReqwestSession`]s from one [`ScraperConfig`]
pub struct ReqwestSessionFactory {
    config: ScraperConfig,
}

impl ReqwestSessionFactory {
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }
}

impl SessionFactory for ReqwestSessionFactory {
    fn create(&self) -> Result<Box<dyn HttpSession>, TransportError> {
        Ok(Box::new(ReqwestSession::new(&self.config)?))
    }
}
