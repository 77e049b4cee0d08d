use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_cache_root() -> PathBuf {
    PathBuf::from("cache")
}

fn default_request_delay_ms() -> u64 {
    10_000
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    1_000
}

fn default_retry_statuses() -> Vec<u16> {
    vec![429, 500, 502, 503, 504]
}

fn default_user_agent() -> String {
    concat!("jiten/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("User-Agent".to_string(), default_user_agent()),
        (
            "Accept".to_string(),
            "text/html,application/xhtml+xml".to_string(),
        ),
        ("Accept-Language".to_string(), "ja,en;q=0.5".to_string()),
    ])
}

/// Settings for fetching and caching dictionary pages
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScraperConfig {
    /// Root directory of the page cache. One subdirectory per site.
    #[serde(default = "default_cache_root")]
    pub cache_root: PathBuf,
    /// Courtesy delay before every network request
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Total retries for retryable statuses and connect errors within one session
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Backoff factor; the n-th retry waits `backoff_ms * 2^(n-1)`
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
    #[serde(default = "default_retry_statuses")]
    pub retry_statuses: Vec<u16>,
    /// Default headers sent with every request
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,
}

impl ScraperConfig {
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("JITEN_CACHE_DIR") {
            config.cache_root = PathBuf::from(dir);
        }

        if let Some(delay) = env::var("JITEN_REQUEST_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.request_delay_ms = delay;
        }

        if let Some(timeout) = env::var("JITEN_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout_seconds = timeout;
        }

        if let Some(retries) = env::var("JITEN_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.max_retries = retries;
        }

        if let Some(backoff) = env::var("JITEN_BACKOFF_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.backoff_ms = backoff;
        }

        if let Ok(agent) = env::var("JITEN_USER_AGENT") {
            config.headers.insert("User-Agent".to_string(), agent);
        }

        config
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            cache_root: default_cache_root(),
            request_delay_ms: default_request_delay_ms(),
            timeout_seconds: default_timeout_seconds(),
            max_retries: default_max_retries(),
            backoff_ms: default_backoff_ms(),
            retry_statuses: default_retry_statuses(),
            headers: default_headers(),
        }
    }
}
