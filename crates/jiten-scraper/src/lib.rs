use std::path::PathBuf;

mod cache;
mod fetch;
mod progress;
mod scraper;
mod session;
mod target;

pub use cache::{CacheKeyer, PageCache};
pub use fetch::FetchClient;
pub use progress::{NullProgress, Progress};
pub use scraper::Scraper;
pub use session::{ReqwestSession, ReqwestSessionFactory, RetryPolicy};
pub use target::{ScrapeTarget, validate_url};

/// One HTTP session with its own connection pool and retry policy.
///
/// Not shared between workers; a broken session is thrown away and a new
/// one built through its [`SessionFactory`].
#[async_trait::async_trait]
pub trait HttpSession: Send + Sync {
    /// GET `url` and return the body as text
    async fn get(&self, url: &str) -> Result<String, TransportError>;
}

/// Builds fresh sessions, both initially and after a transport failure
pub trait SessionFactory: Send + Sync {
    fn create(&self) -> Result<Box<dyn HttpSession>, TransportError>;
}

/// Failure inside a single session
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gave up after {retries} retries, last status {status}")]
    RetriesExhausted { retries: u32, status: u16 },

    #[error("HTTP status {0}")]
    Status(u16),
}

impl TransportError {
    /// Whether a fresh session might succeed where this one failed
    pub fn is_transient(&self) -> bool {
        !matches!(self, TransportError::Status(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("Could not build HTTP session: {0}")]
    Session(#[source] TransportError),

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Cache IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    pub(crate) fn invalid_url(url: &str, reason: impl Into<String>) -> Self {
        ScrapeError::InvalidUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn from_transport(url: &str, error: TransportError) -> Self {
        match error {
            TransportError::Status(status) => ScrapeError::Status {
                url: url.to_string(),
                status,
            },
            source => ScrapeError::Network {
                url: url.to_string(),
                source,
            },
        }
    }
}
