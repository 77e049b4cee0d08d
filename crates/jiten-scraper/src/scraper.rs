use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use jiten_config::scraper::ScraperConfig;
use jiten_core::DictionarySiteProfile;

use crate::cache::{CacheKeyer, PageCache};
use crate::fetch::FetchClient;
use crate::progress::{NullProgress, Progress};
use crate::session::ReqwestSessionFactory;
use crate::target::validate_url;
use crate::ScrapeError;

/// Cache-first page fetcher for one dictionary site.
///
/// Owns its HTTP session, so use one scraper per worker.
pub struct Scraper<P: DictionarySiteProfile> {
    profile: Arc<P>,
    keyer: CacheKeyer,
    cache: PageCache,
    client: FetchClient,
    cache_hits: usize,
    progress: Box<dyn Progress>,
}

impl<P: DictionarySiteProfile> Scraper<P> {
    /// Scraper backed by `reqwest` sessions built from `config`
    pub fn new(profile: Arc<P>, config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let factory = ReqwestSessionFactory::new(config.clone());
        let client = FetchClient::new(
            Box::new(factory),
            Duration::from_millis(config.request_delay_ms),
        )
        .map_err(ScrapeError::Session)?;

        Ok(Self::with_client(profile, config.cache_root.clone(), client))
    }

    pub fn with_client(
        profile: Arc<P>,
        cache_root: impl Into<PathBuf>,
        client: FetchClient,
    ) -> Self {
        Self {
            profile,
            keyer: CacheKeyer::new(cache_root),
            cache: PageCache,
            client,
            cache_hits: 0,
            progress: Box::new(NullProgress),
        }
    }

    pub fn with_progress(mut self, progress: impl Progress + 'static) -> Self {
        self.progress = Box::new(progress);
        self
    }

    pub fn profile(&self) -> &Arc<P> {
        &self.profile
    }

    /// Pages served from the cache so far
    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    /// Page text and its cache path.
    ///
    /// Reads the cache first; on a miss, fetches the page and stores it
    /// before returning.
    pub async fn scrape(&mut self, url: &str) -> Result<(String, PathBuf), ScrapeError> {
        let target = validate_url(self.profile.as_ref(), url)?;
        let cache_path = self.keyer.path_for(self.profile.name(), &target);

        if let Some(page) = self.cache.read(&cache_path).await? {
            self.cache_hits += 1;
            tracing::debug!("Discovering cached file {} ({url})", self.cache_hits);
            self.progress.cache_hit(self.cache_hits);
            return Ok((page, cache_path));
        }

        let page = self.client.fetch(target.as_str()).await?;
        self.cache.write(&cache_path, &page).await?;
        self.progress.fetched(url);

        Ok((page, cache_path))
    }
}
