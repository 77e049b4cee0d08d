use std::sync::Arc;

use anyhow::Context;
use jiten_config::Config;
use jiten_core::{DictionaryEntry, DictionarySiteProfile};
use jiten_lang_japanese::{
    EntryParser, Headwords, KotowazaProfile, YojiProfile, entry_id_from_url, latest_attribution,
    revision,
};
use jiten_scraper::{Progress, ScrapeError, Scraper};

use crate::cli::Site;

/// Logs cache hits so long cached runs still show movement
struct LogProgress;

impl Progress for LogProgress {
    fn cache_hit(&mut self, count: usize) {
        tracing::info!("Discovering cached file {count}");
    }

    fn fetched(&mut self, url: &str) {
        tracing::debug!("Stored {url}");
    }
}

pub async fn run(site: Site, urls: &[String], config: &Config) -> anyhow::Result<()> {
    match site {
        Site::Yoji => run_site(Arc::new(YojiProfile::new()), urls, config).await,
        Site::Kotowaza => run_site(Arc::new(KotowazaProfile::new()), urls, config).await,
    }
}

/// Entries parsed in one batch and how many URLs were left out
struct Report<F> {
    entries: Vec<DictionaryEntry<F>>,
    skipped: usize,
}

async fn run_site<P: DictionarySiteProfile>(
    profile: Arc<P>,
    urls: &[String],
    config: &Config,
) -> anyhow::Result<()> {
    let mut scraper = Scraper::new(profile, &config.scraper)
        .context("Failed to set up scraper")?
        .with_progress(LogProgress);
    let report = scrape_all(&mut scraper, urls).await?;

    tracing::info!(
        "Parsed {} entries, {} from cache, {} skipped",
        report.entries.len(),
        scraper.cache_hits(),
        report.skipped
    );
    if let Some(revision) = revision(&report.entries) {
        tracing::info!("Revision: {revision}");
    }
    if let Some(attribution) = latest_attribution(&report.entries) {
        tracing::info!("Attribution: {attribution}");
    }

    if report.skipped > 0 {
        anyhow::bail!("{} of {} URLs could not be processed", report.skipped, urls.len());
    }
    Ok(())
}

/// Scrape and parse every URL. Problems with a single URL are logged and
/// skipped; transport, session and cache failures end the batch.
async fn scrape_all<P: DictionarySiteProfile>(
    scraper: &mut Scraper<P>,
    urls: &[String],
) -> anyhow::Result<Report<P::Fields>> {
    let parser = EntryParser::new(Arc::clone(scraper.profile()));
    let mut report = Report {
        entries: Vec::new(),
        skipped: 0,
    };

    for url in urls {
        let Some(entry_id) = entry_id_from_url(url) else {
            tracing::error!("No entry id in {url}, skipping");
            report.skipped += 1;
            continue;
        };

        let (page, cache_path) = match scraper.scrape(url).await {
            Ok(scraped) => scraped,
            Err(e @ (ScrapeError::InvalidUrl { .. } | ScrapeError::Status { .. })) => {
                tracing::error!("{e}, skipping");
                report.skipped += 1;
                continue;
            }
            Err(e) => return Err(e).with_context(|| format!("Failed to scrape {url}")),
        };

        match parser.parse(entry_id, &page) {
            Ok(entry) => {
                for (reading, expressions) in entry.headwords().iter() {
                    tracing::info!(
                        "{} {reading}: {}",
                        entry.global_identifier(),
                        expressions.join("、")
                    );
                }
                report.entries.push(entry);
            }
            Err(e) => {
                tracing::error!(
                    "{url} ({}): {e}; the {} profile needs updating",
                    cache_path.display(),
                    scraper.profile().name()
                );
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}
