use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ScrapeError;
use crate::target::ScrapeTarget;

/// Hex digits of the URL hash kept in file names
const HASH_LEN: usize = 32;

/// Maps validated URLs to cache file paths.
///
/// `{root}/{site}/[{subdomain}/]{segments..}/{basename}-{hash}.html`
#[derive(Debug, Clone)]
pub struct CacheKeyer {
    root: PathBuf,
}

impl CacheKeyer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, site: &str, target: &ScrapeTarget) -> PathBuf {
        let mut path = self.root.join(site);

        if let Some(subdomain) = target.subdomain() {
            path.push(subdomain);
        }

        let segments = target.segments();
        for segment in segments.iter().take(segments.len().saturating_sub(1)) {
            path.push(segment);
        }

        let basename = segments.last().map(|s| s.replace('.', "_")).unwrap_or_default();
        let hash = blake3::hash(target.as_str().as_bytes()).to_hex();
        path.push(format!("{basename}-{}.html", &hash.as_str()[..HASH_LEN]));
        path
    }
}

/// Read-through page store on the local filesystem
#[derive(Debug, Clone, Default)]
pub struct PageCache;

impl PageCache {
    /// Cached page text, or `None` when nothing is stored at `path`
    pub async fn read(&self, path: &Path) -> Result<Option<String>, ScrapeError> {
        match tokio::fs::read_to_string(path).await {
            Ok(page) => Ok(Some(page)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ScrapeError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Store `page` at `path`, creating parent directories on demand
    pub async fn write(&self, path: &Path, page: &str) -> Result<(), ScrapeError> {
        let io_error = |source| ScrapeError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }
        tokio::fs::write(path, page).await.map_err(io_error)
    }
}
