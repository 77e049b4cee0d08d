/// Progress reporting for long scrape runs.
/// Frontends implement this to surface status to users.
pub trait Progress: Send {
    /// A page came from the cache; `count` is the running total of hits.
    fn cache_hit(&mut self, _count: usize) {}

    /// A page was fetched over the network and stored.
    fn fetched(&mut self, _url: &str) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
