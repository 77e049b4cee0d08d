use std::time::Duration;

use crate::{HttpSession, ScrapeError, SessionFactory, TransportError};

/// Where one fetch stands. A transport failure on the first session moves
/// to `Retrying` with a rebuilt session; there is no way back to `Fetching`.
enum FetchState {
    Fetching,
    Retrying,
    Fetched(String),
    Failed(TransportError),
}

/// Rate-limited GETs with one session rebuild on transport failure
pub struct FetchClient {
    factory: Box<dyn SessionFactory>,
    session: Box<dyn HttpSession>,
    delay: Duration,
    session_resets: u32,
}

impl FetchClient {
    pub fn new(factory: Box<dyn SessionFactory>, delay: Duration) -> Result<Self, TransportError> {
        let session = factory.create()?;
        Ok(Self {
            factory,
            session,
            delay,
            session_resets: 0,
        })
    }

    /// Number of times the session was rebuilt over this client's life
    pub fn session_resets(&self) -> u32 {
        self.session_resets
    }

    pub async fn fetch(&mut self, url: &str) -> Result<String, ScrapeError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!("Scraping {url}");

        let mut state = FetchState::Fetching;
        loop {
            state = match state {
                FetchState::Fetching => match self.session.get(url).await {
                    Ok(page) => FetchState::Fetched(page),
                    Err(e) if e.is_transient() => {
                        tracing::warn!("Failed: {e}. Resetting session and trying again");
                        match self.reset_session() {
                            Ok(()) => FetchState::Retrying,
                            Err(e) => FetchState::Failed(e),
                        }
                    }
                    Err(e) => FetchState::Failed(e),
                },
                FetchState::Retrying => match self.session.get(url).await {
                    Ok(page) => FetchState::Fetched(page),
                    Err(e) => FetchState::Failed(e),
                },
                FetchState::Fetched(page) => {
                    tracing::info!("OK {url} ({} bytes)", page.len());
                    return Ok(page);
                }
                FetchState::Failed(e) => return Err(ScrapeError::from_transport(url, e)),
            };
        }
    }

    fn reset_session(&mut self) -> Result<(), TransportError> {
        self.session = self.factory.create()?;
        self.session_resets += 1;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Scripted result of one `get` call
    #[derive(Debug, Clone)]
    pub(crate) enum Outcome {
        Page(&'static str),
        Transient,
        Status(u16),
    }

    /// Hands out sessions that replay a shared script and count calls
    #[derive(Clone, Default)]
    pub(crate) struct MockFactory {
        pub(crate) script: Arc<Mutex<VecDeque<Outcome>>>,
        pub(crate) requests: Arc<AtomicUsize>,
        pub(crate) sessions: Arc<AtomicUsize>,
    }

    impl MockFactory {
        pub(crate) fn with_script(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
            let factory = Self::default();
            factory.script.lock().unwrap().extend(outcomes);
            factory
        }

        pub(crate) fn requests(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }

        pub(crate) fn sessions(&self) -> usize {
            self.sessions.load(Ordering::SeqCst)
        }
    }

    struct MockSession {
        factory: MockFactory,
    }

    #[async_trait::async_trait]
    impl HttpSession for MockSession {
        async fn get(&self, _url: &str) -> Result<String, TransportError> {
            self.factory.requests.fetch_add(1, Ordering::SeqCst);
            let outcome = self.factory.script.lock().unwrap().pop_front();
            match outcome.expect("unscripted request") {
                Outcome::Page(page) => Ok(page.to_string()),
                Outcome::Transient => Err(TransportError::RetriesExhausted {
                    retries: 3,
                    status: 503,
                }),
                Outcome::Status(status) => Err(TransportError::Status(status)),
            }
        }
    }

    impl SessionFactory for MockFactory {
        fn create(&self) -> Result<Box<dyn HttpSession>, TransportError> {
            self.sessions.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(MockSession {
                factory: self.clone(),
            }))
        }
    }

    fn client(factory: &MockFactory) -> FetchClient {
        FetchClient::new(Box::new(factory.clone()), Duration::ZERO).unwrap()
    }

    #[tokio::test]
    async fn test_first_attempt_succeeds() {
        let factory = MockFactory::with_script([Outcome::Page("ok")]);
        let mut client = client(&factory);

        assert_eq!(client.fetch("https://yoji.jitenon.jp/a/1.html").await.unwrap(), "ok");
        assert_eq!(factory.requests(), 1);
        assert_eq!(factory.sessions(), 1);
        assert_eq!(client.session_resets(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_rebuilds_session_once() {
        let factory = MockFactory::with_script([Outcome::Transient, Outcome::Page("second")]);
        let mut client = client(&factory);

        assert_eq!(client.fetch("https://yoji.jitenon.jp/a/1.html").await.unwrap(), "second");
        assert_eq!(factory.requests(), 2);
        assert_eq!(factory.sessions(), 2);
        assert_eq!(client.session_resets(), 1);
    }

    #[tokio::test]
    async fn test_two_transport_failures_give_up() {
        let factory = MockFactory::with_script([
            Outcome::Transient,
            Outcome::Transient,
            Outcome::Page("never"),
        ]);
        let mut client = client(&factory);

        let result = client.fetch("https://yoji.jitenon.jp/a/1.html").await;
        assert!(matches!(result, Err(ScrapeError::Network { .. })));
        assert_eq!(factory.requests(), 2);
    }

    #[tokio::test]
    async fn test_plain_status_error_is_not_retried() {
        let factory = MockFactory::with_script([Outcome::Status(404)]);
        let mut client = client(&factory);

        let result = client.fetch("https://yoji.jitenon.jp/a/1.html").await;
        assert!(matches!(result, Err(ScrapeError::Status { status: 404, .. })));
        assert_eq!(factory.requests(), 1);
        assert_eq!(factory.sessions(), 1);
    }
}
