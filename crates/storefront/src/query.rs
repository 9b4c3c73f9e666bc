//! # Query State Machine
//!
//! A query runs one fetch in the background and publishes its progress:
//!
//! ```text
//! Idle ──start──▶ Loading ──▶ Success(data)
//!                         └─▶ Error(err)
//! ```
//!
//! A query is `Loading` when [`Query::start`] returns. The fetch runs on its own
//! task and may settle at any point after that, so a view reads whatever state the
//! query is in at render time. Several queries settle independently and a failure
//! in one does not touch another.
//!
//! Transport failures are retried `QueryConfig::retry` times with a fixed delay.
//! Not-found and invalid-input answers are final.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    pub retry: u32,
    pub retry_delay: Duration,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            retry: 3,
            retry_delay: Duration::from_secs(1),
        }
    }
}

impl QueryConfig {
    /// Fails on the first error. Tests use this so error states show up at once.
    pub fn no_retry() -> Self {
        Self {
            retry: 0,
            retry_delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub enum QueryState<T> {
    Idle,
    Loading,
    Success(T),
    Error(Arc<FetchError>),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, QueryState::Success(_) | QueryState::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            QueryState::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Handle to one keyed query. Cloning shares the same state.
#[derive(Debug, Clone)]
pub struct Query<T> {
    key: Arc<str>,
    state: watch::Receiver<QueryState<T>>,
}

impl<T> Query<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// A query that was never started.
    pub fn idle(key: &str) -> Self {
        let (_, state) = watch::channel(QueryState::Idle);
        Self {
            key: key.into(),
            state,
        }
    }

    /// Starts `fetch` on a new task. The query is `Loading` when this returns.
    pub fn start<F, Fut>(key: &str, config: QueryConfig, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let (sender, state) = watch::channel(QueryState::Loading);
        let key: Arc<str> = key.into();
        let task_key = key.clone();

        tokio::spawn(async move {
            let mut attempt = 0;
            let settled = loop {
                match fetch().await {
                    Ok(data) => break QueryState::Success(data),
                    Err(err) if err.is_transport() && attempt < config.retry => {
                        attempt += 1;
                        warn!(key = %task_key, attempt, error = %err, "Retrying query");
                        tokio::time::sleep(config.retry_delay).await;
                    }
                    Err(err) => break QueryState::Error(Arc::new(err)),
                }
            };
            debug!(key = %task_key, ok = settled.data().is_some(), "Query settled");
            sender.send_replace(settled);
        });

        Self { key, state }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> QueryState<T> {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Waits until the query succeeds or fails and returns that state.
    ///
    /// An idle query returns `Idle` immediately.
    pub async fn settled(&mut self) -> QueryState<T> {
        if let Ok(state) = self.state.wait_for(QueryState::is_settled).await {
            return state.clone();
        }
        self.state.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TransportError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn network_error() -> FetchError {
        TransportError::Network("Network Error".into()).into()
    }

    #[tokio::test]
    async fn test_started_query_is_loading_then_succeeds() {
        let mut query = Query::start("numbers", QueryConfig::no_retry(), || async {
            Ok::<_, FetchError>(vec![1, 2, 3])
        });
        assert!(query.is_loading());
        assert_eq!(query.key(), "numbers");

        let state = query.settled().await;
        assert_eq!(state.data(), Some(&vec![1, 2, 3]));
        assert!(!query.is_loading());
    }

    #[tokio::test]
    async fn test_transport_errors_are_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let config = QueryConfig {
            retry: 2,
            retry_delay: Duration::from_millis(1),
        };

        let mut query = Query::start("flaky", config, move || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(network_error())
                } else {
                    Ok("ok")
                }
            }
        });

        assert_eq!(query.settled().await.data(), Some(&"ok"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_not_found_is_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let mut query = Query::<()>::start("missing", QueryConfig::default(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err(FetchError::NotFound("Product".into())) }
        });

        let state = query.settled().await;
        assert!(matches!(state.error(), Some(FetchError::NotFound(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retries_give_up_with_the_last_error() {
        let config = QueryConfig {
            retry: 1,
            retry_delay: Duration::from_millis(1),
        };
        let mut query = Query::<()>::start("down", config, || async { Err(network_error()) });
        assert!(query.settled().await.error().is_some_and(FetchError::is_transport));
    }

    #[tokio::test]
    async fn test_independent_queries_settle_independently() {
        let mut failing =
            Query::<u8>::start("a", QueryConfig::no_retry(), || async { Err(network_error()) });
        let mut slow = Query::start("b", QueryConfig::no_retry(), || async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok::<_, FetchError>(7u8)
        });

        assert!(failing.settled().await.error().is_some());
        assert!(slow.is_loading());
        assert_eq!(slow.settled().await.data(), Some(&7));
    }

    #[tokio::test]
    async fn test_idle_query_stays_idle() {
        let mut query = Query::<u8>::idle("never");
        assert!(matches!(query.settled().await, QueryState::Idle));
    }
}
