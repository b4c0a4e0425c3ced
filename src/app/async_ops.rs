//! Async operations for the TUI
//!
//! The fetch runs on the tokio runtime and reports back over a channel that
//! the sync TUI loop drains. Dropping the [`FetchHandle`] cancels it.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::api::{FetchError, PostSource};
use crate::models::Post;

/// Results sent back from the fetch task to the TUI
#[derive(Debug)]
pub enum AsyncResult {
    /// The latest-post request finished
    PostFetched(Result<Post, FetchError>),
}

/// Handle to an in-flight fetch
pub struct FetchHandle {
    /// Receive results from the task
    result_rx: mpsc::Receiver<AsyncResult>,
    cancel: CancellationToken,
}

impl FetchHandle {
    /// Non-blocking poll for a result
    pub fn try_recv(&mut self) -> Option<AsyncResult> {
        self.result_rx.try_recv().ok()
    }

    /// Wait for the result. `None` once the task is gone.
    pub async fn recv(&mut self) -> Option<AsyncResult> {
        self.result_rx.recv().await
    }

    /// Abort the request if it is still running
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the fetch has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Spawn the single latest-post fetch
///
/// Must be called from within a tokio runtime.
pub fn spawn_fetch<S: PostSource>(source: S) -> FetchHandle {
    let (result_tx, result_rx) = mpsc::channel::<AsyncResult>(1);
    let cancel = CancellationToken::new();

    let token = cancel.clone();
    tokio::spawn(async move {
        tokio::select! {
            () = token.cancelled() => {
                tracing::debug!("Latest post fetch cancelled");
            }
            outcome = source.latest_post() => {
                if result_tx.send(AsyncResult::PostFetched(outcome)).await.is_err() {
                    tracing::debug!("View gone, dropping fetch result");
                }
            }
        }
    });

    FetchHandle { result_rx, cancel }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::pending;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Never answers; flags when its future starts and when it is dropped
    #[derive(Default)]
    struct Hanging {
        started: Arc<AtomicBool>,
        dropped: Arc<AtomicBool>,
    }

    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    impl PostSource for Hanging {
        async fn latest_post(&self) -> Result<Post, FetchError> {
            let _flag = DropFlag(Arc::clone(&self.dropped));
            self.started.store(true, Ordering::SeqCst);
            pending().await
        }
    }

    struct Instant(&'static str);

    impl PostSource for Instant {
        async fn latest_post(&self) -> Result<Post, FetchError> {
            Ok(Post::new(self.0))
        }
    }

    #[tokio::test]
    async fn test_result_is_delivered() {
        let mut handle = spawn_fetch(Instant("hi"));
        match handle.recv().await {
            Some(AsyncResult::PostFetched(Ok(post))) => assert_eq!(post.full_text, "hi"),
            other => panic!("unexpected {other:?}"),
        }
    }

    async fn wait_for(flag: &AtomicBool) -> bool {
        for _ in 0..200 {
            if flag.load(Ordering::SeqCst) {
                return true;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        false
    }

    #[tokio::test]
    async fn test_drop_cancels_request() {
        let source = Hanging::default();
        let started = Arc::clone(&source.started);
        let dropped = Arc::clone(&source.dropped);

        let handle = spawn_fetch(source);
        assert!(wait_for(&started).await, "request never started");
        assert!(!dropped.load(Ordering::SeqCst));

        drop(handle);
        assert!(wait_for(&dropped).await, "in-flight request was not dropped");
    }

    #[tokio::test]
    async fn test_pending_while_in_flight() {
        let source = Hanging::default();
        let started = Arc::clone(&source.started);
        let mut handle = spawn_fetch(source);
        assert!(wait_for(&started).await, "request never started");

        assert!(handle.try_recv().is_none());
        let mut recv = tokio_test::task::spawn(handle.recv());
        tokio_test::assert_pending!(recv.poll());
    }

    #[tokio::test]
    async fn test_cancelled_fetch_yields_nothing() {
        let mut handle = spawn_fetch(Hanging::default());
        handle.cancel();
        assert!(handle.is_cancelled());
        assert!(handle.recv().await.is_none());
    }
}
