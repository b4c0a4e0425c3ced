//! Mock cross-poster backend for integration tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::COOKIE},
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::sync::oneshot;

use crossperch::Config;

/// Cookie the mock backend accepts as a signed-in session
pub const VALID_SESSION: &str = "session=valid";

pub struct MockServer {
    pub port: u16,
    hits: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockServer {
    pub async fn start() -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/latest_tweet", get(handle_latest))
            .route("/garbage", get(handle_garbage))
            .route("/loose", get(handle_loose))
            .with_state(Arc::clone(&hits));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    rx.await.ok();
                })
                .await
                .unwrap();
        });

        MockServer {
            port,
            hits,
            shutdown_tx: Some(tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Requests served so far, across all routes
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Config pointing at this server
    pub fn config(&self, session_cookie: Option<&str>) -> Config {
        Config {
            backend_url: self.base_url(),
            session_cookie: session_cookie.map(String::from),
            request_timeout_secs: 5,
            ..Config::default()
        }
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Config pointing at a port nothing listens on
pub async fn unreachable_config() -> Config {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    Config {
        backend_url: format!("http://127.0.0.1:{port}"),
        request_timeout_secs: 5,
        ..Config::default()
    }
}

async fn handle_latest(State(hits): State<Arc<AtomicUsize>>, headers: HeaderMap) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);

    let signed_in = headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.split("; ").any(|c| c == VALID_SESSION));

    if signed_in {
        Json(serde_json::json!({
            "id_str": "1850000000000000000",
            "created_at": "Wed Oct 10 20:19:24 +0000 2018",
            "full_text": "hello",
            "user": {"screen_name": "crossposter", "name": "Cross Poster"}
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"error": "Not authenticated"})),
        )
            .into_response()
    }
}

async fn handle_garbage(State(hits): State<Arc<AtomicUsize>>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    (StatusCode::OK, "<html>not a tweet</html>").into_response()
}

/// A 200 whose extras are not in the v1.1 shape
async fn handle_loose(State(hits): State<Arc<AtomicUsize>>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(serde_json::json!({
        "id_str": 1850000000000000000u64,
        "created_at": 1700000000,
        "full_text": "hello",
        "text": "hello",
        "user": {"username": "crossposter", "id": 42}
    }))
    .into_response()
}
