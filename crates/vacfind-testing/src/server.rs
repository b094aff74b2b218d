//! A local stand-in for the `/cities` lookup service.
//!
//! The server runs on its own thread with its own runtime, so both async tests
//! and CLI subprocess tests can talk to it.

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

/// What the mock answers to every `/cities` request
#[derive(Debug, Clone)]
pub enum MockReply {
    Json(String),
    Status(u16),
    /// Answer with the body after a delay
    Delayed(Duration, String),
}

struct ServerState {
    reply: MockReply,
    queries: Mutex<Vec<HashMap<String, String>>>,
}

pub struct MockApiServer {
    addr: SocketAddr,
    state: Arc<ServerState>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockApiServer {
    pub fn start(reply: MockReply) -> Result<Self> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")
            .context("Failed to bind mock API listener")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let state = Arc::new(ServerState {
            reply,
            queries: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/cities", get(cities))
            .with_state(Arc::clone(&state));

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build mock API runtime")?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        std::thread::spawn(move || {
            runtime.block_on(async move {
                let Ok(listener) = tokio::net::TcpListener::from_std(listener) else {
                    return;
                };
                let _ = axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await;
            });
        });

        Ok(Self {
            addr,
            state,
            shutdown: Some(shutdown_tx),
        })
    }

    pub fn json(body: &str) -> Result<Self> {
        Self::start(MockReply::Json(body.to_string()))
    }

    /// Base URL without the `/cities` route, as a user would configure it
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn endpoint(&self) -> String {
        format!("{}/cities", self.base_url())
    }

    /// Query strings received so far, one map per request
    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.state
            .queries
            .lock()
            .expect("queries lock poisoned")
            .clone()
    }
}

impl Drop for MockApiServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

async fn cities(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state
        .queries
        .lock()
        .expect("queries lock poisoned")
        .push(params);

    match &state.reply {
        MockReply::Json(body) => json_body(body.clone()),
        MockReply::Status(code) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        MockReply::Delayed(delay, body) => {
            tokio::time::sleep(*delay).await;
            json_body(body.clone())
        }
    }
}

fn json_body(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_query_and_replies() {
        let server = MockApiServer::json("{}").unwrap();
        let body = reqwest::get(format!("{}?month=July&minTemp=10", server.endpoint()))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(body, "{}");
        let queries = server.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].get("month").map(String::as_str), Some("July"));
    }

    #[tokio::test]
    async fn test_mock_status_reply() {
        let server = MockApiServer::start(MockReply::Status(503)).unwrap();
        let status = reqwest::get(server.endpoint()).await.unwrap().status();
        assert_eq!(status.as_u16(), 503);
    }
}
