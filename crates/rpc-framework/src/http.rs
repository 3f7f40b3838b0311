//! # HTTP/JSON Transport
//!
//! Lets a service run as its own process. The server side is an axum router,
//! the client side a reqwest-backed [`Transport`].
//!
//! ## Routes
//!
//! - `POST /rpc`: body is the service's `Call` as JSON, e.g.
//!   `{"operation": "GetOrder", "payload": {"id": "order_1"}}`. A success is
//!   HTTP 200 with the `Reply` as JSON; a failure is the HTTP status for its
//!   [`Code`] with the [`Status`] as JSON.
//! - `GET /health`: `{"status": "ok", "service": "<Name>"}`.
//!
//! No request timeout is configured on the client.

use crate::client::Transport;
use crate::error::{Code, Status};
use crate::server::serve_call;
use crate::service::{Operation, Service};
use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, info_span, Instrument};

/// Build the router that serves `service`.
pub fn router<S: Service>(service: Arc<S>) -> Router {
    Router::new()
        .route("/rpc", post(rpc_handler::<S>))
        .route("/health", get(health_handler::<S>))
        .with_state(service)
}

/// Serve `service` on `listener` until `shutdown` resolves.
pub async fn serve<S: Service>(
    service: Arc<S>,
    listener: TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(service = S::NAME, %addr, "Listening");
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn rpc_handler<S: Service>(
    State(service): State<Arc<S>>,
    Json(call): Json<S::Call>,
) -> Response {
    let span = info_span!("rpc", service = S::NAME, operation = call.operation());
    match serve_call(service.as_ref(), call).instrument(span).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(status) => status.into_response(),
    }
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    service: &'static str,
}

async fn health_handler<S: Service>(State(_service): State<Arc<S>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        service: S::NAME,
    })
}

impl IntoResponse for Status {
    fn into_response(self) -> Response {
        let http_status = StatusCode::from_u16(self.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (http_status, Json(self)).into_response()
    }
}

/// Normalizes `host:port` into `http://host:port`; full URLs pass through.
pub fn base_url(addr: &str) -> String {
    let addr = addr.trim().trim_end_matches('/');
    if addr.starts_with("http://") || addr.starts_with("https://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    }
}

/// Client half of the HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(addr: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/rpc", base_url(addr)),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl<S: Service> Transport<S> for HttpTransport {
    async fn send(&self, call: S::Call) -> Result<S::Reply, Status> {
        let operation = call.operation();
        let request = self.client.post(&self.endpoint).json(&call);
        let response = request
            .send()
            .await
            .map_err(|e| Status::unavailable(format!("{} {operation}: {e}", S::NAME)))?;

        let http_status = response.status();
        if http_status.is_success() {
            return response.json::<S::Reply>().await.map_err(|e| {
                Status::internal(format!("undecodable reply to {operation}: {e}"))
            });
        }

        match response.json::<Status>().await {
            Ok(status) => Err(status),
            Err(_) => Err(Status::new(
                Code::from_http_status(http_status.as_u16()),
                format!("{operation} failed with HTTP {http_status}"),
            )),
        }
    }
}
