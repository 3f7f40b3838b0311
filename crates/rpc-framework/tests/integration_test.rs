use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request as HttpRequest, StatusCode};
use rpc_framework::{
    http, Code, Operation, Record, RecordStore, Service, ServiceClient, ServiceServer, Status,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceExt;

// --- Test Service ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Counter {
    id: String,
    name: String,
    value: i64,
}

impl Record for Counter {
    const KIND: &'static str = "Counter";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "operation", content = "payload")]
enum CounterCall {
    CreateCounter { name: String },
    Increment { id: String, by: i64 },
    GetCounter { id: String },
}

impl Operation for CounterCall {
    fn operation(&self) -> &'static str {
        match self {
            CounterCall::CreateCounter { .. } => "CreateCounter",
            CounterCall::Increment { .. } => "Increment",
            CounterCall::GetCounter { .. } => "GetCounter",
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
enum CounterReply {
    Counter(Counter),
}

struct CounterService {
    counters: RecordStore<Counter>,
}

impl CounterService {
    fn new() -> Self {
        Self {
            counters: RecordStore::sequential("counter"),
        }
    }
}

#[async_trait]
impl Service for CounterService {
    const NAME: &'static str = "CounterService";
    type Call = CounterCall;
    type Reply = CounterReply;

    async fn handle(&self, call: CounterCall) -> Result<CounterReply, Status> {
        let counter = match call {
            CounterCall::CreateCounter { name } => {
                self.counters
                    .try_insert_with(|id, mut existing| {
                        if existing.any(|c| c.name == name) {
                            return Err(Status::already_exists("counter name taken"));
                        }
                        Ok(Counter { id, name, value: 0 })
                    })
                    .await?
            }
            CounterCall::Increment { id, by } => {
                if by <= 0 {
                    return Err(Status::failed_precondition("increment must be positive"));
                }
                self.counters
                    .update(&id, |c| c.value += by)
                    .await
                    .ok_or_else(|| Status::not_found("counter not found"))?
            }
            CounterCall::GetCounter { id } => self
                .counters
                .get(&id)
                .await
                .ok_or_else(|| Status::not_found("counter not found"))?,
        };
        Ok(CounterReply::Counter(counter))
    }
}

fn counter(reply: CounterReply) -> Counter {
    let CounterReply::Counter(counter) = reply;
    counter
}

async fn spawn_http_server() -> (String, oneshot::Sender<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let (stop, stopped) = oneshot::channel::<()>();
    tokio::spawn(http::serve(
        Arc::new(CounterService::new()),
        listener,
        async move {
            let _ = stopped.await;
        },
    ));
    (addr, stop)
}

// --- Tests ---

#[tokio::test]
async fn test_channel_transport_lifecycle() {
    let (server, client) = ServiceServer::<CounterService>::new(10);
    let handle = tokio::spawn(server.run(Arc::new(CounterService::new())));

    let created = counter(
        client
            .call(CounterCall::CreateCounter {
                name: "visits".into(),
            })
            .await
            .unwrap(),
    );
    assert_eq!(created.id, "counter_1");
    assert_eq!(created.value, 0);

    let bumped = counter(
        client
            .call(CounterCall::Increment {
                id: created.id.clone(),
                by: 3,
            })
            .await
            .unwrap(),
    );
    assert_eq!(bumped.value, 3);

    let fetched = counter(
        client
            .call(CounterCall::GetCounter { id: created.id })
            .await
            .unwrap(),
    );
    assert_eq!(fetched, bumped);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_channel_transport_errors() {
    let (server, client) = ServiceServer::<CounterService>::new(10);
    tokio::spawn(server.run(Arc::new(CounterService::new())));

    client
        .call(CounterCall::CreateCounter { name: "a".into() })
        .await
        .unwrap();

    let duplicate = client
        .call(CounterCall::CreateCounter { name: "a".into() })
        .await
        .unwrap_err();
    assert_eq!(duplicate.code(), Code::AlreadyExists);

    let missing = client
        .call(CounterCall::GetCounter {
            id: "counter_9".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(missing.code(), Code::NotFound);

    let rejected = client
        .call(CounterCall::Increment {
            id: "counter_1".into(),
            by: 0,
        })
        .await
        .unwrap_err();
    assert_eq!(rejected.code(), Code::FailedPrecondition);
}

#[tokio::test]
async fn test_stopped_server_is_unavailable() {
    let (server, client) = ServiceServer::<CounterService>::new(10);
    drop(server);

    let err = client
        .call(CounterCall::GetCounter {
            id: "counter_1".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::Unavailable);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let (server, client) = ServiceServer::<CounterService>::new(100);
    tokio::spawn(server.run(Arc::new(CounterService::new())));

    let mut handles = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .call(CounterCall::CreateCounter {
                    name: format!("c{i}"),
                })
                .await
                .map(counter)
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn test_router_rpc_and_health() {
    let app = http::router(Arc::new(CounterService::new()));

    let response = app
        .clone()
        .oneshot(
            HttpRequest::builder()
                .method("POST")
                .uri("/rpc")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"operation":"CreateCounter","payload":{"name":"hits"}}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let reply: CounterReply = serde_json::from_slice(&body).unwrap();
    assert_eq!(counter(reply).id, "counter_1");

    let response = app
        .clone()
        .oneshot(
            HttpRequest::builder()
                .method("POST")
                .uri("/rpc")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"operation":"GetCounter","payload":{"id":"counter_7"}}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "NOT_FOUND");

    let response = app
        .oneshot(
            HttpRequest::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "CounterService");
}

#[tokio::test]
async fn test_http_transport_round_trip() {
    let (addr, stop) = spawn_http_server().await;
    let client = ServiceClient::<CounterService>::http(&addr);

    let created = counter(
        client
            .call(CounterCall::CreateCounter {
                name: "remote".into(),
            })
            .await
            .unwrap(),
    );
    let bumped = counter(
        client
            .call(CounterCall::Increment {
                id: created.id.clone(),
                by: 5,
            })
            .await
            .unwrap(),
    );
    assert_eq!(bumped.value, 5);

    let err = client
        .call(CounterCall::CreateCounter {
            name: "remote".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        Status::already_exists("counter name taken"),
        "error status and message survive the wire"
    );

    let _ = stop.send(());
}

#[tokio::test]
async fn test_http_transport_unreachable_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    drop(listener);

    let client = ServiceClient::<CounterService>::http(&addr);
    let err = client
        .call(CounterCall::GetCounter {
            id: "counter_1".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::Unavailable);
}
