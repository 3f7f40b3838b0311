//! # Mock Framework & Testing Guide
//!
//! `MockClient<S>` hands out a real [`ServiceClient<S>`] whose transport
//! answers from a script instead of a running service. It lets you test a
//! service's saga logic against dependencies that succeed, fail, or become
//! unreachable on exactly the call you choose.
//!
//! ## When to use Mocks vs Real Services
//!
//! | Feature | MockClient | Real Service |
//! |---------|------------|--------------|
//! | **State** | None (scripted replies) | Real store |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//! | **Use Case** | One service, dependencies faked | Whole workflow |
//!
//! ## Pattern 1: Scripted dependency
//!
//! ```rust,ignore
//! let mut identity = MockClient::<IdentityService>::new();
//! identity.expect("GetUser").return_ok(IdentityReply::User(alice));
//!
//! let orders = OrderService::new(IdentityClient::new(identity.client()));
//! orders.create_order(params).await?;
//!
//! identity.verify(); // every expectation was consumed
//! ```
//!
//! Expectations are consumed in order. A call that does not match the next
//! expectation's operation, or arrives when none are left, panics the test.
//!
//! ## Pattern 2: Inspecting the exact request
//!
//! [`create_mock_client`] returns a client plus the raw request receiver, so a
//! test can assert on the fields a typed client puts on the wire and answer
//! by hand:
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<OrderService>(10);
//! let task = tokio::spawn(async move { OrderClient::new(client).get_order("order_1").await });
//! let (call, responder) = expect_request(&mut receiver).await.unwrap();
//! assert!(matches!(call, OrderCall::GetOrder { .. }));
//! responder.send(Ok(OrderReply::Order(order))).unwrap();
//! ```

use crate::client::{ServiceClient, Transport};
use crate::error::Status;
use crate::message::{Request, Response};
use crate::service::{Operation, Service};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted reply for one operation.
struct Expectation<S: Service> {
    operation: &'static str,
    response: Result<S::Reply, Status>,
}

struct Script<S: Service> {
    expectations: VecDeque<Expectation<S>>,
    received: Vec<&'static str>,
}

/// A mock with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<OrderService>::new();
/// mock.expect("GetOrder").return_ok(OrderReply::Order(order));
/// mock.expect("UpdateOrder").return_err(Status::unavailable("order service down"));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<S: Service> {
    script: Arc<Mutex<Script<S>>>,
}

impl<S: Service> MockClient<S> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                expectations: VecDeque::new(),
                received: Vec::new(),
            })),
        }
    }

    /// Returns a client whose calls are answered by this mock.
    pub fn client(&self) -> ServiceClient<S> {
        ServiceClient::new(Arc::new(MockTransport {
            script: self.script.clone(),
        }))
    }

    /// Expects the next call to be `operation`.
    pub fn expect(&mut self, operation: &'static str) -> ExpectationBuilder<S> {
        ExpectationBuilder {
            operation,
            script: self.script.clone(),
        }
    }

    /// Operation names received so far, in arrival order.
    pub fn received(&self) -> Vec<&'static str> {
        self.script.lock().unwrap().received.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let script = self.script.lock().unwrap();
        if !script.expectations.is_empty() {
            let remaining: Vec<_> = script.expectations.iter().map(|e| e.operation).collect();
            panic!("Not all expectations were met. Remaining: {remaining:?}");
        }
    }
}

impl<S: Service> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder returned by [`MockClient::expect`].
pub struct ExpectationBuilder<S: Service> {
    operation: &'static str,
    script: Arc<Mutex<Script<S>>>,
}

impl<S: Service> ExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, reply: S::Reply) {
        self.push(Ok(reply));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, status: Status) {
        self.push(Err(status));
    }

    fn push(self, response: Result<S::Reply, Status>) {
        self.script.lock().unwrap().expectations.push_back(Expectation {
            operation: self.operation,
            response,
        });
    }
}

struct MockTransport<S: Service> {
    script: Arc<Mutex<Script<S>>>,
}

#[async_trait]
impl<S: Service> Transport<S> for MockTransport<S> {
    async fn send(&self, call: S::Call) -> Result<S::Reply, Status> {
        let operation = call.operation();
        let mut script = self.script.lock().unwrap();
        script.received.push(operation);
        match script.expectations.pop_front() {
            Some(expectation) if expectation.operation == operation => expectation.response,
            Some(expectation) => panic!(
                "{}: expected {} but got {operation} ({call:?})",
                S::NAME,
                expectation.operation
            ),
            None => panic!("{}: unexpected call {operation} ({call:?})", S::NAME),
        }
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests; the test takes them off `receiver` (see
/// [`expect_request`]) and replies through the returned responder.
pub fn create_mock_client<S: Service>(
    buffer_size: usize,
) -> (ServiceClient<S>, mpsc::Receiver<Request<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ServiceClient::local(sender), receiver)
}

/// Waits for the next request and splits it into the call and its responder.
pub async fn expect_request<S: Service>(
    receiver: &mut mpsc::Receiver<Request<S>>,
) -> Option<(S::Call, Response<S::Reply>)> {
    receiver
        .recv()
        .await
        .map(|Request { call, respond_to }| (call, respond_to))
}
