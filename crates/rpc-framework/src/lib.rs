//! # RPC Framework
//!
//! Building blocks for small, independently deployable services that call each
//! other synchronously. A service is a request/response handler over its own
//! in-memory store; other services reach it only through a client.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Service Layer** ([`Service`]) - Your business logic, its call and reply types
//! 2. **Transport Layer** ([`Transport`]) - How calls travel: in-process channel, HTTP/JSON, or a mock
//! 3. **Interface Layer** ([`ServiceClient`], [`RemoteClient`]) - Type-safe calling side
//!
//! A service is written **once** against [`Service`]; the same implementation
//! can be run in-process behind a [`ServiceServer`] or as its own process
//! behind [`http::serve`]. Its callers don't know the difference.
//!
//! ## Core Abstractions
//!
//! ### [`Service`] - The Business Logic
//!
//! ```rust
//! use rpc_framework::{Operation, RecordStore, Record, Service, ServiceServer, Status};
//! use async_trait::async_trait;
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//!
//! // 1. Define the record
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Note {
//!     id: String,
//!     text: String,
//! }
//!
//! impl Record for Note {
//!     const KIND: &'static str = "Note";
//!     fn id(&self) -> &str { &self.id }
//! }
//!
//! // 2. Define the calls and replies
//! #[derive(Debug, Serialize, Deserialize)]
//! #[serde(tag = "operation", content = "payload")]
//! enum NoteCall {
//!     AddNote { text: String },
//!     GetNote { id: String },
//! }
//!
//! impl Operation for NoteCall {
//!     fn operation(&self) -> &'static str {
//!         match self {
//!             NoteCall::AddNote { .. } => "AddNote",
//!             NoteCall::GetNote { .. } => "GetNote",
//!         }
//!     }
//! }
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! enum NoteReply { Note(Note) }
//!
//! // 3. Implement the service
//! struct NoteService { notes: RecordStore<Note> }
//!
//! #[async_trait]
//! impl Service for NoteService {
//!     const NAME: &'static str = "NoteService";
//!     type Call = NoteCall;
//!     type Reply = NoteReply;
//!
//!     async fn handle(&self, call: NoteCall) -> Result<NoteReply, Status> {
//!         match call {
//!             NoteCall::AddNote { text } => {
//!                 let note = self.notes.insert_with(|id| Note { id, text }).await;
//!                 Ok(NoteReply::Note(note))
//!             }
//!             NoteCall::GetNote { id } => self
//!                 .notes
//!                 .get(&id)
//!                 .await
//!                 .map(NoteReply::Note)
//!                 .ok_or_else(|| Status::not_found("note not found")),
//!         }
//!     }
//! }
//!
//! // 4. Run it
//! #[tokio::main]
//! async fn main() {
//!     let (server, client) = ServiceServer::<NoteService>::new(10);
//!     let service = NoteService { notes: RecordStore::sequential("note") };
//!     tokio::spawn(server.run(Arc::new(service)));
//!
//!     let NoteReply::Note(note) = client
//!         .call(NoteCall::AddNote { text: "hello".into() })
//!         .await
//!         .unwrap();
//!     assert_eq!(note.id, "note_1");
//! }
//! ```
//!
//! ## Dependency Wiring
//!
//! [`ServiceServer::new`] hands out the client before the service exists, so
//! every client can be created first and then passed to the services that
//! depend on it:
//!
//! ```rust,ignore
//! let (identity_server, identity_client) = identity::new();
//! let (order_server, order_client) = order::new();
//!
//! tokio::spawn(identity_server.run(Arc::new(IdentityService::new())));
//! tokio::spawn(order_server.run(Arc::new(OrderService::new(identity_client))));
//! ```
//!
//! ## Errors
//!
//! Every failure crossing a service boundary is a [`Status`]: a [`Code`] plus a
//! message. Services keep their own `thiserror` enums internally and convert at
//! the edge.
//!
//! ## Concurrency Model
//!
//! - Each inbound call runs on its own Tokio task
//! - A service's store is a [`RecordStore`] guarded by a `RwLock`; ids are
//!   assigned under the write lock, so concurrent creates never collide
//! - No lock is held while a service waits on another service
//!
//! ## Testing
//!
//! [`mock::MockClient`] scripts a dependency's replies so one service can be
//! tested alone. See the [`mock`] module for the full API and usage patterns.

pub mod client;
pub mod client_trait;
pub mod error;
pub mod http;
pub mod message;
pub mod mock;
pub mod record;
pub mod server;
pub mod service;
pub mod store;
pub mod telemetry;

// Re-export core types for convenience
pub use client::{ChannelTransport, ServiceClient, Transport};
pub use client_trait::RemoteClient;
pub use error::{Code, Status};
pub use message::{Request, Response};
pub use record::Record;
pub use server::ServiceServer;
pub use service::{Operation, Service};
pub use store::{IdGenerator, RandomIds, RecordStore, SequentialIds};
