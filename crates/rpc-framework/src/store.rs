//! # Record Store
//!
//! Each service owns exactly one `RecordStore`: a map from record id to record,
//! guarded by a single read/write lock.
//!
//! - Reads (`get`, `find`, `filter`, `len`) take the shared lock.
//! - Writes (`insert_with`, `try_insert_with`, `update`) take the exclusive lock
//!   for the entire read-modify-write, **including id generation**, so two
//!   concurrent inserts can never observe the same record count.
//!
//! The store is append-only: there is no delete. Outbound calls to other
//! services must never be made from inside the closures passed here, since
//! they run with the write lock held.

use crate::record::Record;
use std::collections::hash_map::{HashMap, Values};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Produces the id for a record about to be inserted.
///
/// Called with the store's write lock held. `len` is the number of records
/// in the store at that instant. Implementations must return an id that is
/// unique among the ids already stored.
pub trait IdGenerator: Send + Sync + 'static {
    fn next_id(&self, len: usize) -> String;
}

/// `<prefix>_<len + 1>` ids: `order_1`, `order_2`, ...
///
/// Unique only because records are never deleted from the store.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: &'static str,
}

impl SequentialIds {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, len: usize) -> String {
        format!("{}_{}", self.prefix, len + 1)
    }
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self, _len: usize) -> String {
        Uuid::new_v4().to_string()
    }
}

/// In-memory, lock-guarded map from id to record.
pub struct RecordStore<T: Record> {
    records: RwLock<HashMap<String, T>>,
    ids: Box<dyn IdGenerator>,
}

impl<T: Record> RecordStore<T> {
    pub fn new(ids: impl IdGenerator) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            ids: Box::new(ids),
        }
    }

    /// Store whose ids are `<prefix>_<n>`.
    pub fn sequential(prefix: &'static str) -> Self {
        Self::new(SequentialIds::new(prefix))
    }

    /// Store whose ids are random UUIDs.
    pub fn random() -> Self {
        Self::new(RandomIds)
    }

    pub async fn get(&self, id: &str) -> Option<T> {
        let record = self.records.read().await.get(id).cloned();
        debug!(entity_type = T::KIND, %id, found = record.is_some(), "Get");
        record
    }

    /// First record matching `predicate`, in store iteration order.
    pub async fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.records
            .read()
            .await
            .values()
            .find(|record| predicate(record))
            .cloned()
    }

    /// All records matching `predicate`, in store iteration order.
    pub async fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records
            .read()
            .await
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Generates an id, builds the record from it and inserts it, all under
    /// one write lock. Returns a copy of the stored record.
    pub async fn insert_with(&self, build: impl FnOnce(String) -> T) -> T {
        let inserted: Result<T, std::convert::Infallible> =
            self.try_insert_with(|id, _| Ok(build(id))).await;
        match inserted {
            Ok(record) => record,
            Err(never) => match never {},
        }
    }

    /// Like [`insert_with`](Self::insert_with), but `build` also sees the
    /// records already stored and may reject the insert (e.g. a uniqueness
    /// check). Nothing is written when `build` fails.
    pub async fn try_insert_with<E>(
        &self,
        build: impl FnOnce(String, Values<'_, String, T>) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut records = self.records.write().await;
        let id = self.ids.next_id(records.len());
        let record = build(id.clone(), records.values())?;
        records.insert(id.clone(), record.clone());
        info!(entity_type = T::KIND, %id, size = records.len(), "Created");
        Ok(record)
    }

    /// Applies `apply` to the stored record in place. Returns the updated
    /// copy, or `None` if `id` is absent.
    pub async fn update(&self, id: &str, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut records = self.records.write().await;
        let record = records.get_mut(id)?;
        apply(record);
        info!(entity_type = T::KIND, %id, "Updated");
        Some(record.clone())
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::random()
    }
}
