//! In-process document store.
//!
//! Mirrors the surface of the hosted document database the portal talks to:
//! session-scoped collections of loosely typed documents, field-level merge
//! updates, and live queries that push a fresh snapshot after every change.
//! Documents live in memory for the lifetime of the process.

pub mod activity_logs;
pub mod decode;
pub mod financials;
pub mod tasks;

use portal_core::ValidationError;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::debug;

/// Buffer of pending change notifications per subscriber
const CHANGE_CAPACITY: usize = 256;

pub type Fields = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Financials,
    Tasks,
    ActivityLogs,
}

impl Collection {
    pub fn segment(&self) -> &'static str {
        match self {
            Self::Financials => "financials",
            Self::Tasks => "tasks",
            Self::ActivityLogs => "activityLogs",
        }
    }
}

/// Full path of a collection, `artifacts/{app}/users/{user}/{collection}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionPath(String);

impl CollectionPath {
    pub fn new(app_id: &str, user_id: &str, collection: Collection) -> Self {
        Self(format!(
            "artifacts/{}/users/{}/{}",
            app_id,
            user_id,
            collection.segment()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document '{id}' not found in {path}")]
    NotFound { path: String, id: String },

    #[error("document '{id}' is malformed: {reason}")]
    Malformed { id: String, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("document store lock poisoned")]
    Poisoned,
}

pub struct DocumentStore {
    collections: RwLock<HashMap<CollectionPath, BTreeMap<String, Fields>>>,
    changes: broadcast::Sender<CollectionPath>,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CAPACITY);
        Self {
            collections: RwLock::new(HashMap::new()),
            changes,
        }
    }

    /// Stores a new document and returns its generated id
    pub fn add(&self, path: &CollectionPath, fields: Fields) -> Result<String, StoreError> {
        let id = uuid::Uuid::new_v4().to_string();
        {
            let mut collections = self.collections.write().map_err(|_| StoreError::Poisoned)?;
            collections
                .entry(path.clone())
                .or_default()
                .insert(id.clone(), fields);
        }

        debug!("Added document {} to {}", id, path);
        self.notify(path);
        Ok(id)
    }

    /// Merges `fields` into an existing document; other fields are kept
    pub fn update(&self, path: &CollectionPath, id: &str, fields: Fields) -> Result<(), StoreError> {
        {
            let mut collections = self.collections.write().map_err(|_| StoreError::Poisoned)?;
            let existing = collections
                .get_mut(path)
                .and_then(|docs| docs.get_mut(id))
                .ok_or_else(|| not_found(path, id))?;
            for (key, value) in fields {
                existing.insert(key, value);
            }
        }

        debug!("Updated document {} in {}", id, path);
        self.notify(path);
        Ok(())
    }

    /// Read-modify-write of one document under a single write lock.
    /// Nothing is written or announced when `change` fails.
    pub fn modify<F>(&self, path: &CollectionPath, id: &str, change: F) -> Result<Document, StoreError>
    where
        F: FnOnce(&Document) -> Result<Fields, StoreError>,
    {
        let document = {
            let mut collections = self.collections.write().map_err(|_| StoreError::Poisoned)?;
            let existing = collections
                .get_mut(path)
                .and_then(|docs| docs.get_mut(id))
                .ok_or_else(|| not_found(path, id))?;

            let current = Document {
                id: id.to_string(),
                fields: existing.clone(),
            };
            for (key, value) in change(&current)? {
                existing.insert(key, value);
            }
            Document {
                id: id.to_string(),
                fields: existing.clone(),
            }
        };

        debug!("Modified document {} in {}", id, path);
        self.notify(path);
        Ok(document)
    }

    pub fn delete(&self, path: &CollectionPath, id: &str) -> Result<(), StoreError> {
        {
            let mut collections = self.collections.write().map_err(|_| StoreError::Poisoned)?;
            collections
                .get_mut(path)
                .and_then(|docs| docs.remove(id))
                .ok_or_else(|| not_found(path, id))?;
        }

        debug!("Deleted document {} from {}", id, path);
        self.notify(path);
        Ok(())
    }

    pub fn get(&self, path: &CollectionPath, id: &str) -> Result<Document, StoreError> {
        let collections = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        collections
            .get(path)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document {
                id: id.to_string(),
                fields: fields.clone(),
            })
            .ok_or_else(|| not_found(path, id))
    }

    /// Current contents of a collection. An unknown path is an empty collection.
    pub fn snapshot(&self, path: &CollectionPath) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        Ok(collections
            .get(path)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document {
                        id: id.clone(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    pub fn collection_count(&self) -> Result<usize, StoreError> {
        let collections = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        Ok(collections.len())
    }

    /// Watch several collections for changes
    pub fn watch(&self, paths: Vec<CollectionPath>) -> ChangeWatch {
        ChangeWatch {
            paths,
            receiver: self.changes.subscribe(),
            primed: false,
        }
    }

    /// Live query over one collection. Dropping it unsubscribes.
    pub fn subscribe(self: &Arc<Self>, path: CollectionPath) -> LiveQuery {
        LiveQuery {
            store: Arc::clone(self),
            watch: self.watch(vec![path.clone()]),
            path,
        }
    }

    fn notify(&self, path: &CollectionPath) {
        // An error only means nobody is listening
        let _ = self.changes.send(path.clone());
    }
}

fn not_found(path: &CollectionPath, id: &str) -> StoreError {
    StoreError::NotFound {
        path: path.to_string(),
        id: id.to_string(),
    }
}

/// Change notifications for a set of collections
pub struct ChangeWatch {
    paths: Vec<CollectionPath>,
    receiver: broadcast::Receiver<CollectionPath>,
    primed: bool,
}

impl ChangeWatch {
    /// Resolves once the watched collections may have changed since the
    /// previous call. The first call resolves immediately so the caller can
    /// read the initial state. Returns `false` once the store is gone.
    pub async fn changed(&mut self) -> bool {
        if !self.primed {
            self.primed = true;
            return true;
        }

        loop {
            match self.receiver.recv().await {
                Ok(path) if self.paths.contains(&path) => return true,
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    // Snapshots carry full state, so re-reading covers whatever was skipped
                    debug!("Change watch lagged by {} notifications", skipped);
                    return true;
                }
                Err(RecvError::Closed) => return false,
            }
        }
    }
}

/// Sequence of snapshots of one collection: the current contents first,
/// then the new contents after each change.
pub struct LiveQuery {
    store: Arc<DocumentStore>,
    path: CollectionPath,
    watch: ChangeWatch,
}

impl LiveQuery {
    pub fn path(&self) -> &CollectionPath {
        &self.path
    }

    pub async fn next_snapshot(&mut self) -> Option<Result<Vec<Document>, StoreError>> {
        if !self.watch.changed().await {
            return None;
        }
        Some(self.store.snapshot(&self.path))
    }
}

/// Decodes every document, skipping the ones that do not decode
pub fn decode_all<T>(
    docs: &[Document],
    decode: impl Fn(&Document) -> Result<T, StoreError>,
) -> Vec<T> {
    docs.iter()
        .filter_map(|doc| match decode(doc) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Skipping document {}: {}", doc.id, e);
                None
            }
        })
        .collect()
}
