use chrono::{DateTime, SecondsFormat, Utc};
use portal_core::tasks::validate_task_text;
use serde_json::Value;
use shared_types::{CreateTaskRequest, Task, UpdateTaskRequest};

use super::{decode, decode_all, Collection, DocumentStore, Fields, StoreError};
use crate::session::Session;

/// Tasks in store order; ranking is up to the caller
pub fn list_tasks(store: &DocumentStore, session: &Session) -> Result<Vec<Task>, StoreError> {
    let docs = store.snapshot(&session.collection(Collection::Tasks))?;
    Ok(decode_all(&docs, decode::task))
}

pub fn insert_task(
    store: &DocumentStore,
    session: &Session,
    request: &CreateTaskRequest,
) -> Result<Task, StoreError> {
    let text = validate_task_text(&request.text)?;
    let path = session.collection(Collection::Tasks);

    let mut fields = Fields::new();
    fields.insert("text".into(), text.into());
    fields.insert("completed".into(), false.into());
    fields.insert("createdAt".into(), timestamp(Utc::now()));
    fields.insert(
        "priority".into(),
        request.priority.unwrap_or_default().as_str().into(),
    );

    let id = store.add(&path, fields)?;
    decode::task(&store.get(&path, &id)?)
}

/// `createdAt` is never part of an update
pub fn update_task(
    store: &DocumentStore,
    session: &Session,
    id: &str,
    request: &UpdateTaskRequest,
) -> Result<Task, StoreError> {
    let path = session.collection(Collection::Tasks);
    let mut fields = Fields::new();

    if let Some(text) = &request.text {
        fields.insert("text".into(), validate_task_text(text)?.into());
    }
    if let Some(completed) = request.completed {
        fields.insert("completed".into(), Value::Bool(completed));
    }
    if let Some(priority) = request.priority {
        fields.insert("priority".into(), priority.as_str().into());
    }

    store.update(&path, id, fields)?;
    decode::task(&store.get(&path, id)?)
}

/// Flips `completed` under one store lock
pub fn toggle_task(store: &DocumentStore, session: &Session, id: &str) -> Result<Task, StoreError> {
    let path = session.collection(Collection::Tasks);
    let doc = store.modify(&path, id, |doc| {
        let current = decode::task(doc)?;
        let mut fields = Fields::new();
        fields.insert("completed".into(), Value::Bool(!current.completed));
        Ok(fields)
    })?;
    decode::task(&doc)
}

/// RFC 3339 at full clock precision
fn timestamp(at: DateTime<Utc>) -> Value {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true).into()
}

pub fn delete_task(store: &DocumentStore, session: &Session, id: &str) -> Result<(), StoreError> {
    store.delete(&session.collection(Collection::Tasks), id)
}
