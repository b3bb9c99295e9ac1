use chrono::{Local, NaiveDate};
use portal_core::activity_log::validate_entry;
use shared_types::{ActivityLogEntry, CreateActivityLogRequest, UpdateActivityLogRequest};

use super::{decode, decode_all, Collection, DocumentStore, Fields, StoreError};
use crate::session::Session;

pub fn list_activity_logs(
    store: &DocumentStore,
    session: &Session,
) -> Result<Vec<ActivityLogEntry>, StoreError> {
    let docs = store.snapshot(&session.collection(Collection::ActivityLogs))?;
    Ok(decode_all(&docs, decode::activity_log))
}

pub fn insert_activity_log(
    store: &DocumentStore,
    session: &Session,
    request: &CreateActivityLogRequest,
) -> Result<ActivityLogEntry, StoreError> {
    validate_entry(&request.title, &request.details)?;
    let path = session.collection(Collection::ActivityLogs);
    let date = request.date.unwrap_or_else(|| Local::now().date_naive());

    let mut fields = Fields::new();
    fields.insert("title".into(), request.title.trim().into());
    fields.insert("project".into(), request.project.trim().into());
    fields.insert("responsible".into(), request.responsible.trim().into());
    fields.insert("timeSpent".into(), request.time_spent.trim().into());
    fields.insert("details".into(), request.details.clone().into());
    fields.insert("date".into(), format_date(date).into());

    let id = store.add(&path, fields)?;
    decode::activity_log(&store.get(&path, &id)?)
}

/// The entry as it would read after the update must still pass validation
pub fn update_activity_log(
    store: &DocumentStore,
    session: &Session,
    id: &str,
    request: &UpdateActivityLogRequest,
) -> Result<ActivityLogEntry, StoreError> {
    let path = session.collection(Collection::ActivityLogs);
    let current = decode::activity_log(&store.get(&path, id)?)?;

    let title = request.title.as_deref().unwrap_or(&current.title);
    let details = request.details.as_deref().unwrap_or(&current.details);
    validate_entry(title, details)?;

    let mut fields = Fields::new();
    if let Some(title) = &request.title {
        fields.insert("title".into(), title.trim().into());
    }
    if let Some(project) = &request.project {
        fields.insert("project".into(), project.trim().into());
    }
    if let Some(responsible) = &request.responsible {
        fields.insert("responsible".into(), responsible.trim().into());
    }
    if let Some(time_spent) = &request.time_spent {
        fields.insert("timeSpent".into(), time_spent.trim().into());
    }
    if let Some(details) = &request.details {
        fields.insert("details".into(), details.clone().into());
    }
    if let Some(date) = request.date {
        fields.insert("date".into(), format_date(date).into());
    }

    store.update(&path, id, fields)?;
    decode::activity_log(&store.get(&path, id)?)
}

pub fn delete_activity_log(
    store: &DocumentStore,
    session: &Session,
    id: &str,
) -> Result<(), StoreError> {
    store.delete(&session.collection(Collection::ActivityLogs), id)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
