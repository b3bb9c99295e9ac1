//! Turns loosely typed store documents into portal entities.
//!
//! Anything that does not fit the data model is rejected with
//! `StoreError::Malformed` instead of being passed along. Field names
//! written by earlier versions of the web app are still understood.

use chrono::{DateTime, NaiveDate, Utc};
use portal_core::forms::max_amount;
use rust_decimal::Decimal;
use serde_json::Value;
use shared_types::{
    ActivityLogEntry, FinancialCategory, FinancialRecord, PaymentStatus, Task, TaskPriority,
};
use std::str::FromStr;

use super::{Document, StoreError};

pub fn financial_record(doc: &Document) -> Result<FinancialRecord, StoreError> {
    let amount = match first_of(doc, &["amount"]) {
        Some(value) => amount(doc, value)?,
        None => return Err(malformed(doc, "missing field 'amount'")),
    };

    let category = match first_of(doc, &["category", "type"]) {
        Some(value) => serde_json::from_value::<FinancialCategory>(value.clone())
            .map_err(|_| malformed(doc, format!("unknown category {}", value)))?,
        None => return Err(malformed(doc, "missing field 'category'")),
    };

    let status = match first_of(doc, &["status"]) {
        Some(value) => serde_json::from_value::<PaymentStatus>(value.clone())
            .map_err(|_| malformed(doc, format!("unknown status {}", value)))?,
        None => PaymentStatus::default(),
    };

    Ok(FinancialRecord {
        id: doc.id.clone(),
        description: optional_string(doc, "description")?,
        amount,
        category,
        due_date: optional_date(doc, &["dueDate", "date"])?,
        status,
    })
}

pub fn task(doc: &Document) -> Result<Task, StoreError> {
    let text = required_string(doc, "text")?;
    if text.trim().is_empty() {
        return Err(malformed(doc, "task text is empty"));
    }

    let completed = match first_of(doc, &["completed"]) {
        Some(Value::Bool(flag)) => *flag,
        Some(other) => return Err(malformed(doc, format!("'completed' is not a boolean: {}", other))),
        None => false,
    };

    let created_at = required_string(doc, "createdAt")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| malformed(doc, format!("invalid createdAt '{}': {}", created_at, e)))?;

    // Unknown priorities decode as unset rather than failing the whole task
    let priority = first_of(doc, &["priority"])
        .and_then(|value| serde_json::from_value::<TaskPriority>(value.clone()).ok());

    Ok(Task {
        id: doc.id.clone(),
        text,
        completed,
        created_at,
        priority,
    })
}

pub fn activity_log(doc: &Document) -> Result<ActivityLogEntry, StoreError> {
    let details = match first_of(doc, &["details", "activities"]) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => return Err(malformed(doc, format!("'details' is not a string: {}", other))),
        None => return Err(malformed(doc, "missing field 'details'")),
    };

    let date = optional_date(doc, &["date"])?
        .ok_or_else(|| malformed(doc, "missing field 'date'"))?;

    Ok(ActivityLogEntry {
        id: doc.id.clone(),
        title: optional_string(doc, "title")?,
        project: optional_string(doc, "project")?,
        responsible: optional_string(doc, "responsible")?,
        time_spent: optional_string(doc, "timeSpent")?,
        details,
        date,
    })
}

fn first_of<'a>(doc: &'a Document, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| doc.fields.get(*key))
        .find(|value| !value.is_null())
}

fn required_string(doc: &Document, key: &str) -> Result<String, StoreError> {
    match doc.fields.get(key) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(malformed(doc, format!("'{}' is not a string: {}", key, other))),
        None => Err(malformed(doc, format!("missing field '{}'", key))),
    }
}

fn optional_string(doc: &Document, key: &str) -> Result<String, StoreError> {
    match doc.fields.get(key) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(Value::Null) | None => Ok(String::new()),
        Some(other) => Err(malformed(doc, format!("'{}' is not a string: {}", key, other))),
    }
}

fn amount(doc: &Document, value: &Value) -> Result<Decimal, StoreError> {
    let parsed = match value {
        Value::Number(number) => Decimal::from_str(&number.to_string()).ok(),
        Value::String(text) => Decimal::from_str(text.trim()).ok(),
        _ => None,
    };

    let amount = parsed.ok_or_else(|| malformed(doc, format!("invalid amount {}", value)))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(malformed(doc, format!("negative amount {}", amount)));
    }
    if amount > max_amount() {
        return Err(malformed(doc, format!("amount {} is above the ledger ceiling", amount)));
    }
    Ok(amount)
}

/// Dates are `YYYY-MM-DD`; a full ISO timestamp keeps only its date part.
/// An empty string counts as no date.
fn optional_date(doc: &Document, keys: &[&str]) -> Result<Option<NaiveDate>, StoreError> {
    let Some(value) = first_of(doc, keys) else {
        return Ok(None);
    };

    let Value::String(text) = value else {
        return Err(malformed(doc, format!("date is not a string: {}", value)));
    };

    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let date_part = text.split('T').next().unwrap_or(text);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| malformed(doc, format!("invalid date '{}'", text)))
}

fn malformed(doc: &Document, reason: impl Into<String>) -> StoreError {
    StoreError::Malformed {
        id: doc.id.clone(),
        reason: reason.into(),
    }
}
