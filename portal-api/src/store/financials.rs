use portal_core::forms::parse_amount;
use serde_json::{json, Value};
use shared_types::{
    CreateFinancialRecordRequest, FinancialRecord, UpdateFinancialRecordRequest,
};

use super::{decode, decode_all, Collection, DocumentStore, Fields, StoreError};
use crate::session::Session;

pub fn list_financial_records(
    store: &DocumentStore,
    session: &Session,
) -> Result<Vec<FinancialRecord>, StoreError> {
    let docs = store.snapshot(&session.collection(Collection::Financials))?;
    Ok(decode_all(&docs, decode::financial_record))
}

pub fn insert_financial_record(
    store: &DocumentStore,
    session: &Session,
    request: &CreateFinancialRecordRequest,
) -> Result<FinancialRecord, StoreError> {
    let amount = parse_amount(&request.amount)?;
    let path = session.collection(Collection::Financials);

    let fields = object(json!({
        "description": request.description.trim(),
        "amount": amount.to_string(),
        "category": request.category.as_str(),
        "dueDate": request.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
        "status": request.status.unwrap_or_default().as_str(),
    }));

    let id = store.add(&path, fields)?;
    decode::financial_record(&store.get(&path, &id)?)
}

pub fn update_financial_record(
    store: &DocumentStore,
    session: &Session,
    id: &str,
    request: &UpdateFinancialRecordRequest,
) -> Result<FinancialRecord, StoreError> {
    let path = session.collection(Collection::Financials);
    let mut fields = Fields::new();

    if let Some(description) = &request.description {
        fields.insert("description".into(), description.trim().into());
    }
    if let Some(amount) = &request.amount {
        fields.insert("amount".into(), parse_amount(amount)?.to_string().into());
    }
    if let Some(category) = request.category {
        fields.insert("category".into(), category.as_str().into());
    }
    if let Some(due_date) = request.due_date {
        fields.insert("dueDate".into(), due_date.format("%Y-%m-%d").to_string().into());
    }
    if let Some(status) = request.status {
        fields.insert("status".into(), status.as_str().into());
    }

    store.update(&path, id, fields)?;
    decode::financial_record(&store.get(&path, id)?)
}

pub fn delete_financial_record(
    store: &DocumentStore,
    session: &Session,
    id: &str,
) -> Result<(), StoreError> {
    store.delete(&session.collection(Collection::Financials), id)
}

fn object(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        _ => Fields::new(),
    }
}
