use actix_web::{web, HttpResponse};
use chrono::Local;
use portal_core::ledger;
use shared_types::{
    CreateFinancialRecordRequest, FinancialRecordsResponse, UpdateFinancialRecordRequest,
};
use std::sync::Arc;
use tracing::info;

use crate::errors::ApiError;
use crate::session::Session;
use crate::store::financials as db;
use crate::store::DocumentStore;

pub async fn list_records(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
) -> Result<HttpResponse, ApiError> {
    let records = db::list_financial_records(&store, &session)?;
    let today = Local::now().date_naive();

    Ok(HttpResponse::Ok().json(FinancialRecordsResponse {
        records: ledger::record_views(records, today),
    }))
}

pub async fn create_record(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
    request: web::Json<CreateFinancialRecordRequest>,
) -> Result<HttpResponse, ApiError> {
    let record = db::insert_financial_record(&store, &session, &request)?;
    info!(
        "Created {} record {} for user {}",
        record.category.as_str(),
        record.id,
        session.user_id
    );

    Ok(HttpResponse::Created().json(record))
}

pub async fn update_record(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
    path: web::Path<String>,
    request: web::Json<UpdateFinancialRecordRequest>,
) -> Result<HttpResponse, ApiError> {
    let record = db::update_financial_record(&store, &session, &path.into_inner(), &request)?;
    Ok(HttpResponse::Ok().json(record))
}

pub async fn delete_record(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    db::delete_financial_record(&store, &session, &id)?;
    info!("Deleted financial record {} for user {}", id, session.user_id);

    Ok(HttpResponse::NoContent().finish())
}

pub async fn get_summary(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
) -> Result<HttpResponse, ApiError> {
    let records = db::list_financial_records(&store, &session)?;
    Ok(HttpResponse::Ok().json(ledger::summarize(&records)))
}
