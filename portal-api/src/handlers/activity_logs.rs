use actix_web::{web, HttpResponse};
use portal_core::activity_log;
use shared_types::{ActivityLogsResponse, CreateActivityLogRequest, UpdateActivityLogRequest};
use std::sync::Arc;
use tracing::info;

use crate::errors::ApiError;
use crate::session::Session;
use crate::store::activity_logs as db;
use crate::store::DocumentStore;

pub async fn list_logs(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
) -> Result<HttpResponse, ApiError> {
    let mut logs = db::list_activity_logs(&store, &session)?;
    activity_log::sort_by_date_desc(&mut logs);

    Ok(HttpResponse::Ok().json(ActivityLogsResponse { logs }))
}

pub async fn create_log(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
    request: web::Json<CreateActivityLogRequest>,
) -> Result<HttpResponse, ApiError> {
    let entry = db::insert_activity_log(&store, &session, &request)?;
    info!("Recorded activity {} for user {}", entry.id, session.user_id);

    Ok(HttpResponse::Created().json(entry))
}

pub async fn update_log(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
    path: web::Path<String>,
    request: web::Json<UpdateActivityLogRequest>,
) -> Result<HttpResponse, ApiError> {
    let entry = db::update_activity_log(&store, &session, &path.into_inner(), &request)?;
    Ok(HttpResponse::Ok().json(entry))
}

pub async fn delete_log(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    db::delete_activity_log(&store, &session, &path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
