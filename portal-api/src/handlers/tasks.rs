use actix_web::{web, HttpResponse};
use portal_core::tasks;
use shared_types::{CreateTaskRequest, TasksResponse, UpdateTaskRequest};
use std::sync::Arc;
use tracing::info;

use crate::errors::ApiError;
use crate::session::Session;
use crate::store::tasks as db;
use crate::store::DocumentStore;

pub async fn list_tasks(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
) -> Result<HttpResponse, ApiError> {
    let stored = db::list_tasks(&store, &session)?;
    Ok(HttpResponse::Ok().json(TasksResponse {
        tasks: tasks::rank(&stored),
    }))
}

pub async fn create_task(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
    request: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let task = db::insert_task(&store, &session, &request)?;
    info!("Created task {} for user {}", task.id, session.user_id);

    Ok(HttpResponse::Created().json(task))
}

pub async fn update_task(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
    path: web::Path<String>,
    request: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let task = db::update_task(&store, &session, &path.into_inner(), &request)?;
    Ok(HttpResponse::Ok().json(task))
}

pub async fn toggle_task(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let task = db::toggle_task(&store, &session, &path.into_inner())?;
    Ok(HttpResponse::Ok().json(task))
}

pub async fn delete_task(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    db::delete_task(&store, &session, &path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
