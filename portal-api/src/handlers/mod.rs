pub mod activity_logs;
pub mod dashboard;
pub mod financial;
pub mod tasks;
pub mod timeclock;

use actix_web::{get, web, HttpResponse, Responder};
use std::sync::Arc;

use crate::store::DocumentStore;

#[get("/health")]
async fn health(store: web::Data<Arc<DocumentStore>>) -> impl Responder {
    match store.collection_count() {
        Ok(collections) => HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "collections": collections
        })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "unhealthy"
        })),
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .route("/api/financials", web::get().to(financial::list_records))
        .route("/api/financials", web::post().to(financial::create_record))
        .route("/api/financials/summary", web::get().to(financial::get_summary))
        .route("/api/financials/{id}", web::put().to(financial::update_record))
        .route("/api/financials/{id}", web::delete().to(financial::delete_record))
        .route("/api/tasks", web::get().to(tasks::list_tasks))
        .route("/api/tasks", web::post().to(tasks::create_task))
        .route("/api/tasks/{id}", web::put().to(tasks::update_task))
        .route("/api/tasks/{id}", web::delete().to(tasks::delete_task))
        .route("/api/tasks/{id}/toggle", web::post().to(tasks::toggle_task))
        .route("/api/activity-logs", web::get().to(activity_logs::list_logs))
        .route("/api/activity-logs", web::post().to(activity_logs::create_log))
        .route("/api/activity-logs/{id}", web::put().to(activity_logs::update_log))
        .route("/api/activity-logs/{id}", web::delete().to(activity_logs::delete_log))
        .route("/api/timeclock/exit-time", web::post().to(timeclock::exit_time))
        .route("/api/dashboard", web::get().to(dashboard::get_dashboard))
        .route("/api/dashboard/live", web::get().to(dashboard::live_dashboard));
}
