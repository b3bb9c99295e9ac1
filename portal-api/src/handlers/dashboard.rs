use actix_web::{web, Error, HttpResponse};
use futures::Stream;
use portal_core::dashboard;
use shared_types::DashboardSummary;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::errors::ApiError;
use crate::session::Session;
use crate::store::{financials, tasks, ChangeWatch, Collection, DocumentStore, StoreError};

pub async fn get_dashboard(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
) -> Result<HttpResponse, ApiError> {
    let summary = summarize(&store, &session)?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Server-sent events: one dashboard summary now, then another after every
/// change to the user's ledger or task list.
pub async fn live_dashboard(
    store: web::Data<Arc<DocumentStore>>,
    session: Session,
) -> Result<HttpResponse, ApiError> {
    debug!("Opening live dashboard for user {}", session.user_id);
    let stream = dashboard_events(store.get_ref().clone(), session);

    Ok(HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(stream))
}

pub fn dashboard_events(
    store: Arc<DocumentStore>,
    session: Session,
) -> impl Stream<Item = Result<web::Bytes, Error>> {
    let watch = store.watch(vec![
        session.collection(Collection::Financials),
        session.collection(Collection::Tasks),
    ]);

    futures::stream::unfold(
        (store, session, watch),
        |(store, session, mut watch): (Arc<DocumentStore>, Session, ChangeWatch)| async move {
            if !watch.changed().await {
                return None;
            }

            let event = match summarize(&store, &session) {
                Ok(summary) => match serde_json::to_string(&summary) {
                    Ok(json) => format!("data: {}\n\n", json),
                    Err(e) => {
                        warn!("Failed to serialize dashboard summary: {}", e);
                        return None;
                    }
                },
                Err(e) => {
                    warn!("Live dashboard for user {} stopped: {}", session.user_id, e);
                    return None;
                }
            };

            Some((Ok(web::Bytes::from(event)), (store, session, watch)))
        },
    )
}

fn summarize(store: &DocumentStore, session: &Session) -> Result<DashboardSummary, StoreError> {
    let records = financials::list_financial_records(store, session)?;
    let task_list = tasks::list_tasks(store, session)?;
    Ok(dashboard::summarize(&records, &task_list))
}
