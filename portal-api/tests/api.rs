use actix_web::{http::StatusCode, test, web, App};
use portal_api::handlers;
use portal_api::state::PortalState;
use portal_api::DocumentStore;
use portal_core::ShiftCalculator;
use serde_json::{json, Value};
use std::sync::Arc;

const USER: (&str, &str) = ("X-User-Id", "user-1");

macro_rules! portal_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(DocumentStore::new())))
                .app_data(web::Data::new(PortalState::new(
                    "portal-test",
                    ShiftCalculator::default(),
                )))
                .configure(handlers::routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let app = portal_app!();
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_missing_user_is_unauthorized() {
    let app = portal_app!();
    let req = test::TestRequest::get().uri("/api/tasks").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_exit_time() {
    let app = portal_app!();
    let req = test::TestRequest::post()
        .uri("/api/timeclock/exit-time")
        .set_json(json!({"entry": "09:00", "lunchStart": "12:00", "lunchEnd": "13:00"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["exitTime"], "18:00");
    assert_eq!(body["nextDay"], false);

    let req = test::TestRequest::post()
        .uri("/api/timeclock/exit-time")
        .set_json(json!({"entry": "09:00", "lunchStart": "13:00", "lunchEnd": "12:00"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_financial_flow() {
    let app = portal_app!();

    for (description, amount, category, date) in [
        ("Consulting", "1000", "client-income", "2024-01-05"),
        ("Rent", "300,50", "expense", "2024-01-10"),
        ("Salary", "2000", "company-income", "2024-02-01"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/financials")
            .insert_header(USER)
            .set_json(json!({
                "description": description,
                "amount": amount,
                "category": category,
                "dueDate": date
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/financials/summary")
        .insert_header(USER)
        .to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(summary["totals"]["income"], "3000");
    assert_eq!(summary["totals"]["expense"], "300.50");
    assert_eq!(summary["netBalance"], "2699.50");
    assert_eq!(summary["monthlySeries"][0]["month"], "2024-01");
    assert_eq!(summary["monthlySeries"][1]["month"], "2024-02");

    let req = test::TestRequest::get()
        .uri("/api/financials")
        .insert_header(USER)
        .to_request();
    let listing: Value = test::call_and_read_body_json(&app, req).await;
    let records = listing["records"].as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["description"], "Salary");
    assert_eq!(records[0]["state"], "overdue");

    let id = records[0]["id"].as_str().unwrap().to_string();
    let req = test::TestRequest::put()
        .uri(&format!("/api/financials/{id}"))
        .insert_header(USER)
        .set_json(json!({"status": "paid"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["status"], "paid");
    assert_eq!(updated["amount"], "2000");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/financials/{id}"))
        .insert_header(USER)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/financials/{id}"))
        .insert_header(USER)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_negative_amount_rejected() {
    let app = portal_app!();
    let req = test::TestRequest::post()
        .uri("/api/financials")
        .insert_header(USER)
        .set_json(json!({"description": "Refund", "amount": "-10", "category": "expense"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_amount_above_ceiling_rejected() {
    let app = portal_app!();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/financials")
            .insert_header(USER)
            .set_json(json!({
                "description": "Typo",
                "amount": "79228162514264337593543950335",
                "category": "client-income"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    let req = test::TestRequest::get()
        .uri("/api/dashboard")
        .insert_header(USER)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_tasks_are_ranked_and_scoped_per_user() {
    let app = portal_app!();

    for (text, priority) in [("Read mail", "low"), ("File taxes", "high"), ("Call bank", "medium")] {
        let req = test::TestRequest::post()
            .uri("/api/tasks")
            .insert_header(USER)
            .set_json(json!({"text": text, "priority": priority}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/tasks")
        .insert_header(USER)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let texts: Vec<&str> = body["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|task| task["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["File taxes", "Call bank", "Read mail"]);

    let id = body["tasks"][0]["id"].as_str().unwrap().to_string();
    let req = test::TestRequest::post()
        .uri(&format!("/api/tasks/{id}/toggle"))
        .insert_header(USER)
        .to_request();
    let toggled: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(toggled["completed"], true);

    let req = test::TestRequest::get()
        .uri("/api/dashboard")
        .insert_header(USER)
        .to_request();
    let dashboard: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(dashboard["pendingTasks"], 2);

    let req = test::TestRequest::get()
        .uri("/api/tasks")
        .insert_header(("X-User-Id", "user-2"))
        .to_request();
    let other: Value = test::call_and_read_body_json(&app, req).await;
    assert!(other["tasks"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_blank_task_rejected() {
    let app = portal_app!();
    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .insert_header(USER)
        .set_json(json!({"text": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_activity_logs() {
    let app = portal_app!();

    let req = test::TestRequest::post()
        .uri("/api/activity-logs")
        .insert_header(USER)
        .set_json(json!({"title": "", "details": "Reviewed PRs"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    for (title, date) in [("Older", "2024-03-01"), ("Newer", "2024-03-05")] {
        let req = test::TestRequest::post()
            .uri("/api/activity-logs")
            .insert_header(USER)
            .set_json(json!({"title": title, "details": "Worked", "timeSpent": "2h", "date": date}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/activity-logs")
        .insert_header(USER)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["logs"][0]["title"], "Newer");
    assert_eq!(body["logs"][1]["title"], "Older");

    let id = body["logs"][0]["id"].as_str().unwrap().to_string();
    let req = test::TestRequest::put()
        .uri(&format!("/api/activity-logs/{id}"))
        .insert_header(USER)
        .set_json(json!({"details": "  "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
