//! End-to-end API tests against the in-memory backend.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use catering_server::core::{Config, ServerState, build_app};
use catering_server::db::MemoryStorage;

fn app() -> Router {
    let state = ServerState::with_storage(Config::default(), Arc::new(MemoryStorage::new()));
    build_app().with_state(state)
}

async fn send(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn sample_booking() -> Value {
    json!({
        "clientName": "Asha Rao",
        "eventDate": "2026-11-20T18:00:00Z",
        "eventType": "Wedding",
        "guestCount": 100,
        "pricePerPlate": 500,
        "contactEmail": "asha@example.com",
        "contactPhone": "9876543210"
    })
}

#[tokio::test]
async fn food_item_crud_round_trip() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/food-items",
        Some(json!({
            "name": "Paneer Tikka",
            "description": "Char-grilled cottage cheese skewers",
            "category": "Starters",
            "type": "Veg",
            "price": 250
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(body["data"]["name"], json!("Paneer Tikka"));
    assert_eq!(body["data"]["type"], json!("Veg"));

    let (status, body) = send(&app, "GET", "/api/food-items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/food-items/{id}"),
        Some(json!({ "price": 300 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], json!(300));
    // Untouched fields survive the merge
    assert_eq!(body["data"]["category"], json!("Starters"));

    let (status, _) = send(&app, "DELETE", &format!("/api/food-items/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &format!("/api/food-items/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Food item not found"));
}

#[tokio::test]
async fn food_item_validation_rejects_short_name() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/food-items",
        Some(json!({
            "name": "a",
            "description": "Long enough description",
            "category": "Starters",
            "type": "Veg"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/food-items")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn booking_creation_derives_amounts_and_statuses() {
    let app = app();
    let (status, body) = send(&app, "POST", "/api/bookings", Some(sample_booking())).await;
    assert_eq!(status, StatusCode::CREATED);

    let booking = &body["data"];
    assert_eq!(booking["totalAmount"], json!(50000));
    assert_eq!(booking["advanceAmount"], json!(25000));
    assert_eq!(booking["status"], json!("pending"));
    assert_eq!(booking["advancePaymentStatus"], json!("pending"));
    assert_eq!(booking["finalPaymentStatus"], json!("pending"));
    assert_eq!(booking["advancePaymentApprovalStatus"], json!("pending"));
    assert_eq!(booking["finalPaymentApprovalStatus"], json!("pending"));
    assert_eq!(booking["servingBoysNeeded"], json!(2));
}

#[tokio::test]
async fn booking_not_found_messages() {
    let app = app();
    let (status, body) = send(
        &app,
        "PATCH",
        "/api/bookings/nope",
        Some(json!({ "status": "confirmed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Booking not found"));

    let (status, _) = send(&app, "DELETE", "/api/bookings/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn booking_items_are_scoped_to_their_booking() {
    let app = app();

    let (_, body) = send(&app, "POST", "/api/bookings", Some(sample_booking())).await;
    let first = body["data"]["id"].as_str().unwrap().to_string();
    let (_, body) = send(&app, "POST", "/api/bookings", Some(sample_booking())).await;
    let second = body["data"]["id"].as_str().unwrap().to_string();

    let (_, body) = send(
        &app,
        "POST",
        "/api/food-items",
        Some(json!({
            "name": "Veg Biryani",
            "description": "Fragrant basmati rice with vegetables",
            "category": "Mains",
            "type": "Veg"
        })),
    )
    .await;
    let food_id = body["data"]["id"].as_str().unwrap().to_string();

    for booking in [&first, &second] {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/bookings/{booking}/items"),
            Some(json!({ "foodItemId": food_id, "quantity": 2 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "DELETE", &format!("/api/bookings/{first}/items"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deleted"], json!(1));

    let (_, body) = send(&app, "GET", &format!("/api/bookings/{second}/items"), None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn code_can_only_be_used_once() {
    let app = app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/user-codes",
        Some(json!({ "code": "WED2026" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", "/api/codes/verify?code=WED2026", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["code"], json!("WED2026"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/codes/use",
        Some(json!({ "code": "WED2026" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["success"], json!(true));

    let (status, body) = send(
        &app,
        "POST",
        "/api/codes/use",
        Some(json!({ "code": "WED2026" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Code not found or already used"));

    // A consumed code no longer verifies
    let (status, body) = send(&app, "GET", "/api/codes/verify?code=WED2026", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Invalid or used code"));
}

#[tokio::test]
async fn code_use_requires_a_code() {
    let app = app();
    let (status, body) = send(&app, "POST", "/api/codes/use", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Code is required"));
}

#[tokio::test]
async fn company_info_upserts_into_a_singleton() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/company-info", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({}));

    let (status, _) = send(
        &app,
        "PATCH",
        "/api/company-info",
        Some(json!({ "companyName": "Asha Caterers" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &app,
        "PATCH",
        "/api/company-info",
        Some(json!({ "tagline": "Food that travels well" })),
    )
    .await;
    assert_eq!(body["data"]["companyName"], json!("Asha Caterers"));
    assert_eq!(body["data"]["tagline"], json!("Food that travels well"));
}

#[tokio::test]
async fn staff_phone_is_sanitized_on_create() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/staff",
        Some(json!({
            "name": "Ravi Kumar",
            "role": "Head Chef",
            "phone": "+1 (555) 123-4567"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["phone"], json!("15551234567"));
}

#[tokio::test]
async fn admin_login_verifies_the_password() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/login",
        Some(json!({ "password": "admin123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["success"], json!(true));

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/login",
        Some(json!({ "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("Invalid password"));
}

#[tokio::test]
async fn change_password_enforces_checks() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/admin/change-password", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Current password and new password are required")
    );

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/change-password",
        Some(json!({ "currentPassword": "nope", "newPassword": "longenough" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("Current password is incorrect"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/change-password",
        Some(json!({ "currentPassword": "admin123", "newPassword": "short" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("New password must be at least 6 characters")
    );

    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/change-password",
        Some(json!({ "currentPassword": "admin123", "newPassword": "s3cret-pass" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // New password now logs in
    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/login",
        Some(json!({ "password": "s3cret-pass" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn code_request_notifies_the_admin() {
    let app = app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/code-requests",
        Some(json!({
            "customerName": "Priya Nair",
            "customerEmail": "priya@example.com",
            "customerPhone": "9876543210"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, "GET", "/api/notifications", None).await;
    let notifications = body["data"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["title"], json!("New Booking Code Request"));
    assert_eq!(
        notifications[0]["message"],
        json!("Customer Priya Nair has requested a booking code.")
    );
    assert_eq!(notifications[0]["read"], json!(false));
}

#[tokio::test]
async fn granting_a_code_request_notifies_again() {
    let app = app();

    let (_, body) = send(
        &app,
        "POST",
        "/api/code-requests",
        Some(json!({
            "customerName": "Priya Nair",
            "customerEmail": "priya@example.com",
            "customerPhone": "9876543210"
        })),
    )
    .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/code-requests/{id}"),
        Some(json!({ "status": "granted" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("granted"));

    let (_, body) = send(&app, "GET", "/api/notifications", None).await;
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"Booking Code Request Granted"));
}

#[tokio::test]
async fn staff_request_lifecycle() {
    let app = app();

    let (_, body) = send(&app, "POST", "/api/bookings", Some(sample_booking())).await;
    let booking_id = body["data"]["id"].as_str().unwrap().to_string();

    let (_, body) = send(
        &app,
        "POST",
        "/api/staff",
        Some(json!({ "name": "Ravi Kumar", "role": "Server", "phone": "9876543210" })),
    )
    .await;
    let staff_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "POST",
        "/api/staff-requests",
        Some(json!({ "bookingId": booking_id, "staffId": staff_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let request_id = body["data"]["id"].as_str().unwrap().to_string();
    let token = body["data"]["token"].as_str().unwrap().to_string();
    assert!(!token.is_empty());

    // Staff member looks the request up by token
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/staff-requests/token/{token}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("pending"));

    // Pending requests do not surface as accepted staff
    let (_, body) = send(
        &app,
        "GET",
        &format!("/api/bookings/{booking_id}/accepted-staff"),
        None,
    )
    .await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/staff-requests/{request_id}"),
        Some(json!({ "status": "accepted" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &app,
        "GET",
        &format!("/api/bookings/{booking_id}/accepted-staff"),
        None,
    )
    .await;
    let accepted = body["data"].as_array().unwrap();
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0]["name"], json!("Ravi Kumar"));

    // Admin withdraws the assignment
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/bookings/{booking_id}/staff-requests/{staff_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &app,
        "GET",
        &format!("/api/bookings/{booking_id}/staff-requests"),
        None,
    )
    .await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn audit_history_filters_and_sorts() {
    let app = app();

    for (action, entity_type, entity_id) in [
        ("created", "booking", "b1"),
        ("status_changed", "booking", "b1"),
        ("created", "staff", "s1"),
    ] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/audit-history",
            Some(json!({
                "action": action,
                "entityType": entity_type,
                "entityId": entity_id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, "GET", "/api/audit-history", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (_, body) = send(
        &app,
        "GET",
        "/api/audit-history?entityType=booking&entityId=b1",
        None,
    )
    .await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        assert_eq!(entry["entityType"], json!("booking"));
    }
}

#[tokio::test]
async fn notifications_can_be_marked_read_and_deleted() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/notifications",
        Some(json!({
            "type": "payment",
            "title": "Advance received",
            "message": "Advance payment submitted for booking b1."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["read"], json!(false));

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/notifications/{id}/read"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["read"], json!(true));

    let (status, _) = send(&app, "DELETE", &format!("/api/notifications/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/notifications/{id}/read"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Notification not found"));
}

#[tokio::test]
async fn deleting_a_booking_clears_its_items() {
    let app = app();

    let (_, body) = send(&app, "POST", "/api/bookings", Some(sample_booking())).await;
    let booking_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/bookings/{booking_id}/items"),
        Some(json!({ "foodItemId": "f1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, "DELETE", &format!("/api/bookings/{booking_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &app,
        "GET",
        &format!("/api/bookings/{booking_id}/items"),
        None,
    )
    .await;
    assert!(body["data"].as_array().unwrap().is_empty());
}
