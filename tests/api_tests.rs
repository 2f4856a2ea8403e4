use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use fleet_management::config::{DatabaseConfig, EnvironmentConfig};
use fleet_management::database::DatabaseConnection;
use fleet_management::routes::create_router;
use fleet_management::state::AppState;

struct TestApp {
    router: Router,
}

struct TestResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl TestResponse {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            body: body.to_vec(),
        }
    }

    async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn delete(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }
}

async fn create_test_app() -> TestApp {
    create_test_app_with(DatabaseConfig::in_memory()).await
}

async fn create_test_app_with(config: DatabaseConfig) -> TestApp {
    let db = DatabaseConnection::connect(&config).await.unwrap();
    let state = AppState::new(db.pool().clone(), EnvironmentConfig::default());
    TestApp {
        router: create_router(state),
    }
}

fn transit() -> Value {
    json!({
        "make": "Ford",
        "model": "Transit",
        "year": 2020,
        "vin": "1FTBW2CM5HKA12345",
        "registration_number": "AB-123-CD"
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;
    let response = app.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "fleet_management");
}

#[tokio::test]
async fn test_home_page_links_screens() {
    let app = create_test_app().await;
    let response = app.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Car Fleet Management Database"));
    assert!(html.contains(r#"href="/maintenance-tasks/search""#));
    assert!(html.contains(r#"href="/trips/add""#));
}

#[tokio::test]
async fn test_api_add_then_list() {
    let app = create_test_app().await;

    let response = app.post_json("/api/vehicles", transit()).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Vehicle added successfully!");
    assert_eq!(body["data"]["id"], 1);

    let body = app.get("/api/vehicles").await.json();
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["vin"], "1FTBW2CM5HKA12345");
    assert_eq!(rows[0]["year"], 2020);
}

#[tokio::test]
async fn test_api_search_and_delete() {
    let app = create_test_app().await;
    app.post_json("/api/vehicles", transit()).await;

    let response = app.get("/api/vehicles/search?vin=1FTBW2CM5HKA12345").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json()["data"][0]["model"], "Transit");

    let response = app.delete("/api/vehicles?vehicle_id=1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json();
    assert_eq!(body["data"]["deleted"], 1);
    assert_eq!(body["message"], "Vehicle deleted successfully!");

    let response = app.get("/api/vehicles/search?vin=1FTBW2CM5HKA12345").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json()["message"], "Vehicle not found.");
}

#[tokio::test]
async fn test_api_search_without_fields_is_bad_request() {
    let app = create_test_app().await;
    let response = app.get("/api/drivers/search?name=").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_api_duplicate_vin_is_conflict() {
    let app = create_test_app().await;
    app.post_json("/api/vehicles", transit()).await;

    let mut duplicate = transit();
    duplicate["registration_number"] = json!("ZZ-999-ZZ");
    let response = app.post_json("/api/vehicles", duplicate).await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(response.json()["code"], "CONSTRAINT_VIOLATION");
}

#[tokio::test]
async fn test_api_task_for_unknown_vehicle_is_conflict_with_foreign_keys() {
    let app = create_test_app_with(DatabaseConfig::in_memory().with_foreign_keys(true)).await;
    let response = app
        .post_json(
            "/api/maintenance-tasks",
            json!({
                "vehicle_id": 42,
                "task_description": "Oil change",
                "due_date": "2024-06-01"
            }),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_form_delete_vehicle_with_tasks_by_default() {
    let app = create_test_app().await;
    app.post_json("/api/vehicles", transit()).await;
    app.post_form(
        "/maintenance-tasks/add",
        "vehicle_id=1&task_description=Oil+change&due_date=2024-06-01&completion_date=",
    )
    .await;

    let response = app.post_form("/vehicles/delete", "vehicle_id=1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response
        .text()
        .contains(r#"<p class="notice success">Vehicle deleted successfully!</p>"#));

    let tasks = app.get("/api/maintenance-tasks").await.json();
    assert_eq!(tasks["data"].as_array().unwrap().len(), 1);
    assert_eq!(tasks["data"][0]["vehicle_id"], 1);
}

#[tokio::test]
async fn test_api_rejects_invalid_values() {
    let app = create_test_app().await;

    let mut old = transit();
    old["year"] = json!(1850);
    let response = app.post_json("/api/vehicles", old).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "VALIDATION_ERROR");

    let response = app
        .post_json("/api/vehicles", json!({ "make": "Ford", "year": "soon" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_form_add_shows_success() {
    let app = create_test_app().await;
    let response = app
        .post_form(
            "/vehicles/add",
            "make=Ford&model=Transit&year=2020&vin=VIN-1&registration_number=REG-1",
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains(r#"<p class="notice success">Vehicle added successfully!</p>"#));
    assert!(html.contains(r#"<form method="post" action="/vehicles/add">"#));
}

#[tokio::test]
async fn test_form_with_bad_number_is_bad_request() {
    let app = create_test_app().await;
    let response = app
        .post_form(
            "/vehicles/add",
            "make=Ford&model=Transit&year=abc&vin=VIN-1&registration_number=REG-1",
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.text().contains(r#"<p class="notice error">"#));
    assert!(app.get("/api/vehicles").await.json()["data"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_form_duplicate_shows_error_notice() {
    let app = create_test_app().await;
    let form = "name=Ana&license_number=DL-1&contact_number=555-0100";
    app.post_form("/drivers/add", form).await;

    let response = app.post_form("/drivers/add", form).await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert!(response.text().contains("Duplicate value"));
}

#[tokio::test]
async fn test_form_search_not_found_warning() {
    let app = create_test_app().await;
    let response = app
        .post_form("/drivers/search", "driver_id=&name=Nobody&license_number=&contact_number=")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response
        .text()
        .contains(r#"<p class="notice warning">Driver not found.</p>"#));
}

#[tokio::test]
async fn test_form_search_falls_back_to_later_field() {
    let app = create_test_app().await;
    app.post_form("/drivers/add", "name=Ana&license_number=DL-1&contact_number=555-0100")
        .await;
    app.post_form("/drivers/add", "name=Bruno&license_number=DL-2&contact_number=555-0200")
        .await;

    let response = app
        .post_form("/drivers/search", "driver_id=99&name=&license_number=DL-2&contact_number=")
        .await;

    let html = response.text();
    assert!(html.contains("<td>Bruno</td>"));
    assert!(!html.contains("<td>Ana</td>"));
}

#[tokio::test]
async fn test_view_page_lists_rows() {
    let app = create_test_app().await;
    app.post_json("/api/vehicles", transit()).await;
    app.post_form(
        "/maintenance-tasks/add",
        "vehicle_id=1&task_description=Brake+check&due_date=2024-06-01&completion_date=",
    )
    .await;

    let response = app.get("/maintenance-tasks").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("<th>task_description</th>"));
    assert!(html.contains("<td>Brake check</td>"));
    assert!(html.contains("<td>2024-06-01</td>"));
}

#[tokio::test]
async fn test_view_page_without_rows() {
    let app = create_test_app().await;
    let html = app.get("/trips").await.text();
    assert!(html.contains("No Trip rows yet."));
}

#[tokio::test]
async fn test_trip_lifecycle_through_forms() {
    let app = create_test_app().await;
    app.post_json("/api/vehicles", transit()).await;
    app.post_form("/drivers/add", "name=Ana&license_number=DL-1&contact_number=555-0100")
        .await;

    let response = app
        .post_form(
            "/trips/add",
            "vehicle_id=1&driver_id=1&start_location=Depot&end_location=Harbour\
             &distance=42.5&fuel_consumption=6.1\
             &start_time=2024-03-09T08%3A30&end_time=2024-03-09T10%3A00",
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Trip added successfully!"));

    let html = app
        .post_form("/trips/search", "start_location=&end_location=Harbour")
        .await
        .text();
    assert!(html.contains("<td>42.50</td>"));

    let response = app
        .post_form("/trips/delete", "start_location=Depot&end_location=Harbour")
        .await;
    assert!(response
        .text()
        .contains(r#"<p class="notice success">Trip deleted successfully!</p>"#));

    let response = app
        .post_form("/trips/delete", "start_location=Depot&end_location=Harbour")
        .await;
    assert!(response.text().contains(r#"<p class="notice warning">"#));
}

#[tokio::test]
async fn test_trip_with_non_finite_numbers_is_rejected() {
    let app = create_test_app().await;
    app.post_json("/api/vehicles", transit()).await;
    app.post_form("/drivers/add", "name=Ana&license_number=DL-1&contact_number=555-0100")
        .await;

    for (distance, fuel) in [("NaN", "6.1"), ("inf", "6.1"), ("42.5", "-inf")] {
        let form = format!(
            "vehicle_id=1&driver_id=1&start_location=Depot&end_location=Harbour\
             &distance={}&fuel_consumption={}\
             &start_time=2024-03-09T08%3A30&end_time=2024-03-09T10%3A00",
            distance, fuel
        );
        let response = app.post_form("/trips/add", &form).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert!(response.text().contains("must be a finite number"));
    }

    let response = app
        .post_json(
            "/api/trips",
            json!({
                "vehicle_id": 1,
                "driver_id": 1,
                "start_location": "Depot",
                "end_location": "Harbour",
                "distance": "NaN",
                "fuel_consumption": 6.1,
                "start_time": "2024-03-09 08:30",
                "end_time": "2024-03-09 10:00"
            }),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "VALIDATION_ERROR");

    let body = app.get("/api/trips").await.json();
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_form_renders_fields() {
    let app = create_test_app().await;
    let html = app.get("/trips/add").await.text();

    assert!(html.contains(r#"name="start_time" type="datetime-local""#));
    assert!(html.contains(r#"name="distance" type="number" step="0.01""#));
    assert!(html.contains(r#"<button type="submit">Add Trip</button>"#));
}
