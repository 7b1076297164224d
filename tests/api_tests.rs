use actix_web::{App, http::StatusCode, http::header, test};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

use hr_api::middleware::{RequestId, RequestTiming};
use hr_api::routes;

mod common;

macro_rules! test_app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .app_data($db.app_state())
                .wrap(RequestTiming::new(&$db.config.execution_timing))
                .wrap(RequestId)
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_check() {
    let db = common::TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_create_department_then_fetch_it() {
    let db = common::TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/v1/departments")
        .set_json(json!({ "name": "Engineering" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let location = res
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["isSuccess"], true);
    let id = body["value"].as_str().unwrap().to_string();
    assert_eq!(location, format!("/api/v1/departments/{}", id));

    let req = test::TestRequest::get().uri(&location).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["isSuccess"], true);
    assert_eq!(body["value"]["name"], "Engineering");
    assert_eq!(body["value"]["id"], id.as_str());
}

#[actix_web::test]
async fn test_list_employees_with_projection() {
    let db = common::TestDb::new().await.unwrap();
    let position = common::seed_position(&db, "Developer", "DEV-1", "Engineering").await;
    common::seed_employee(&db, "Jane", "Doe", "E-1", position.id, "5000").await;
    common::seed_employee(&db, "John", "Smith", "E-2", position.id, "4000").await;
    let app = test_app!(db);

    let req = test::TestRequest::get()
        .uri("/api/v1/employees?fields=Id,FirstName&lastName=doe&pageNumber=1&pageSize=5")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["isSuccess"], true);
    assert_eq!(body["pageNumber"], 1);
    assert_eq!(body["pageSize"], 5);
    assert_eq!(body["recordsFiltered"], 1);
    assert_eq!(body["recordsTotal"], 2);

    let rows = body["value"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    let keys: Vec<&String> = rows[0].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["Id", "FirstName"]);
    assert_eq!(rows[0]["FirstName"], "Jane");
}

#[actix_web::test]
async fn test_unknown_projection_field_is_bad_request() {
    let db = common::TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::get()
        .uri("/api/v1/departments?fields=Budget")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["isSuccess"], false);
    assert_eq!(body["message"], "Unknown field: Budget");
}

#[actix_web::test]
async fn test_paged_positions_echo_draw() {
    let db = common::TestDb::new().await.unwrap();
    common::seed_position(&db, "Developer", "DEV-1", "Engineering").await;
    common::seed_position(&db, "Accountant", "ACC-1", "Finance").await;
    common::seed_position(&db, "Designer", "DES-1", "Product").await;
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/v1/positions/Paged")
        .set_json(json!({
            "draw": 7,
            "start": 0,
            "length": 2,
            "search": { "value": "De", "regex": false },
            "fields": "PositionNumber"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["draw"], 7);
    assert_eq!(body["recordsFiltered"], 2);
    assert_eq!(body["recordsTotal"], 3);
    assert_eq!(
        body["value"],
        json!([{ "PositionNumber": "DES-1" }, { "PositionNumber": "DEV-1" }])
    );
}

#[actix_web::test]
async fn test_paged_employees_keyword_search() {
    let db = common::TestDb::new().await.unwrap();
    let position = common::seed_position(&db, "Developer", "DEV-1", "Engineering").await;
    common::seed_employee(&db, "Jane", "Doe", "E-1", position.id, "5000").await;
    common::seed_employee(&db, "John", "Smith", "E-2", position.id, "4000").await;
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/v1/employees/Paged")
        .set_json(json!({
            "draw": 2,
            "start": 0,
            "length": 10,
            "search": { "value": "SMITH" },
            "fields": "LastName"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["draw"], 2);
    assert_eq!(body["value"], json!([{ "LastName": "Smith" }]));
    assert_eq!(body["recordsFiltered"], 1);
    assert_eq!(body["recordsTotal"], 2);
}

#[actix_web::test]
async fn test_update_with_mismatched_id_is_bad_request() {
    let db = common::TestDb::new().await.unwrap();
    let department = common::seed_department(&db, "Engineering").await;
    let app = test_app!(db);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/departments/{}", department.id))
        .set_json(json!({ "id": Uuid::new_v4(), "name": "Platform" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_then_delete_department() {
    let db = common::TestDb::new().await.unwrap();
    let department = common::seed_department(&db, "Engineering").await;
    let app = test_app!(db);
    let uri = format!("/api/v1/departments/{}", department.id);

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "id": department.id, "name": "Platform" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri(&uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["value"]["name"], "Platform");

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri(&uri).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_missing_department_is_not_found() {
    let db = common::TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/departments/{}", Uuid::new_v4()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["isSuccess"], false);
    assert_eq!(body["message"], "Department Not Found.");
    assert_eq!(body["errors"], json!(["Department Not Found."]));
}

#[actix_web::test]
async fn test_invalid_salary_range_lists_errors() {
    let db = common::TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/v1/salary-ranges")
        .set_json(json!({ "name": "Band", "minSalary": "9000", "maxSalary": "100" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["isSuccess"], false);
    assert_eq!(
        body["errors"],
        json!(["max_salary: must be greater than or equal to min_salary"])
    );
}

#[actix_web::test]
async fn test_malformed_body_uses_failure_envelope() {
    let db = common::TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/v1/departments")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{ not json")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["isSuccess"], false);
}

#[actix_web::test]
async fn test_correlation_and_timing_headers() {
    let db = common::TestDb::new().await.unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("x-correlation-id", "trace-42"))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(
        res.headers().get("x-correlation-id").unwrap(),
        "trace-42"
    );
    let elapsed = res
        .headers()
        .get("x-execution-time-ms")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(elapsed.parse::<u128>().is_ok());
}
