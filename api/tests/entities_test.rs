//! Integration tests for the aging entity endpoints

mod common;

use actix_web::{http::StatusCode, test};
use aging_api::{app::create_app, config::CorsConfig};
use serde_json::{json, Value};
use uuid::Uuid;

#[actix_web::test]
async fn test_spirit_crud() {
    let app = test::init_service(create_app(common::test_state(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/spirits")
        .set_json(json!({
            "volume": 40.0,
            "name": "Rye",
            "type": "whiskey",
            "initialABV": 63.5,
            "recipeName": "house rye"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["data"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/spirits/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let spirit = &body["data"]["data"];
    assert_eq!(spirit["_id"], id.as_str());
    assert_eq!(spirit["name"], "Rye");
    assert_eq!(spirit["type"], "whiskey");
    assert_eq!(spirit["initialABV"], 63.5);
    let created_at = spirit["createdAt"].clone();

    // full-field overwrite; the response is the re-read record
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/spirits/{}", id))
        .set_json(json!({ "volume": 38.0, "name": "Rye", "initialABV": 63.5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let updated = &body["data"]["data"];
    assert_eq!(updated["volume"], 38.0);
    assert!(updated.get("type").is_none());
    assert_eq!(updated["recipeName"], Value::Null);
    assert_eq!(updated["createdAt"], created_at);

    let req = test::TestRequest::get().uri("/api/v1/spirits").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/spirits/{}", id))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["data"], "spirit deleted");
}

#[actix_web::test]
async fn test_vessel_with_nested_batches() {
    let app = test::init_service(create_app(common::test_state(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/vessels")
        .set_json(json!({
            "volume": 225.0,
            "material": "american oak",
            "process": "charred",
            "batches": [{ "volume": 200.0 }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["data"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/vessels/{}", id))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["data"]["batches"][0]["volume"], 200.0);
}

#[actix_web::test]
async fn test_measurement_validation() {
    let app = test::init_service(create_app(common::test_state(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/measurements")
        .set_json(json!({ "abv": 61.2, "image": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "validation error");
    assert_eq!(body["data"]["data"], "image is required");

    let req = test::TestRequest::post()
        .uri("/api/v1/measurements")
        .set_json(json!({ "abv": "strong", "image": "a.jpg" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "request error");
}

#[actix_web::test]
async fn test_missing_records() {
    let app = test::init_service(create_app(common::test_state(), &CorsConfig::development())).await;
    let missing = Uuid::new_v4();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/batches/{}", missing))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["data"], "batch not found");

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/batches/{}", missing))
        .set_json(json!({ "volume": 10.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/batches/{}", missing))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_unparsable_id_is_bad_request() {
    let app = test::init_service(create_app(common::test_state(), &CorsConfig::development())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/vessels/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "request error");
}

#[actix_web::test]
async fn test_unknown_route_uses_envelope() {
    let app = test::init_service(create_app(common::test_state(), &CorsConfig::development())).await;

    let req = test::TestRequest::get().uri("/api/v2/spirits").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 404);
}
