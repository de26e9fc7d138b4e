mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::{Router, middleware, routing::post};
use axum_test::TestServer;
use qrcode_service::api::handlers::generate_code_handler;
use qrcode_service::api::middleware::content_type;
use qrcode_service::api::routes::api_routes;
use serde_json::json;

fn server() -> TestServer {
    let app = api_routes().with_state(common::create_test_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_generate_code_success() {
    let server = server();

    let response = server
        .post("/qrcode")
        .json(&json!({ "text": "https://example.com", "data_type": "url" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert!(!code.ends_with('='));

    let img = common::decode_code(code);
    assert_eq!((img.width(), img.height()), (600, 600));
}

#[tokio::test]
async fn test_generate_code_all_data_types() {
    let server = server();

    for (text, data_type) in [
        ("https://example.com", "url"),
        ("555-1234", "tel"),
        ("+15551234", "sms"),
        ("a@b.com", "email"),
    ] {
        let response = server
            .post("/qrcode")
            .json(&json!({ "text": text, "data_type": data_type }))
            .await;

        response.assert_status_ok();
        let json = response.json::<serde_json::Value>();
        assert!(json["code"].is_string(), "data_type {data_type}");
    }
}

#[tokio::test]
async fn test_generate_code_long_text_is_still_600px() {
    let server = server();

    let response = server
        .post("/qrcode")
        .json(&json!({ "text": "a".repeat(1000), "data_type": "url" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let img = common::decode_code(json["code"].as_str().unwrap());
    assert_eq!((img.width(), img.height()), (600, 600));
}

#[tokio::test]
async fn test_generate_code_empty_text() {
    let server = server();

    for data_type in ["url", "tel", "sms", "email", "fax"] {
        let response = server
            .post("/qrcode")
            .json(&json!({ "text": "", "data_type": data_type }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "unprocessable_entity");
        assert_eq!(json["error"]["message"], "input is required");
    }
}

#[tokio::test]
async fn test_generate_code_missing_fields() {
    let server = server();

    let response = server.post("/qrcode").json(&json!({})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "input is required");
}

#[tokio::test]
async fn test_generate_code_unsupported_data_type() {
    let server = server();

    for data_type in ["", "fax", "URL"] {
        let response = server
            .post("/qrcode")
            .json(&json!({ "text": "hello", "data_type": data_type }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["message"], "unsupported data type");
    }
}

#[tokio::test]
async fn test_generate_code_text_too_long() {
    let server = server();

    let response = server
        .post("/qrcode")
        .json(&json!({ "text": "a".repeat(2000), "data_type": "url" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "input is too long");
}

#[tokio::test]
async fn test_generate_code_multibyte_text_too_long() {
    let server = server();

    // 1000 characters, 2000 bytes
    let response = server
        .post("/qrcode")
        .json(&json!({ "text": "é".repeat(1000), "data_type": "url" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unprocessable_entity");
    assert_eq!(json["error"]["message"], "input is too long");
}

#[tokio::test]
async fn test_generate_code_long_ascii_within_byte_limit() {
    let server = server();

    let response = server
        .post("/qrcode")
        .json(&json!({ "text": "a".repeat(1100), "data_type": "email" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let img = common::decode_code(json["code"].as_str().unwrap());
    assert_eq!((img.width(), img.height()), (600, 600));
}

#[tokio::test]
async fn test_generate_code_null_text_is_required() {
    let server = server();

    let response = server
        .post("/qrcode")
        .json(&json!({ "text": null, "data_type": "url" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "input is required");
}

#[tokio::test]
async fn test_generate_code_malformed_json() {
    let server = server();

    let response = server
        .post("/qrcode")
        .bytes(Bytes::from_static(b"{\"text\": "))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_generate_code_wrong_content_type() {
    let server = server();

    let response = server
        .post("/qrcode")
        .text(r#"{"text": "hello", "data_type": "url"}"#)
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_generate_code_method_not_allowed() {
    let server = server();

    let response = server.get("/qrcode").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_handler_without_guard_accepts_any_content_type() {
    let app = Router::new()
        .route("/qrcode", post(generate_code_handler))
        .with_state(common::create_test_state());
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/qrcode")
        .text(r#"{"text": "555-1234", "data_type": "tel"}"#)
        .await;

    response.assert_status_ok();

    let guarded = Router::new()
        .route("/qrcode", post(generate_code_handler))
        .route_layer(middleware::from_fn(content_type::require_json))
        .with_state(common::create_test_state());
    let server = TestServer::new(guarded).unwrap();

    let response = server
        .post("/qrcode")
        .text(r#"{"text": "555-1234", "data_type": "tel"}"#)
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
