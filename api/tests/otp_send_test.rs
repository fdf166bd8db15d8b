mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use otp_api::app::create_app;
use otp_core::services::verification::MockVerificationProvider;

use common::{create_test_context, registered_users};

#[actix_web::test]
async fn test_send_otp_starts_verification() {
    let ctx = create_test_context(MockVerificationProvider::approving(), registered_users());
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/auth/otpsend?mobile_number=9999999999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true, "status": "pending" }));
    assert_eq!(ctx.provider.recorded_starts(), vec!["+919999999999".to_string()]);
    assert_eq!(ctx.provider.check_count(), 0);
}

#[actix_web::test]
async fn test_send_otp_missing_mobile_number() {
    let ctx = create_test_context(MockVerificationProvider::approving(), registered_users());
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post().uri("/auth/otpsend").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["field"], "mobile_number");
    assert!(ctx.provider.recorded_starts().is_empty());
}

#[actix_web::test]
async fn test_send_otp_invalid_mobile_number() {
    let ctx = create_test_context(MockVerificationProvider::approving(), registered_users());
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/auth/otpsend?mobile_number=12345")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["message"], "Invalid mobile number");
    assert!(ctx.provider.recorded_starts().is_empty());
}

#[actix_web::test]
async fn test_send_otp_provider_failure() {
    let ctx = create_test_context(MockVerificationProvider::failing(), registered_users());
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/auth/otpsend?mobile_number=9999999999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}
