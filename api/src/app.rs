//! Application factory
//!
//! Builds the actix-web application around an already wired `AppState`.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::handlers::error::{json_error_handler, query_error_handler};
use crate::middleware::cors::create_cors;
use crate::routes::auth::{otp_send::otp_send, otp_verify::otp_verify, AppState};

use otp_core::repositories::UserRepository;
use otp_core::services::token::TokenIssuer;
use otp_core::services::verification::VerificationProvider;
use otp_shared::AppConfig;

/// Create and configure the application with all dependencies
pub fn create_app<P, U, T>(
    app_state: web::Data<AppState<P, U, T>>,
    config: &AppConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: VerificationProvider + ?Sized + 'static,
    U: UserRepository + ?Sized + 'static,
    T: TokenIssuer + ?Sized + 'static,
{
    let cors = create_cors(config.environment);

    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);
    let query_config = web::QueryConfig::default().error_handler(query_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(query_config)
        // Logger runs outermost so it also sees CORS rejections
        .wrap(cors)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/auth")
                .route("/otpsend", web::post().to(otp_send::<P, U, T>))
                .route("/otpverify", web::post().to(otp_verify::<P, U, T>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "otp-verify-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
