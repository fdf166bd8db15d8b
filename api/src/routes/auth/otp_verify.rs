use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{
    FieldLocation, MobileNumberQuery, OtpVerifyRequest, OtpVerifyResponse, ValidationErrorResponse,
};
use crate::handlers::error::{field_errors, handle_domain_error};

use otp_core::repositories::UserRepository;
use otp_core::services::token::TokenIssuer;
use otp_core::services::verification::VerificationProvider;
use otp_shared::phone::mask_phone_number;

use super::AppState;

/// Handler for POST /auth/otpverify?mobile_number=...
///
/// Checks an SMS code with the verification provider and, when approved,
/// issues an auth token for the user registered under the mobile number.
///
/// # Request Body
///
/// ```json
/// { "code": "123456" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "authToken": "eyJhbGciOiJIUzI1NiIs...",
///     "expiresIn": 604800
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `{ "errors": [...] }` for a malformed code or number
/// - 400 Bad Request: `{ "success": false, "error": "Invalid OTP" }`
/// - 404 Not Found: approved code but no registered user
/// - 502 Bad Gateway: verification provider unreachable or failing
/// - 500 Internal Server Error: user directory or token signing failure
pub async fn otp_verify<P, U, T>(
    state: web::Data<AppState<P, U, T>>,
    query: web::Query<MobileNumberQuery>,
    request: web::Json<OtpVerifyRequest>,
) -> HttpResponse
where
    P: VerificationProvider + ?Sized + 'static,
    U: UserRepository + ?Sized + 'static,
    T: TokenIssuer + ?Sized + 'static,
{
    let mut errors = Vec::new();
    if let Err(e) = query.validate() {
        errors.extend(field_errors(&e, FieldLocation::Query));
    }
    if let Err(e) = request.validate() {
        errors.extend(field_errors(&e, FieldLocation::Body));
    }
    if !errors.is_empty() {
        log::warn!(
            "Validation failed for otpverify request for {}: {} error(s)",
            mask_phone_number(&query.mobile_number),
            errors.len()
        );
        return ValidationErrorResponse::new(errors).to_response();
    }

    log::info!(
        "Processing otpverify request for {}",
        mask_phone_number(&query.mobile_number)
    );

    match state
        .otp_service
        .verify_otp(&query.mobile_number, &request.code)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(OtpVerifyResponse {
            success: true,
            auth_token: token.token,
            expires_in: token.expires_in,
        }),
        Err(error) => handle_domain_error(
            error,
            &[
                ("mobile_number", query.mobile_number.as_str()),
                ("code", request.code.as_str()),
            ],
        ),
    }
}
