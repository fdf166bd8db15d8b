use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{FieldLocation, MobileNumberQuery, OtpSendResponse, ValidationErrorResponse};
use crate::handlers::error::{field_errors, handle_domain_error};

use otp_core::repositories::UserRepository;
use otp_core::services::token::TokenIssuer;
use otp_core::services::verification::VerificationProvider;
use otp_shared::phone::mask_phone_number;

use super::AppState;

/// Handler for POST /auth/otpsend?mobile_number=...
///
/// Asks the verification provider to text a fresh code to the number.
/// Responds `{ "success": true, "status": "pending" }` on success.
pub async fn otp_send<P, U, T>(
    state: web::Data<AppState<P, U, T>>,
    query: web::Query<MobileNumberQuery>,
) -> HttpResponse
where
    P: VerificationProvider + ?Sized + 'static,
    U: UserRepository + ?Sized + 'static,
    T: TokenIssuer + ?Sized + 'static,
{
    if let Err(e) = query.validate() {
        return ValidationErrorResponse::new(field_errors(&e, FieldLocation::Query)).to_response();
    }

    log::info!(
        "Processing otpsend request for {}",
        mask_phone_number(&query.mobile_number)
    );

    match state.otp_service.send_otp(&query.mobile_number).await {
        Ok(check) => HttpResponse::Ok().json(OtpSendResponse {
            success: true,
            status: check.status.to_string(),
        }),
        Err(error) => handle_domain_error(
            error,
            &[("mobile_number", query.mobile_number.as_str())],
        ),
    }
}
