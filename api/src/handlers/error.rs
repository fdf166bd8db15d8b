use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;

use otp_core::errors::{AuthError, DomainError, ValidationError};

use crate::dto::{FailureResponse, FieldError, FieldLocation, ValidationErrorResponse};

/// Fixed client-facing messages
pub const INVALID_OTP: &str = "Invalid OTP";
pub const USER_NOT_FOUND: &str = "User not found";
pub const SERVICE_UNAVAILABLE: &str = "Verification service unavailable";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// `mobile_number` travels in the query string, everything else in the body
fn location_of(field: &str) -> FieldLocation {
    match field {
        "mobile_number" => FieldLocation::Query,
        _ => FieldLocation::Body,
    }
}

fn describe(error: &ValidationError) -> String {
    match error {
        ValidationError::RequiredField { field } => format!("{} is required", field),
        ValidationError::InvalidFormat { field } if field == "mobile_number" => {
            "Invalid mobile number".to_string()
        }
        ValidationError::InvalidFormat { field } => format!("Invalid {}", field),
        ValidationError::InvalidLength {
            field, expected, ..
        } => format!("{} must be exactly {} characters", field, expected),
        ValidationError::PatternMismatch { field } => {
            format!("{} must contain only digits", field)
        }
    }
}

/// Convert `validator` errors of one request part into field errors
pub fn field_errors(
    errors: &validator::ValidationErrors,
    location: FieldLocation,
) -> Vec<FieldError> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            let field = field.to_string();
            errors.iter().map(move |e| FieldError {
                field: field.clone(),
                location,
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
                value: e.params.get("value").cloned().unwrap_or(Value::Null),
            })
        })
        .collect()
}

/// Map a domain error to its HTTP response
///
/// `values` pairs field names with the raw values the client sent, so
/// validation failures can echo them back.
pub fn handle_domain_error(error: DomainError, values: &[(&str, &str)]) -> HttpResponse {
    match error {
        DomainError::InvalidInput { errors } => {
            log::warn!("Rejected request: {:?}", errors);
            let errors = errors
                .iter()
                .map(|e| FieldError {
                    field: e.field().to_string(),
                    location: location_of(e.field()),
                    message: describe(e),
                    value: values
                        .iter()
                        .find(|(name, _)| *name == e.field())
                        .map(|(_, v)| Value::String(v.to_string()))
                        .unwrap_or(Value::Null),
                })
                .collect();
            ValidationErrorResponse::new(errors).to_response()
        }
        DomainError::Auth(AuthError::InvalidOtp) => {
            FailureResponse::new(INVALID_OTP).to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Auth(AuthError::UserNotFound) => {
            FailureResponse::new(USER_NOT_FOUND).to_response(StatusCode::NOT_FOUND)
        }
        DomainError::Auth(AuthError::VerificationServiceUnavailable { reason }) => {
            log::error!("Verification provider failure: {}", reason);
            FailureResponse::new(SERVICE_UNAVAILABLE).to_response(StatusCode::BAD_GATEWAY)
        }
        error @ (DomainError::Internal { .. } | DomainError::Token(_)) => {
            log::error!("Domain Error: {:?}", error);
            FailureResponse::new(INTERNAL_ERROR).to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Turns JSON extractor failures (missing body, wrong content type,
/// malformed JSON) into the `errors` body
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Invalid JSON body on {}: {}", req.path(), err);
    let response = ValidationErrorResponse::new(vec![FieldError {
        field: "body".to_string(),
        location: FieldLocation::Body,
        message: err.to_string(),
        value: Value::Null,
    }])
    .to_response();
    InternalError::from_response(err, response).into()
}

/// Turns query-string extractor failures into the `errors` body
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Invalid query string on {}: {}", req.path(), err);
    let response = ValidationErrorResponse::new(vec![FieldError {
        field: "query".to_string(),
        location: FieldLocation::Query,
        message: err.to_string(),
        value: Value::String(req.query_string().to_string()),
    }])
    .to_response();
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_rt::test]
    async fn test_invalid_otp_body_is_exact() {
        let response = handle_domain_error(AuthError::InvalidOtp.into(), &[]);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "success": false, "error": "Invalid OTP" })
        );
    }

    #[actix_rt::test]
    async fn test_status_mapping() {
        let cases = vec![
            (DomainError::from(AuthError::UserNotFound), StatusCode::NOT_FOUND),
            (
                AuthError::VerificationServiceUnavailable {
                    reason: "timeout".to_string(),
                }
                .into(),
                StatusCode::BAD_GATEWAY,
            ),
            (
                DomainError::Internal {
                    message: "db down".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(handle_domain_error(error, &[]).status(), status);
        }
    }

    #[actix_rt::test]
    async fn test_internal_detail_not_leaked() {
        let response = handle_domain_error(
            AuthError::VerificationServiceUnavailable {
                reason: "Twilio returned 503".to_string(),
            }
            .into(),
            &[],
        );
        let body = body_json(response).await;
        assert_eq!(body["error"], SERVICE_UNAVAILABLE);
        assert!(!body.to_string().contains("503"));
    }

    #[actix_rt::test]
    async fn test_invalid_input_echoes_values() {
        let error = DomainError::InvalidInput {
            errors: vec![ValidationError::InvalidFormat {
                field: "mobile_number".to_string(),
            }],
        };
        let response = handle_domain_error(error, &[("mobile_number", "abc")]);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["field"], "mobile_number");
        assert_eq!(body["errors"][0]["location"], "query");
        assert_eq!(body["errors"][0]["value"], "abc");
        assert_eq!(body["errors"][0]["message"], "Invalid mobile number");
    }
}
