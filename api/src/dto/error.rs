use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};

/// Outcome-level failure: `{ "success": false, "error": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

impl FailureResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }

    pub fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

/// Where an invalid field was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLocation {
    Query,
    Body,
}

/// One violated request constraint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub location: FieldLocation,
    pub message: String,
    /// Offending value as received, `null` when absent
    pub value: serde_json::Value,
}

/// Shape violations: `{ "errors": [...] }`, always with HTTP 400
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

impl ValidationErrorResponse {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn to_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(self)
    }
}
