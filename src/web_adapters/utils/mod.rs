use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use tracing::{event, Level};
use use_cases::UseCaseError;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

///Bad Request
pub fn response_400(error_message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        success: false,
        error: error_message.to_string(),
    })
}

/// NotFound
pub fn response_404(error_message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        success: false,
        error: error_message.to_string(),
    })
}

/// Internal Server Error: with logging
pub fn response_500(error_message: String) -> HttpResponse {
    event!(target: "backend", Level::ERROR, "{}", error_message);
    HttpResponse::InternalServerError().json(ErrorResponse {
        success: false,
        error: error_message,
    })
}

/// The store never came up; every data endpoint answers this instead of
/// crashing the process.
pub fn response_db_unavailable() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        success: false,
        error: "Database service not available".to_string(),
    })
}

pub fn handle_use_case_error(e: UseCaseError) -> HttpResponse {
    match e {
        UseCaseError::BadRequest(message) => response_400(&message),
        UseCaseError::NotFound(message) => response_404(&message),
        UseCaseError::InternalServerError(message) => response_500(message),
    }
}
