use crate::errors::AppError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRow(_)
            | AppError::UnknownColumn(_)
            | AppError::InvalidKitId(_)
            | AppError::InvalidSamplerId(_)
            | AppError::InvalidTimestamp(_)
            | AppError::InvalidDate(_)
            | AppError::InvalidSampleType(_)
            | AppError::InvalidTable(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

/// Errors caused by the request itself rather than by the backend.
pub fn is_request_error(e: &AppError) -> bool {
    e.status_code().is_client_error()
}
