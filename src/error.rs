use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use thiserror::Error;

use crate::order_batch::ShapeError;

pub const BODY_READ_MESSAGE: &str = "Failed to read body";
pub const INVALID_SHAPE_MESSAGE: &str = "Invalid JSON body - must be an array";

/// Terminal rejections for a create-order request. Both surface as 400 with a
/// plain-text body; the inner detail only ever reaches the log.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Failed to read body: {0}")]
    BodyRead(#[from] actix_web::error::PayloadError),

    #[error("Invalid JSON body - must be an array: {0}")]
    Shape(#[from] ShapeError),
}

impl OrderError {
    pub fn client_message(&self) -> &'static str {
        match self {
            OrderError::BodyRead(_) => BODY_READ_MESSAGE,
            OrderError::Shape(_) => INVALID_SHAPE_MESSAGE,
        }
    }
}

impl ResponseError for OrderError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.client_message())
    }
}
