use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use log::error;

use crate::domain::errors::PaymentError;

/// Errors surfaced to HTTP callers: a status code and a terse plain-text
/// message, nothing else.
#[derive(Debug, Display, Error, PartialEq)]
pub enum ApiError {
	#[display("Invalid request payload")]
	BadClientDataError,
	#[display("Invalid order id")]
	InvalidOrderIdError,
	#[display("Error processing request")]
	InternalServerError,
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::plaintext())
			.body(self.to_string())
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::BadClientDataError | ApiError::InvalidOrderIdError => {
				StatusCode::BAD_REQUEST
			}
			ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

/// Every workflow failure is a 500: callers cannot tell a missing payment
/// from an unreachable store.
impl From<PaymentError> for ApiError {
	fn from(err: PaymentError) -> Self {
		error!("Request failed: {err}");
		ApiError::InternalServerError
	}
}
