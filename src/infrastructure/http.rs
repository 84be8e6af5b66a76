use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::domain::errors::PaymentError;

impl From<reqwest::Error> for PaymentError {
	fn from(err: reqwest::Error) -> Self {
		PaymentError::Remote {
			status: err.status().map(|status| status.as_u16()),
			body:   err.to_string(),
		}
	}
}

/// Turns an unexpected response into a [`PaymentError::Remote`] carrying the
/// upstream status and body.
pub async fn remote_error(response: Response) -> PaymentError {
	let status = response.status().as_u16();
	let body = response.text().await.unwrap_or_default();

	PaymentError::remote(status, body)
}

/// Reads the whole body and decodes it as JSON. Failing to read the body is
/// a remote failure, a body that does not parse is a decode failure.
pub async fn decode_json<T: DeserializeOwned>(
	response: Response,
) -> Result<T, PaymentError> {
	let body = response.bytes().await?;

	serde_json::from_slice(&body).map_err(|e| PaymentError::Decode(e.to_string()))
}
