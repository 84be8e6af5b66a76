use derive_more::derive::{Display, Error};

/// Failure kinds shared by the store, the remote clients and the
/// workflows built on top of them.
#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum PaymentError {
	#[display("Invalid input: {_0}")]
	Validation(#[error(not(source))] String),
	#[display("No payment found for order {_0}")]
	NotFound(#[error(not(source))] u64),
	#[display("No payment found with id {_0}")]
	UnknownPayment(#[error(not(source))] u64),
	#[display("Storage failure: {_0}")]
	Storage(#[error(not(source))] String),
	#[display("Remote call failed (status: {status:?}): {body}")]
	Remote { status: Option<u16>, body: String },
	#[display("Could not decode response body: {_0}")]
	Decode(#[error(not(source))] String),
	#[display("Missing configuration: {_0}")]
	Config(#[error(not(source))] String),
}

impl PaymentError {
	pub fn remote(status: u16, body: impl Into<String>) -> Self {
		PaymentError::Remote {
			status: Some(status),
			body:   body.into(),
		}
	}
}
