use async_trait::async_trait;

use crate::domain::errors::PaymentError;
use crate::domain::qr_code::QrCodeRequest;

#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
	/// Registers the order with the gateway and returns the opaque data to
	/// render as a QR code.
	async fn generate_qr_code(
		&self,
		request: QrCodeRequest,
	) -> Result<String, PaymentError>;
}
