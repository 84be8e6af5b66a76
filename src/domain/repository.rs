use async_trait::async_trait;

use crate::domain::errors::PaymentError;
use crate::domain::payment::{NewPayment, Payment};

#[async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
	/// Stores a new payment, assigning its id and creation time.
	async fn add_payment(
		&self,
		payment: NewPayment,
	) -> Result<Payment, PaymentError>;

	/// Returns the first payment stored for `order_id`.
	async fn get_payment_by_order_id(
		&self,
		order_id: u64,
	) -> Result<Payment, PaymentError>;

	/// Overwrites an existing payment, keyed by its id. Fails with
	/// [`PaymentError::UnknownPayment`] when no payment has that id.
	async fn update_payment(&self, payment: Payment) -> Result<(), PaymentError>;
}
