use log::info;

use crate::domain::errors::PaymentError;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::UpdatePaymentStatusCommand;

/// Read-modify-write of a payment status. Transitions are not checked and
/// concurrent updates of the same order are last-write-wins.
#[derive(Clone)]
pub struct UpdatePaymentStatusUseCase<R: PaymentRepository> {
	payment_repo: R,
}

impl<R: PaymentRepository> UpdatePaymentStatusUseCase<R> {
	pub fn new(payment_repo: R) -> Self {
		Self { payment_repo }
	}

	pub async fn execute(
		&self,
		command: UpdatePaymentStatusCommand,
	) -> Result<(), PaymentError> {
		let mut payment = self
			.payment_repo
			.get_payment_by_order_id(command.order_id)
			.await?;

		let previous =
			std::mem::replace(&mut payment.status, command.status.to_string());
		let payment_id = payment.id;

		self.payment_repo.update_payment(payment).await?;

		info!(
			"Payment {payment_id} for order {} moved from '{previous}' to '{}'",
			command.order_id, command.status
		);
		Ok(())
	}
}
