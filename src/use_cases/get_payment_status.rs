use crate::domain::errors::PaymentError;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::GetPaymentStatusQuery;

#[derive(Clone)]
pub struct GetPaymentStatusUseCase<R: PaymentRepository> {
	payment_repo: R,
}

impl<R: PaymentRepository> GetPaymentStatusUseCase<R> {
	pub fn new(payment_repo: R) -> Self {
		Self { payment_repo }
	}

	/// Returns the stored status verbatim.
	pub async fn execute(
		&self,
		query: GetPaymentStatusQuery,
	) -> Result<String, PaymentError> {
		let payment = self
			.payment_repo
			.get_payment_by_order_id(query.order_id)
			.await?;

		Ok(payment.status)
	}
}
