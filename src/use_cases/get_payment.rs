use crate::domain::errors::PaymentError;
use crate::domain::payment::Payment;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::GetPaymentQuery;

#[derive(Clone)]
pub struct GetPaymentUseCase<R: PaymentRepository> {
	payment_repo: R,
}

impl<R: PaymentRepository> GetPaymentUseCase<R> {
	pub fn new(payment_repo: R) -> Self {
		Self { payment_repo }
	}

	pub async fn execute(
		&self,
		query: GetPaymentQuery,
	) -> Result<Payment, PaymentError> {
		self.payment_repo
			.get_payment_by_order_id(query.order_id)
			.await
	}
}
