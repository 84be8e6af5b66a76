use log::{error, info, warn};

use crate::domain::errors::PaymentError;
use crate::domain::order::ORDER_STATUS_PREPARING;
use crate::domain::order_service::OrderService;
use crate::domain::payment::PaymentStatus;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::{HandleWebhookCommand, UpdatePaymentStatusCommand};
use crate::use_cases::update_payment_status::UpdatePaymentStatusUseCase;

/// Applies a gateway notification to the stored payment and, for approved
/// payments, moves the order to "preparing".
///
/// The payment update is committed before the order service is called. If
/// that call fails the error is returned but the payment keeps its new
/// status, so payment and order can disagree until someone reconciles them.
#[derive(Clone)]
pub struct HandleWebhookUseCase<R, O>
where
	R: PaymentRepository,
	O: OrderService,
{
	update_payment_status: UpdatePaymentStatusUseCase<R>,
	order_service:         O,
}

impl<R, O> HandleWebhookUseCase<R, O>
where
	R: PaymentRepository,
	O: OrderService,
{
	pub fn new(
		update_payment_status: UpdatePaymentStatusUseCase<R>,
		order_service: O,
	) -> Self {
		Self {
			update_payment_status,
			order_service,
		}
	}

	pub async fn execute(
		&self,
		command: HandleWebhookCommand,
	) -> Result<(), PaymentError> {
		let order_id: u64 = command.id.parse().map_err(|_| {
			warn!("Ignoring notification with non-numeric id '{}'", command.id);
			PaymentError::Validation(format!(
				"notification id '{}' is not an order id",
				command.id
			))
		})?;

		let status = PaymentStatus::from_webhook_topic(&command.topic);

		self.update_payment_status
			.execute(UpdatePaymentStatusCommand { order_id, status })
			.await?;

		if !status.is_approved() {
			return Ok(());
		}

		match self
			.order_service
			.update_order_status(order_id, ORDER_STATUS_PREPARING)
			.await
		{
			Ok(()) => {
				info!("Order {order_id} moved to preparing");
				Ok(())
			}
			Err(e) => {
				error!(
					"Payment for order {order_id} is {status} but the order \
					 status update failed: {e}"
				);
				Err(wrap_order_status_error(e))
			}
		}
	}
}

fn wrap_order_status_error(err: PaymentError) -> PaymentError {
	match err {
		PaymentError::Remote { status, body } => PaymentError::Remote {
			status,
			body: format!("failed to update order status: {body}"),
		},
		other => PaymentError::Remote {
			status: None,
			body:   format!("failed to update order status: {other}"),
		},
	}
}
