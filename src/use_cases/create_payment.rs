use log::{error, info};

use crate::domain::errors::PaymentError;
use crate::domain::order_service::OrderService;
use crate::domain::payment::{NewPayment, PaymentStatus};
use crate::domain::payment_gateway::PaymentGateway;
use crate::domain::qr_code::{QR_ORDER_TITLE, QrCodeItem, QrCodeRequest};
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::CreatePaymentCommand;

/// Registers a pending payment for an order and asks the gateway for the QR
/// code the customer pays with.
///
/// The steps run in sequence and nothing is undone when a later one fails:
/// the pending payment stays stored if the order lookup or the gateway call
/// fails, and is only moved on by a webhook or by hand.
#[derive(Clone)]
pub struct CreatePaymentUseCase<R, O, G>
where
	R: PaymentRepository,
	O: OrderService,
	G: PaymentGateway,
{
	payment_repo:     R,
	order_service:    O,
	payment_gateway:  G,
	notification_url: String,
}

impl<R, O, G> CreatePaymentUseCase<R, O, G>
where
	R: PaymentRepository,
	O: OrderService,
	G: PaymentGateway,
{
	pub fn new(
		payment_repo: R,
		order_service: O,
		payment_gateway: G,
		notification_url: impl Into<String>,
	) -> Self {
		Self {
			payment_repo,
			order_service,
			payment_gateway,
			notification_url: notification_url.into(),
		}
	}

	pub async fn execute(
		&self,
		command: CreatePaymentCommand,
	) -> Result<String, PaymentError> {
		let payment = self
			.payment_repo
			.add_payment(NewPayment {
				order_id:     command.order_id,
				total:        command.total,
				payment_type: command.payment_type,
				status:       PaymentStatus::Pending.to_string(),
			})
			.await?;

		info!(
			"Payment {} registered as pending for order {}",
			payment.id, payment.order_id
		);

		let order = self
			.order_service
			.get_order(payment.order_id)
			.await
			.inspect_err(|e| {
				error!(
					"Order {} lookup failed, payment {} left pending: {e}",
					payment.order_id, payment.id
				)
			})?;

		let items = order.products.iter().map(QrCodeItem::from).collect();

		// The order service is the source of truth for the charged amount.
		let request = QrCodeRequest {
			external_reference: QrCodeRequest::external_reference_for(order.id),
			title:              QR_ORDER_TITLE.to_string(),
			description:        QR_ORDER_TITLE.to_string(),
			notification_url:   self.notification_url.clone(),
			total_amount:       order.total_amount,
			items,
		};

		self.payment_gateway
			.generate_qr_code(request)
			.await
			.inspect_err(|e| {
				error!(
					"QR code request for order {} failed, payment {} left \
					 pending: {e}",
					order.id, payment.id
				)
			})
	}
}
