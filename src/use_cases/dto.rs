use crate::domain::payment::PaymentStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePaymentCommand {
	pub order_id:     u64,
	pub total:        f64,
	pub payment_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GetPaymentQuery {
	pub order_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GetPaymentStatusQuery {
	pub order_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdatePaymentStatusCommand {
	pub order_id: u64,
	pub status:   PaymentStatus,
}

/// A gateway notification as received: `id` is expected to hold the order
/// id, `topic` decides the resulting payment status.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleWebhookCommand {
	pub id:    String,
	pub topic: String,
}
