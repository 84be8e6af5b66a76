use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::payment::Payment;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreatePaymentRequest {
	pub order_id:     u64,
	pub total:        f64,
	#[serde(rename = "type")]
	pub payment_type: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PaymentResponse {
	pub id:           u64,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at:   OffsetDateTime,
	pub order_id:     u64,
	pub total:        f64,
	#[serde(rename = "type")]
	pub payment_type: String,
	pub status:       String,
}

impl From<Payment> for PaymentResponse {
	fn from(payment: Payment) -> Self {
		PaymentResponse {
			id:           payment.id,
			created_at:   payment.created_at,
			order_id:     payment.order_id,
			total:        payment.total,
			payment_type: payment.payment_type,
			status:       payment.status,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WebhookNotificationRequest {
	pub id:    String,
	#[serde(default)]
	pub topic: String,
}
