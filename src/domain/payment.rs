use derive_more::derive::Display;
use time::OffsetDateTime;

/// Topics the gateway sends for a charge that went through.
const APPROVED_TOPICS: [&str; 2] = ["payment.created", "payment.updated"];

/// A stored payment. `status` stays an open string so that whatever is in
/// the store can always be read back.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
	pub id:           u64,
	pub created_at:   OffsetDateTime,
	pub order_id:     u64,
	pub total:        f64,
	pub payment_type: String,
	pub status:       String,
}

/// A payment that has not been assigned an id nor a creation time yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
	pub order_id:     u64,
	pub total:        f64,
	pub payment_type: String,
	pub status:       String,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
	#[display("pending")]
	Pending,
	#[display("Approved")]
	Approved,
	#[display("Declined")]
	Declined,
}

impl PaymentStatus {
	/// Maps a webhook topic to a payment status. Total over any input:
	/// unknown topics, including the empty one, decline the payment.
	pub fn from_webhook_topic(topic: &str) -> Self {
		if APPROVED_TOPICS.contains(&topic) {
			PaymentStatus::Approved
		} else {
			PaymentStatus::Declined
		}
	}

	pub fn is_approved(&self) -> bool {
		matches!(self, PaymentStatus::Approved)
	}
}
