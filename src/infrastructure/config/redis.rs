pub const PAYMENT_ID_SEQUENCE_KEY: &str = "payments:next_id";
pub const PAYMENT_KEY_PREFIX: &str = "payment";
pub const ORDER_PAYMENTS_KEY_PREFIX: &str = "payments:order";

pub fn payment_key(payment_id: u64) -> String {
	format!("{PAYMENT_KEY_PREFIX}:{payment_id}")
}

/// Ids of the payments stored for an order, in insertion order.
pub fn order_payments_key(order_id: u64) -> String {
	format!("{ORDER_PAYMENTS_KEY_PREFIX}:{order_id}")
}
