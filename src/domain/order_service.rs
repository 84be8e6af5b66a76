use async_trait::async_trait;

use crate::domain::errors::PaymentError;
use crate::domain::order::Order;

#[async_trait]
pub trait OrderService: Send + Sync + 'static {
	async fn get_order(&self, order_id: u64) -> Result<Order, PaymentError>;
	async fn update_order_status(
		&self,
		order_id: u64,
		status: u32,
	) -> Result<(), PaymentError>;
}
