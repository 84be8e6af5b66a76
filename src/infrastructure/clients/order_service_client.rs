use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::domain::errors::PaymentError;
use crate::domain::order::Order;
use crate::domain::order_service::OrderService;
use crate::infrastructure::http::{decode_json, remote_error};

#[derive(Debug, Serialize)]
struct OrderStatusUpdate {
	status: u32,
}

/// HTTP client for the order service. Every call is a single attempt with
/// the transport's default timeout.
#[derive(Clone)]
pub struct OrderServiceClient {
	http_client: Client,
	base_url:    String,
}

impl OrderServiceClient {
	pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
		Self {
			http_client,
			base_url: base_url.into(),
		}
	}

	fn order_url(&self, order_id: u64) -> String {
		format!("{}/v1/order/{order_id}", self.base_url.trim_end_matches('/'))
	}
}

#[async_trait]
impl OrderService for OrderServiceClient {
	async fn get_order(&self, order_id: u64) -> Result<Order, PaymentError> {
		let url = self.order_url(order_id);
		debug!("Fetching order {order_id} from {url}");

		let response = self.http_client.get(&url).send().await?;

		if response.status() != StatusCode::OK {
			let err = remote_error(response).await;
			error!("Failed to get order {order_id}: {err}");
			return Err(err);
		}

		decode_json(response).await
	}

	async fn update_order_status(
		&self,
		order_id: u64,
		status: u32,
	) -> Result<(), PaymentError> {
		let url = format!("{}/status", self.order_url(order_id));
		debug!("Updating order {order_id} status to {status}");

		let response = self
			.http_client
			.put(&url)
			.json(&OrderStatusUpdate { status })
			.send()
			.await?;

		match response.status() {
			StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
			_ => {
				let err = remote_error(response).await;
				error!("Failed to update order {order_id} status: {err}");
				Err(err)
			}
		}
	}
}
