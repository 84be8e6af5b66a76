use serde::{Deserialize, Serialize};

use crate::domain::order::OrderProduct;

/// Title and description shown to the payer on every QR order.
pub const QR_ORDER_TITLE: &str = "Fiap";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct QrCodeRequest {
	pub external_reference: String,
	pub title:              String,
	pub description:        String,
	pub notification_url:   String,
	pub total_amount:       f64,
	pub items:              Vec<QrCodeItem>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct QrCodeItem {
	pub sku_number:   String,
	pub category:     String,
	pub title:        String,
	pub description:  String,
	pub unit_price:   f64,
	pub quantity:     u32,
	pub total_amount: f64,
}

impl QrCodeRequest {
	pub fn external_reference_for(order_id: u64) -> String {
		format!("order-{order_id}")
	}
}

impl From<&OrderProduct> for QrCodeItem {
	fn from(product: &OrderProduct) -> Self {
		QrCodeItem {
			sku_number:   product.product_id.to_string(),
			category:     product.category.to_string(),
			title:        product.name.clone(),
			description:  product.description.clone(),
			unit_price:   product.price,
			quantity:     product.quantity,
			total_amount: f64::from(product.quantity) * product.price,
		}
	}
}
