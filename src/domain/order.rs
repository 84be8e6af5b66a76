use serde::{Deserialize, Deserializer, Serialize};

/// Order status code the order service uses for "now preparing".
pub const ORDER_STATUS_PREPARING: u32 = 2;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Order {
	pub id:           u64,
	pub total_amount: f64,
	#[serde(default, deserialize_with = "null_as_default")]
	pub products:     Vec<OrderProduct>,
}

/// Line item as the order service reports it. Missing or `null` fields
/// decode to their zero value.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct OrderProduct {
	#[serde(deserialize_with = "null_as_default")]
	pub product_id:  u64,
	#[serde(deserialize_with = "null_as_default")]
	pub price:       f64,
	#[serde(deserialize_with = "null_as_default")]
	pub quantity:    u32,
	#[serde(deserialize_with = "null_as_default")]
	pub name:        String,
	#[serde(deserialize_with = "null_as_default")]
	pub image_link:  String,
	#[serde(deserialize_with = "null_as_default")]
	pub description: String,
	#[serde(deserialize_with = "null_as_default")]
	pub category:    i32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
