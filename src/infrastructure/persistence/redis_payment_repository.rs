use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use redis::{AsyncCommands, Client, Script};
use time::OffsetDateTime;

use crate::domain::errors::PaymentError;
use crate::domain::payment::{NewPayment, Payment};
use crate::domain::repository::PaymentRepository;
use crate::infrastructure::config::redis::{
	PAYMENT_ID_SEQUENCE_KEY, order_payments_key, payment_key,
};

impl From<redis::RedisError> for PaymentError {
	fn from(err: redis::RedisError) -> Self {
		PaymentError::Storage(err.to_string())
	}
}

/// Overwrites the payment hash only when it already exists.
const UPDATE_PAYMENT_LUA: &str = r#"
    if redis.call("EXISTS", KEYS[1]) == 0 then
        return 0
    end

    redis.call("HSET", KEYS[1],
        "created_at", ARGV[1],
        "order_id", ARGV[2],
        "total", ARGV[3],
        "type", ARGV[4],
        "status", ARGV[5])

    return 1
"#;

#[derive(Clone)]
pub struct RedisPaymentRepository {
	client: Client,
}

impl RedisPaymentRepository {
	pub fn new(client: Client) -> Self {
		Self { client }
	}

	async fn connection(
		&self,
	) -> Result<redis::aio::MultiplexedConnection, PaymentError> {
		Ok(self.client.get_multiplexed_async_connection().await?)
	}

	fn payment_fields(payment: &Payment) -> [(&'static str, String); 6] {
		[
			("id", payment.id.to_string()),
			(
				"created_at",
				payment.created_at.unix_timestamp_nanos().to_string(),
			),
			("order_id", payment.order_id.to_string()),
			("total", payment.total.to_string()),
			("type", payment.payment_type.clone()),
			("status", payment.status.clone()),
		]
	}

	fn payment_from_hash(
		map: &HashMap<String, String>,
	) -> Result<Payment, PaymentError> {
		fn field<'a>(
			map: &'a HashMap<String, String>,
			name: &str,
		) -> Result<&'a str, PaymentError> {
			map.get(name).map(String::as_str).ok_or_else(|| {
				PaymentError::Storage(format!("Stored payment misses '{name}'"))
			})
		}

		fn corrupt(name: &str) -> PaymentError {
			PaymentError::Storage(format!("Stored payment has an invalid '{name}'"))
		}

		let created_at = field(map, "created_at")?
			.parse::<i128>()
			.ok()
			.and_then(|nanos| OffsetDateTime::from_unix_timestamp_nanos(nanos).ok())
			.ok_or_else(|| corrupt("created_at"))?;

		Ok(Payment {
			id: field(map, "id")?.parse().map_err(|_| corrupt("id"))?,
			created_at,
			order_id: field(map, "order_id")?
				.parse()
				.map_err(|_| corrupt("order_id"))?,
			total: field(map, "total")?.parse().map_err(|_| corrupt("total"))?,
			payment_type: field(map, "type")?.to_string(),
			status: field(map, "status")?.to_string(),
		})
	}
}

#[async_trait]
impl PaymentRepository for RedisPaymentRepository {
	async fn add_payment(
		&self,
		payment: NewPayment,
	) -> Result<Payment, PaymentError> {
		let mut con = self.connection().await?;

		let id: u64 = con.incr(PAYMENT_ID_SEQUENCE_KEY, 1).await?;
		let stored = Payment {
			id,
			created_at: OffsetDateTime::now_utc(),
			order_id: payment.order_id,
			total: payment.total,
			payment_type: payment.payment_type,
			status: payment.status,
		};

		redis::pipe()
			.atomic()
			.hset_multiple(payment_key(id), &Self::payment_fields(&stored))
			.ignore()
			.rpush(order_payments_key(stored.order_id), id)
			.ignore()
			.query_async::<()>(&mut con)
			.await?;

		debug!("Stored payment {id} for order {}", stored.order_id);
		Ok(stored)
	}

	async fn get_payment_by_order_id(
		&self,
		order_id: u64,
	) -> Result<Payment, PaymentError> {
		let mut con = self.connection().await?;

		let first_id: Option<u64> =
			con.lindex(order_payments_key(order_id), 0).await?;
		let Some(payment_id) = first_id else {
			return Err(PaymentError::NotFound(order_id));
		};

		let map: HashMap<String, String> =
			con.hgetall(payment_key(payment_id)).await?;
		if map.is_empty() {
			return Err(PaymentError::NotFound(order_id));
		}

		Self::payment_from_hash(&map)
	}

	async fn update_payment(&self, payment: Payment) -> Result<(), PaymentError> {
		let mut con = self.connection().await?;

		let updated: i32 = Script::new(UPDATE_PAYMENT_LUA)
			.key(payment_key(payment.id))
			.arg(payment.created_at.unix_timestamp_nanos().to_string())
			.arg(payment.order_id)
			.arg(payment.total.to_string())
			.arg(&payment.payment_type)
			.arg(&payment.status)
			.invoke_async(&mut con)
			.await?;

		if updated == 0 {
			return Err(PaymentError::UnknownPayment(payment.id));
		}

		debug!("Payment {} set to '{}'", payment.id, payment.status);
		Ok(())
	}
}
