use async_trait::async_trait;
use log::{error, info};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::domain::errors::PaymentError;
use crate::domain::payment_gateway::PaymentGateway;
use crate::domain::qr_code::QrCodeRequest;
use crate::infrastructure::http::{decode_json, remote_error};

/// Credentials and identifiers of the in-store QR point of sale.
#[derive(Clone)]
pub struct GatewayConfig {
	pub base_url:     String,
	pub access_token: String,
	pub client_id:    String,
	pub pos_id:       String,
}

impl GatewayConfig {
	pub fn validate(&self) -> Result<(), PaymentError> {
		let blank: Vec<&str> = [
			("gateway_base_url", &self.base_url),
			("gateway_access_token", &self.access_token),
			("gateway_client_id", &self.client_id),
			("gateway_pos_id", &self.pos_id),
		]
		.into_iter()
		.filter(|(_, value)| value.trim().is_empty())
		.map(|(name, _)| name)
		.collect();

		if blank.is_empty() {
			Ok(())
		} else {
			Err(PaymentError::Config(blank.join(", ")))
		}
	}
}

#[derive(Debug, Deserialize)]
struct QrCodeResponse {
	qr_data: String,
}

#[derive(Clone)]
pub struct MercadoPagoGateway {
	http_client: Client,
	config:      GatewayConfig,
}

impl MercadoPagoGateway {
	pub fn new(
		http_client: Client,
		config: GatewayConfig,
	) -> Result<Self, PaymentError> {
		config.validate()?;

		Ok(Self {
			http_client,
			config,
		})
	}

	fn qr_orders_url(&self) -> String {
		format!(
			"{}/instore/orders/qr/seller/collectors/{}/pos/{}/qrs",
			self.config.base_url.trim_end_matches('/'),
			self.config.client_id,
			self.config.pos_id
		)
	}
}

#[async_trait]
impl PaymentGateway for MercadoPagoGateway {
	async fn generate_qr_code(
		&self,
		request: QrCodeRequest,
	) -> Result<String, PaymentError> {
		let response = self
			.http_client
			.post(self.qr_orders_url())
			.bearer_auth(&self.config.access_token)
			.json(&request)
			.send()
			.await?;

		if response.status() != StatusCode::CREATED {
			let err = remote_error(response).await;
			error!(
				"Failed to generate QR code for {}: {err}",
				request.external_reference
			);
			return Err(err);
		}

		let qr_code: QrCodeResponse = decode_json(response).await?;
		info!("QR code generated for {}", request.external_reference);

		Ok(qr_code.qr_data)
	}
}
