use serde::Deserialize;

use crate::infrastructure::gateways::mercado_pago_gateway::GatewayConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub redis_url:            String,
	pub server_port:          u16,
	pub server_keepalive:     u64,
	pub order_service_url:    String,
	#[serde(default)]
	pub gateway_base_url:     String,
	#[serde(default)]
	pub gateway_access_token: String,
	#[serde(default)]
	pub gateway_client_id:    String,
	#[serde(default)]
	pub gateway_pos_id:       String,
	#[serde(default)]
	pub webhook_callback_url: String,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		Self::load_from(config::Environment::with_prefix("APP"))
	}

	pub fn load_from(
		environment: config::Environment,
	) -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("redis_url", "redis://127.0.0.1/")?
			.set_default("server_port", 8082)?
			.set_default("server_keepalive", 75)?
			.set_default("order_service_url", "http://localhost:8081")?
			.add_source(environment)
			.build()?;

		config_builder.try_deserialize()
	}

	pub fn gateway(&self) -> GatewayConfig {
		GatewayConfig {
			base_url:     self.gateway_base_url.clone(),
			access_token: self.gateway_access_token.clone(),
			client_id:    self.gateway_client_id.clone(),
			pos_id:       self.gateway_pos_id.clone(),
		}
	}
}
