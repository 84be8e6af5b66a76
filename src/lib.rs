pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use log::{error, info};
use reqwest::Client;

use crate::adapters::web::routes;
use crate::infrastructure::clients::order_service_client::OrderServiceClient;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::gateways::mercado_pago_gateway::MercadoPagoGateway;
use crate::infrastructure::persistence::redis_payment_repository::RedisPaymentRepository;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::get_payment::GetPaymentUseCase;
use crate::use_cases::get_payment_status::GetPaymentStatusUseCase;
use crate::use_cases::handle_webhook::HandleWebhookUseCase;
use crate::use_cases::update_payment_status::UpdatePaymentStatusUseCase;

pub async fn run(config: Arc<Config>) -> io::Result<()> {
	let redis_client = redis::Client::open(config.redis_url.as_str())
		.map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
	let http_client = Client::new();

	let payment_gateway =
		MercadoPagoGateway::new(http_client.clone(), config.gateway())
			.map_err(|e| {
				error!("Payment gateway is not configured: {e}");
				io::Error::new(io::ErrorKind::InvalidInput, e)
			})?;
	let payment_repo = RedisPaymentRepository::new(redis_client);
	let order_service =
		OrderServiceClient::new(http_client, config.order_service_url.clone());

	let create_payment_use_case = web::Data::new(CreatePaymentUseCase::new(
		payment_repo.clone(),
		order_service.clone(),
		payment_gateway,
		config.webhook_callback_url.clone(),
	));
	let get_payment_use_case =
		web::Data::new(GetPaymentUseCase::new(payment_repo.clone()));
	let get_payment_status_use_case =
		web::Data::new(GetPaymentStatusUseCase::new(payment_repo.clone()));
	let handle_webhook_use_case = web::Data::new(HandleWebhookUseCase::new(
		UpdatePaymentStatusUseCase::new(payment_repo),
		order_service,
	));

	info!("Starting Actix-Web server on 0.0.0.0:{}...", config.server_port);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.app_data(create_payment_use_case.clone())
			.app_data(get_payment_use_case.clone())
			.app_data(get_payment_status_use_case.clone())
			.app_data(handle_webhook_use_case.clone())
			.configure(
				routes::<
					RedisPaymentRepository,
					OrderServiceClient,
					MercadoPagoGateway,
				>,
			)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind(("0.0.0.0", config.server_port))?
	.run()
	.await
}
