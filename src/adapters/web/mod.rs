pub mod errors;
pub mod payments_handler;
pub mod schema;
pub mod webhook_handler;

use actix_web::web;
use log::warn;

use crate::adapters::web::errors::ApiError;
use crate::domain::order_service::OrderService;
use crate::domain::payment_gateway::PaymentGateway;
use crate::domain::repository::PaymentRepository;

/// Rejects unreadable JSON bodies with a plain 400.
pub fn json_config() -> web::JsonConfig {
	web::JsonConfig::default().error_handler(|err, _req| {
		warn!("Rejected request payload: {err}");
		ApiError::BadClientDataError.into()
	})
}

/// Registers the payment and webhook routes. The use cases they rely on
/// must be added as `web::Data` by the caller.
pub fn routes<R, O, G>(cfg: &mut web::ServiceConfig)
where
	R: PaymentRepository,
	O: OrderService,
	G: PaymentGateway,
{
	cfg.app_data(json_config())
		.service(
			web::resource("/v1/payment")
				.route(web::post().to(payments_handler::create_payment::<R, O, G>)),
		)
		.service(
			web::resource("/v1/payment/{order_id}/status")
				.route(web::get().to(payments_handler::get_payment_status::<R>)),
		)
		.service(
			web::resource("/v1/payment/{order_id}")
				.route(web::get().to(payments_handler::get_payment::<R>)),
		)
		.service(
			web::resource("/payment/webhooks/notify")
				.route(web::post().to(webhook_handler::handle_webhook::<R, O>)),
		);
}
