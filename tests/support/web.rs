use actix_web::web;
use qr_payment_service::adapters::web::routes;
use qr_payment_service::use_cases::create_payment::CreatePaymentUseCase;
use qr_payment_service::use_cases::get_payment::GetPaymentUseCase;
use qr_payment_service::use_cases::get_payment_status::GetPaymentStatusUseCase;
use qr_payment_service::use_cases::handle_webhook::HandleWebhookUseCase;
use qr_payment_service::use_cases::update_payment_status::UpdatePaymentStatusUseCase;

use crate::support::fakes::{
	FakeOrderService, FakePaymentGateway, InMemoryPaymentRepository,
};

pub const CALLBACK_URL: &str = "http://payments/payment/webhooks/notify";

/// Wires every use case over the given doubles and registers the routes.
pub fn payment_service(
	payment_repo: InMemoryPaymentRepository,
	order_service: FakeOrderService,
	payment_gateway: FakePaymentGateway,
) -> impl FnOnce(&mut web::ServiceConfig) {
	move |cfg| {
		cfg.app_data(web::Data::new(CreatePaymentUseCase::new(
			payment_repo.clone(),
			order_service.clone(),
			payment_gateway,
			CALLBACK_URL,
		)))
		.app_data(web::Data::new(GetPaymentUseCase::new(payment_repo.clone())))
		.app_data(web::Data::new(GetPaymentStatusUseCase::new(
			payment_repo.clone(),
		)))
		.app_data(web::Data::new(HandleWebhookUseCase::new(
			UpdatePaymentStatusUseCase::new(payment_repo),
			order_service,
		)));

		routes::<InMemoryPaymentRepository, FakeOrderService, FakePaymentGateway>(
			cfg,
		);
	}
}
