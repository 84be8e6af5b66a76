use actix_web::{HttpResponse, web};
use log::info;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::WebhookNotificationRequest;
use crate::domain::order_service::OrderService;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::HandleWebhookCommand;
use crate::use_cases::handle_webhook::HandleWebhookUseCase;

pub async fn handle_webhook<R, O>(
	payload: web::Json<WebhookNotificationRequest>,
	handle_webhook_use_case: web::Data<HandleWebhookUseCase<R, O>>,
) -> Result<HttpResponse, ApiError>
where
	R: PaymentRepository,
	O: OrderService,
{
	let notification = payload.into_inner();
	info!(
		"Received notification '{}' for id '{}'",
		notification.topic, notification.id
	);

	handle_webhook_use_case
		.execute(HandleWebhookCommand {
			id:    notification.id,
			topic: notification.topic,
		})
		.await?;

	Ok(HttpResponse::Ok().finish())
}
