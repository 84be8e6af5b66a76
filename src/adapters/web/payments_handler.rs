use actix_web::{HttpResponse, web};
use log::info;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{CreatePaymentRequest, PaymentResponse};
use crate::domain::order_service::OrderService;
use crate::domain::payment_gateway::PaymentGateway;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::dto::{
	CreatePaymentCommand, GetPaymentQuery, GetPaymentStatusQuery,
};
use crate::use_cases::get_payment::GetPaymentUseCase;
use crate::use_cases::get_payment_status::GetPaymentStatusUseCase;

fn parse_order_id(raw: &str) -> Result<u64, ApiError> {
	raw.parse().map_err(|_| ApiError::InvalidOrderIdError)
}

pub async fn create_payment<R, O, G>(
	payload: web::Json<CreatePaymentRequest>,
	create_payment_use_case: web::Data<CreatePaymentUseCase<R, O, G>>,
) -> Result<HttpResponse, ApiError>
where
	R: PaymentRepository,
	O: OrderService,
	G: PaymentGateway,
{
	let payload = payload.into_inner();
	let order_id = payload.order_id;
	let command = CreatePaymentCommand {
		order_id,
		total: payload.total,
		payment_type: payload.payment_type,
	};

	let qr_data = create_payment_use_case.execute(command).await?;

	info!("QR code issued for order {order_id}");
	Ok(HttpResponse::Created().json(qr_data))
}

pub async fn get_payment_status<R: PaymentRepository>(
	order_id: web::Path<String>,
	get_payment_status_use_case: web::Data<GetPaymentStatusUseCase<R>>,
) -> Result<HttpResponse, ApiError> {
	let order_id = parse_order_id(&order_id)?;

	let status = get_payment_status_use_case
		.execute(GetPaymentStatusQuery { order_id })
		.await?;

	Ok(HttpResponse::Ok().json(status))
}

pub async fn get_payment<R: PaymentRepository>(
	order_id: web::Path<String>,
	get_payment_use_case: web::Data<GetPaymentUseCase<R>>,
) -> Result<HttpResponse, ApiError> {
	let order_id = parse_order_id(&order_id)?;

	let payment = get_payment_use_case
		.execute(GetPaymentQuery { order_id })
		.await?;

	Ok(HttpResponse::Ok().json(PaymentResponse::from(payment)))
}
