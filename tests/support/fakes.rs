use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use qr_payment_service::domain::errors::PaymentError;
use qr_payment_service::domain::order::{Order, OrderProduct};
use qr_payment_service::domain::order_service::OrderService;
use qr_payment_service::domain::payment::{NewPayment, Payment};
use qr_payment_service::domain::payment_gateway::PaymentGateway;
use qr_payment_service::domain::qr_code::QrCodeRequest;
use qr_payment_service::domain::repository::PaymentRepository;
use time::OffsetDateTime;

#[derive(Default)]
struct RepositoryState {
	payments:    Vec<Payment>,
	calls:       usize,
	fail_add:    bool,
	fail_update: bool,
}

/// Payment store kept in memory. Lookups return the first payment stored
/// for an order, like the Redis store.
#[derive(Clone, Default)]
pub struct InMemoryPaymentRepository {
	state: Arc<Mutex<RepositoryState>>,
}

impl InMemoryPaymentRepository {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_payment(self, order_id: u64, status: &str) -> Self {
		{
			let mut state = self.state.lock().unwrap();
			let id = state.payments.len() as u64 + 1;
			state.payments.push(Payment {
				id,
				created_at: OffsetDateTime::now_utc(),
				order_id,
				total: 50.0,
				payment_type: "QRCode".to_string(),
				status: status.to_string(),
			});
		}
		self
	}

	pub fn failing_on_add(self) -> Self {
		self.state.lock().unwrap().fail_add = true;
		self
	}

	pub fn failing_on_update(self) -> Self {
		self.state.lock().unwrap().fail_update = true;
		self
	}

	pub fn payments(&self) -> Vec<Payment> {
		self.state.lock().unwrap().payments.clone()
	}

	pub fn calls(&self) -> usize {
		self.state.lock().unwrap().calls
	}
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
	async fn add_payment(
		&self,
		payment: NewPayment,
	) -> Result<Payment, PaymentError> {
		let mut state = self.state.lock().unwrap();
		state.calls += 1;
		if state.fail_add {
			return Err(PaymentError::Storage("connection refused".to_string()));
		}

		let stored = Payment {
			id:           state.payments.len() as u64 + 1,
			created_at:   OffsetDateTime::now_utc(),
			order_id:     payment.order_id,
			total:        payment.total,
			payment_type: payment.payment_type,
			status:       payment.status,
		};
		state.payments.push(stored.clone());
		Ok(stored)
	}

	async fn get_payment_by_order_id(
		&self,
		order_id: u64,
	) -> Result<Payment, PaymentError> {
		let mut state = self.state.lock().unwrap();
		state.calls += 1;
		state
			.payments
			.iter()
			.find(|payment| payment.order_id == order_id)
			.cloned()
			.ok_or(PaymentError::NotFound(order_id))
	}

	async fn update_payment(&self, payment: Payment) -> Result<(), PaymentError> {
		let mut state = self.state.lock().unwrap();
		state.calls += 1;
		if state.fail_update {
			return Err(PaymentError::Storage("connection refused".to_string()));
		}

		let stored = state
			.payments
			.iter_mut()
			.find(|stored| stored.id == payment.id)
			.ok_or(PaymentError::UnknownPayment(payment.id))?;
		*stored = payment;
		Ok(())
	}
}

struct OrderServiceState {
	order:          Result<Order, PaymentError>,
	status_result:  Result<(), PaymentError>,
	fetched:        Vec<u64>,
	status_updates: Vec<(u64, u32)>,
}

/// Order service double that records every call it receives.
#[derive(Clone)]
pub struct FakeOrderService {
	state: Arc<Mutex<OrderServiceState>>,
}

impl FakeOrderService {
	pub fn returning(order: Order) -> Self {
		Self::with(Ok(order), Ok(()))
	}

	pub fn failing_with(err: PaymentError) -> Self {
		Self::with(Err(err.clone()), Err(err))
	}

	pub fn failing_status_update_with(order: Order, err: PaymentError) -> Self {
		Self::with(Ok(order), Err(err))
	}

	fn with(
		order: Result<Order, PaymentError>,
		status_result: Result<(), PaymentError>,
	) -> Self {
		Self {
			state: Arc::new(Mutex::new(OrderServiceState {
				order,
				status_result,
				fetched: Vec::new(),
				status_updates: Vec::new(),
			})),
		}
	}

	pub fn fetched(&self) -> Vec<u64> {
		self.state.lock().unwrap().fetched.clone()
	}

	pub fn status_updates(&self) -> Vec<(u64, u32)> {
		self.state.lock().unwrap().status_updates.clone()
	}
}

#[async_trait]
impl OrderService for FakeOrderService {
	async fn get_order(&self, order_id: u64) -> Result<Order, PaymentError> {
		let mut state = self.state.lock().unwrap();
		state.fetched.push(order_id);
		state.order.clone()
	}

	async fn update_order_status(
		&self,
		order_id: u64,
		status: u32,
	) -> Result<(), PaymentError> {
		let mut state = self.state.lock().unwrap();
		state.status_updates.push((order_id, status));
		state.status_result.clone()
	}
}

struct GatewayState {
	response: Result<String, PaymentError>,
	requests: Vec<QrCodeRequest>,
}

#[derive(Clone)]
pub struct FakePaymentGateway {
	state: Arc<Mutex<GatewayState>>,
}

impl FakePaymentGateway {
	pub fn returning(qr_data: &str) -> Self {
		Self::with(Ok(qr_data.to_string()))
	}

	pub fn failing_with(err: PaymentError) -> Self {
		Self::with(Err(err))
	}

	fn with(response: Result<String, PaymentError>) -> Self {
		Self {
			state: Arc::new(Mutex::new(GatewayState {
				response,
				requests: Vec::new(),
			})),
		}
	}

	pub fn requests(&self) -> Vec<QrCodeRequest> {
		self.state.lock().unwrap().requests.clone()
	}
}

#[async_trait]
impl PaymentGateway for FakePaymentGateway {
	async fn generate_qr_code(
		&self,
		request: QrCodeRequest,
	) -> Result<String, PaymentError> {
		let mut state = self.state.lock().unwrap();
		state.requests.push(request);
		state.response.clone()
	}
}

pub fn sample_order(order_id: u64) -> Order {
	Order {
		id:           order_id,
		total_amount: 55.0,
		products:     vec![
			OrderProduct {
				product_id:  10,
				price:       20.0,
				quantity:    2,
				name:        "X-Burger".to_string(),
				image_link:  "http://img/10.png".to_string(),
				description: "Double cheese".to_string(),
				category:    1,
			},
			OrderProduct {
				product_id:  20,
				price:       7.5,
				quantity:    2,
				name:        "Soda".to_string(),
				image_link:  "http://img/20.png".to_string(),
				description: "Can".to_string(),
				category:    3,
			},
		],
	}
}
