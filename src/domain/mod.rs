pub mod errors;
pub mod order;
pub mod order_service;
pub mod payment;
pub mod payment_gateway;
pub mod qr_code;
pub mod repository;
