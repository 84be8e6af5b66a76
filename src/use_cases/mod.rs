pub mod create_payment;
pub mod dto;
pub mod get_payment;
pub mod get_payment_status;
pub mod handle_webhook;
pub mod update_payment_status;
