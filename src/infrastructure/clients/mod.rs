pub mod order_service_client;
