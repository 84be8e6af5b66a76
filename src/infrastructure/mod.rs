pub mod clients;
pub mod config;
pub mod gateways;
pub mod http;
pub mod persistence;
