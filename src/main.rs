use std::sync::Arc;

use env_logger::Env;
use qr_payment_service::infrastructure::config::settings::Config;
use qr_payment_service::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let config = Arc::new(Config::load().expect("Failed to load configuration"));
	run(config).await
}
