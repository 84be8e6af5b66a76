pub mod mercado_pago_gateway;
