pub mod order_enricher;
pub mod order_service;
pub mod order_store;
pub mod order_validator;
