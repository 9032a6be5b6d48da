//! Service implementations.
//!
//! Each service owns one slice of the API; routes stay thin and delegate here.

pub mod health_service;
pub mod receipt_service;

pub use health_service::HealthService;
pub use receipt_service::ReceiptService;
