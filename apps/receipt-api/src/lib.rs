//! # Receipt API
//!
//! HTTP server that scores receipts and serves their points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API Services                            │
//! │                                                                         │
//! │  ┌────────────────────────────┐  ┌────────────────────────────┐        │
//! │  │  ReceiptService            │  │  HealthService             │        │
//! │  │                            │  │                            │        │
//! │  │ • process (validate+score) │  │ • check                    │        │
//! │  │ • points (lookup by id)    │  │                            │        │
//! │  └─────────────┬──────────────┘  └────────────────────────────┘        │
//! │                │                                                        │
//! │  ┌─────────────▼────────────────────────────────────────────────────┐  │
//! │  │                      Infrastructure                              │  │
//! │  │                                                                  │  │
//! │  │  ┌──────────────────────┐  ┌──────────────────────────────────┐ │  │
//! │  │  │  receipt-core        │  │  ReceiptStore                    │ │  │
//! │  │  │  validate/calculate  │  │  in-memory, keyed by UUID v4     │ │  │
//! │  │  └──────────────────────┘  └──────────────────────────────────┘ │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_HOST` - Bind address (default: 0.0.0.0)
//! - `HTTP_PORT` - HTTP server port (default: 8080)
//! - `MAX_BODY_BYTES` - Request body limit (default: 1048576)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::Router;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use store::{InMemoryReceiptStore, ReceiptStore};

use crate::services::{HealthService, ReceiptService};

/// Shared application state.
pub struct AppState {
    pub receipts: ReceiptService,
    pub health: HealthService,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the services over a store.
    pub fn new(config: ApiConfig, store: Arc<dyn ReceiptStore>) -> Self {
        let receipts = ReceiptService::new(store);
        AppState {
            health: HealthService::new(receipts.clone()),
            receipts,
            config,
        }
    }
}

/// Builds the full application router with a fresh in-memory store.
pub fn build_app(config: ApiConfig) -> Router {
    let state = AppState::new(config, Arc::new(InMemoryReceiptStore::new()));
    routes::create_router(Arc::new(state))
}
