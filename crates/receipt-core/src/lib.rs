//! # receipt-core: Pure Business Logic for the Receipt Processor
//!
//! This crate is the **heart** of the receipt processor. It contains the
//! receipt validator and the points calculator as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-api (axum)                           │   │
//! │  │   POST /receipts/process        GET /receipts/:id/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation│  │  points   │  │   │
//! │  │   │  Receipt  │  │   Money   │  │ validate  │  │ calculate │  │   │
//! │  │   │   Item    │  │  (cents)  │  │  schema   │  │ breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, PurchaseDate, PurchaseTime)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - The receipt validator and boundary checks
//! - [`points`] - The points calculator
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: Parse failures are `Result`s, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{calculate, validate, Receipt};
//!
//! let receipt: Receipt = serde_json::from_str(r#"{
//!     "retailer": "M&M Corner Market",
//!     "purchaseDate": "2022-03-20",
//!     "purchaseTime": "14:33",
//!     "items": [
//!         {"shortDescription": "Gatorade", "price": "2.25"},
//!         {"shortDescription": "Gatorade", "price": "2.25"},
//!         {"shortDescription": "Gatorade", "price": "2.25"},
//!         {"shortDescription": "Gatorade", "price": "2.25"}
//!     ],
//!     "total": "9.00"
//! }"#).unwrap();
//!
//! assert!(validate(&receipt));
//! assert_eq!(calculate(&receipt), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use receipt_core::Money` instead of
// `use receipt_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use points::{breakdown, calculate, PointsBreakdown};
pub use types::*;
pub use validation::{validate, validate_receipt, ValidationResult};
