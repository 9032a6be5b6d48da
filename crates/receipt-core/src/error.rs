//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  └── ValidationError  - Boundary and semantic validation failures      │
//! │                                                                         │
//! │  receipt-api errors (separate crate)                                   │
//! │  ├── StoreError       - Receipt store failures                         │
//! │  └── ApiError         - What HTTP clients see (status + JSON body)      │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError::InvalidReceipt → 400                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, amounts)
//! 3. Errors are enum variants, never String
//! 4. The points calculator has no error path at all

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation errors.
///
/// Boundary variants (`Required`, `InvalidFormat`, `Overflow`) come from
/// parsing caller input. `TotalMismatch` is the semantic check performed by
/// the validator once a receipt is structurally sound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., malformed amount, impossible date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A numeric value does not fit the fixed-point representation.
    #[error("{field} is too large")]
    Overflow { field: String },

    /// Item prices do not add up to the stated total.
    ///
    /// ## When This Occurs
    /// ```text
    /// items: 6.49 + 6.49  ──►  actual 12.98
    /// total: 12.99        ──►  expected 12.99
    ///                              │
    ///                              ▼
    /// TotalMismatch { expected: $12.99, actual: $12.98 }
    /// ```
    #[error("total {expected} does not match sum of item prices {actual}")]
    TotalMismatch { expected: Money, actual: Money },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::InvalidFormat`].
    pub(crate) fn invalid_format(field: &str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
