//! # Validation Module
//!
//! The receipt validator plus the boundary checks used before it.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Field presence and types                                          │
//! │  └── Money text: digits "." two-digits                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Boundary checks (validate_schema)                            │
//! │  ├── retailer: word chars, whitespace, '-', '&'                        │
//! │  └── shortDescription: word chars, whitespace, '-'                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THE VALIDATOR (validate / validate_receipt)                  │
//! │  ├── item prices add up to the total                                   │
//! │  └── purchase date and time are real calendar values                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Points calculator (only ever sees receipts that passed layer 3)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::validate;
//! use receipt_core::{Item, Money, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item::new("Pepsi - 12-oz", Money::from_cents(125))],
//!     total: Money::from_cents(125),
//! };
//! assert!(validate(&receipt));
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{PurchaseDate, PurchaseTime, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Receipt Validator
// =============================================================================

/// Returns `true` when the receipt is semantically valid.
///
/// Never panics. Any failed check yields `false`; use
/// [`validate_receipt`] to learn which one.
pub fn validate(receipt: &Receipt) -> bool {
    validate_receipt(receipt).is_ok()
}

/// Runs every semantic check and reports the first failure.
///
/// ## Checks (in order)
/// 1. [`validate_total`]
/// 2. [`validate_date_time`]
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<()> {
    validate_total(receipt)?;
    validate_date_time(receipt)?;
    Ok(())
}

/// Checks that the item prices add up to the stated total.
///
/// ## Rules
/// - Prices are accumulated left to right, rounding the running sum to
///   two decimals after every addition
/// - The final sum must equal the total exactly
///
/// Amounts are integer cents, so each intermediate rounding is exact and
/// the check reduces to an overflow-checked integer sum.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  items: ["6.49", "6.49"]   total: "12.98"                              │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  0 ──+649──► 649 ──+649──► 1298                                        │
/// │                               │                                         │
/// │                               ├── 1298 == total? → OK                  │
/// │                               └── otherwise      → TotalMismatch       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_total(receipt: &Receipt) -> ValidationResult<()> {
    let actual = receipt
        .items
        .iter()
        .try_fold(Money::zero(), |sum, item| sum.checked_add(item.price))
        .ok_or_else(|| ValidationError::Overflow {
            field: "items".to_string(),
        })?;

    if actual != receipt.total {
        return Err(ValidationError::TotalMismatch {
            expected: receipt.total,
            actual,
        });
    }

    Ok(())
}

/// Checks that `purchaseDate` is `YYYY-MM-DD` and `purchaseTime` is `HH:MM`.
///
/// Either parse failing invalidates the whole receipt.
pub fn validate_date_time(receipt: &Receipt) -> ValidationResult<(PurchaseDate, PurchaseTime)> {
    let date = PurchaseDate::parse(&receipt.purchase_date)?;
    let time = PurchaseTime::parse(&receipt.purchase_time)?;
    Ok((date, time))
}

// =============================================================================
// Boundary Validators
// =============================================================================

/// Validates the free-text fields of a freshly deserialized receipt.
///
/// This is a structural check for the receiving layer. It is deliberately
/// not part of [`validate`].
pub fn validate_schema(receipt: &Receipt) -> ValidationResult<()> {
    validate_retailer(&receipt.retailer)?;
    for item in &receipt.items {
        validate_short_description(&item.short_description)?;
    }
    Ok(())
}

/// Validates a retailer name.
///
/// ## Rules
/// - Must not be empty
/// - Only word characters, whitespace, hyphens and ampersands
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_retailer;
///
/// assert!(validate_retailer("M&M Corner Market").is_ok());
/// assert!(validate_retailer("").is_err());
/// assert!(validate_retailer("Target!").is_err());
/// ```
pub fn validate_retailer(retailer: &str) -> ValidationResult<()> {
    validate_text("retailer", retailer, |c| c == '-' || c == '&')
}

/// Validates an item description.
///
/// ## Rules
/// - Must not be empty
/// - Only word characters, whitespace and hyphens
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_short_description;
///
/// assert!(validate_short_description("Mountain Dew 12PK").is_ok());
/// assert!(validate_short_description("Doritos & Salsa").is_err());
/// ```
pub fn validate_short_description(description: &str) -> ValidationResult<()> {
    validate_text("shortDescription", description, |c| c == '-')
}

/// Validates an opaque receipt identifier: non-empty, no whitespace.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_receipt_id;
///
/// assert!(validate_receipt_id("7fb1377b-b223-49d9-a31a-5a02701dd310").is_ok());
/// assert!(validate_receipt_id("").is_err());
/// assert!(validate_receipt_id("has space").is_err());
/// ```
pub fn validate_receipt_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::invalid_format(
            "id",
            "must not contain whitespace",
        ));
    }

    Ok(())
}

/// Shared rule for the free-text receipt fields: non-empty, and made of
/// word characters (letters, digits, underscore), whitespace, or whatever
/// `extra` allows.
fn validate_text(field: &str, value: &str, extra: impl Fn(char) -> bool) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if !value
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c.is_whitespace() || extra(c))
    {
        return Err(ValidationError::invalid_format(
            field,
            "contains characters that are not allowed",
        ));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
