//! # Domain Types
//!
//! Core domain types used throughout the receipt processor.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │       Receipt        │  1..n    │        Item          │            │
//! │  │  ──────────────────  │─────────►│  ──────────────────  │            │
//! │  │  retailer            │          │  short_description   │            │
//! │  │  purchase_date (txt) │          │  price (Money)       │            │
//! │  │  purchase_time (txt) │          └──────────────────────┘            │
//! │  │  total (Money)       │                                              │
//! │  └──────────┬───────────┘                                              │
//! │             │ fallible parse                                            │
//! │             ▼                                                           │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │    PurchaseDate      │          │    PurchaseTime      │            │
//! │  │  YYYY-MM-DD only     │          │  HH:MM (24h) only    │            │
//! │  └──────────────────────┘          └──────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why are date and time kept as text on the receipt?
//! A receipt is accepted structurally before it is checked semantically.
//! The calendar check belongs to the validator, which turns the text into
//! [`PurchaseDate`] / [`PurchaseTime`] and rejects the receipt if either
//! parse fails.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::ValidationResult;

// =============================================================================
// Item
// =============================================================================

/// A single line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    /// Short product description, e.g. "Mountain Dew 12PK".
    pub short_description: String,

    /// Line price.
    #[ts(type = "string")]
    pub price: Money,
}

impl Item {
    /// Creates an item from a description and price.
    pub fn new(short_description: impl Into<String>, price: Money) -> Self {
        Item {
            short_description: short_description.into(),
            price,
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A submitted purchase receipt.
///
/// Immutable once constructed: nothing in this crate takes `&mut Receipt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Receipt {
    /// Store name, e.g. "M&M Corner Market".
    pub retailer: String,

    /// Purchase date as written on the receipt (`YYYY-MM-DD`).
    pub purchase_date: String,

    /// Purchase time as written on the receipt (`HH:MM`, 24-hour).
    pub purchase_time: String,

    /// Line items in receipt order.
    pub items: Vec<Item>,

    /// Stated receipt total.
    #[ts(type = "string")]
    pub total: Money,
}

// =============================================================================
// Purchase Date
// =============================================================================

/// A purchase date that is a real calendar day written as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PurchaseDate(NaiveDate);

impl PurchaseDate {
    /// Parses `YYYY-MM-DD` with zero-padded fields.
    ///
    /// ## Rules
    /// - Exactly 4 + 2 + 2 ASCII digits separated by `-`
    /// - Year 0001 or later
    /// - Month 01–12, day valid for that month (leap years included)
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::types::PurchaseDate;
    ///
    /// assert!(PurchaseDate::parse("2024-02-29").is_ok());
    /// assert!(PurchaseDate::parse("2023-02-29").is_err());
    /// assert!(PurchaseDate::parse("2022-1-1").is_err());
    /// ```
    pub fn parse(text: &str) -> ValidationResult<Self> {
        if !matches_shape(text, b"dddd-dd-dd") {
            return Err(ValidationError::invalid_format(
                "purchaseDate",
                "expected YYYY-MM-DD",
            ));
        }

        let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|e| {
            ValidationError::invalid_format("purchaseDate", e.to_string())
        })?;

        if date.year() < 1 {
            return Err(ValidationError::invalid_format(
                "purchaseDate",
                "year must be 0001 or later",
            ));
        }

        Ok(PurchaseDate(date))
    }

    /// Day of the month (1–31).
    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

// =============================================================================
// Purchase Time
// =============================================================================

/// A purchase time on the 24-hour clock written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PurchaseTime(NaiveTime);

impl PurchaseTime {
    /// Parses `HH:MM` with zero-padded fields (00:00 – 23:59).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::types::PurchaseTime;
    ///
    /// let time = PurchaseTime::parse("14:01").unwrap();
    /// assert_eq!((time.hour(), time.minute()), (14, 1));
    /// assert!(PurchaseTime::parse("24:00").is_err());
    /// assert!(PurchaseTime::parse("9:05").is_err());
    /// ```
    pub fn parse(text: &str) -> ValidationResult<Self> {
        if !matches_shape(text, b"dd:dd") {
            return Err(ValidationError::invalid_format(
                "purchaseTime",
                "expected HH:MM",
            ));
        }

        NaiveTime::parse_from_str(text, "%H:%M")
            .map(PurchaseTime)
            .map_err(|e| ValidationError::invalid_format("purchaseTime", e.to_string()))
    }

    /// Hour of the day (0–23).
    #[inline]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Minute of the hour (0–59).
    #[inline]
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

/// Checks `text` against a byte template where `d` is any ASCII digit and
/// every other byte must match literally.
fn matches_shape(text: &str, template: &[u8]) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == template.len()
        && bytes.iter().zip(template).all(|(&b, &t)| match t {
            b'd' => b.is_ascii_digit(),
            literal => b == literal,
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
