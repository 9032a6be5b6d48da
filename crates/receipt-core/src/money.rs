//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Receipt totals are compared for EXACT equality against the sum of     │
//! │  item prices, so any float drift turns a valid receipt into a          │
//! │  rejected one.                                                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "6.49" + "6.49" = 649 + 649 = 1298 cents = "12.98"                  │
//! │    Rounding to 2 decimals after every step is a no-op on cents.        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! // Parse from receipt text (the only way in from the outside world)
//! let price: Money = "6.49".parse().unwrap();
//! assert_eq!(price.cents(), 649);
//!
//! // Arithmetic is checked: overflow is a `None`, never a wrap
//! let total = price.checked_add(Money::from_cents(649)).unwrap(); // $12.98
//! assert_eq!(total.to_string(), "$12.98");
//!
//! // NEVER do this:
//! // let bad = Money::from_float(6.49); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// Number of cents in one whole currency unit.
const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Plenty of headroom; receipt text can never be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde as text**: On the wire an amount is always `"6.49"`, never a number
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  "price": "6.49" ──► Item.price ──┬──► total consistency check          │
/// │                                   └──► description bonus                │
/// │                                                                         │
/// │  "total": "12.98" ──► Receipt.total ──┬──► total consistency check     │
/// │                                       ├──► round dollar bonus          │
/// │                                       └──► multiple of 0.25 bonus      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(649); // Represents $6.49
    /// assert_eq!(price.cents(), 649);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses receipt text of the form `digits "." two-digits`.
    ///
    /// `field` names the receipt field in the returned error.
    ///
    /// ## Rules
    /// - At least one digit before the point
    /// - Exactly two digits after the point
    /// - No sign, no whitespace, no exponent, ASCII digits only
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::parse("price", "6.49").unwrap().cents(), 649);
    /// assert!(Money::parse("price", "6.4").is_err());
    /// assert!(Money::parse("price", "-6.49").is_err());
    /// ```
    pub fn parse(field: &str, text: &str) -> ValidationResult<Self> {
        let (major, minor) = text.split_once('.').ok_or_else(|| {
            ValidationError::invalid_format(field, "expected an amount like 6.49")
        })?;

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(major) || minor.len() != 2 || !all_digits(minor) {
            return Err(ValidationError::invalid_format(
                field,
                "expected an amount like 6.49",
            ));
        }

        let overflow = || ValidationError::Overflow {
            field: field.to_string(),
        };
        let major: i64 = major.parse().map_err(|_| overflow())?;
        let minor: i64 = minor.parse().map_err(|_| overflow())?;

        major
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|cents| cents.checked_add(minor))
            .map(Money)
            .ok_or_else(overflow)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.dollars(), 10);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the amount has no cents (`35.00`, `9.00`).
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % CENTS_PER_UNIT == 0
    }

    /// Checks if the amount is an exact multiple of `step`.
    ///
    /// A zero step never divides anything.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(975).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(1049).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Scales the amount by a rate in basis points, rounded to the cent.
    ///
    /// ## Implementation
    /// We use integer math: `(amount * rate + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5)
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// // $6.49 × 0.2 = $1.298 → $1.30
    /// let price = Money::from_cents(649);
    /// assert_eq!(price.scale_bps(2000).cents(), 130);
    /// ```
    pub fn scale_bps(&self, bps: u32) -> Money {
        // i128 keeps the intermediate product from overflowing on large amounts
        let scaled = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(scaled as i64)
    }

    /// Rounds up to the next whole currency unit and returns it.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(130).ceil_dollars(), 2);
    /// assert_eq!(Money::from_cents(200).ceil_dollars(), 2);
    /// assert_eq!(Money::zero().ceil_dollars(), 0);
    /// ```
    #[inline]
    pub const fn ceil_dollars(&self) -> i64 {
        -(-self.0).div_euclid(CENTS_PER_UNIT)
    }

    /// Renders the amount the way receipts write it (`"12.98"`).
    pub fn to_receipt_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and error messages. The wire format is
/// [`Money::to_receipt_string`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse("amount", s)
    }
}

impl TryFrom<String> for Money {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_receipt_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_parse_valid_amounts() {
        assert_eq!("6.49".parse::<Money>().unwrap().cents(), 649);
        assert_eq!("0.00".parse::<Money>().unwrap().cents(), 0);
        assert_eq!("35.00".parse::<Money>().unwrap().cents(), 3500);
        assert_eq!("007.05".parse::<Money>().unwrap().cents(), 705);
    }

    #[test]
    fn test_parse_rejects_malformed_amounts() {
        for text in ["", "6", "6.", ".49", "6.4", "6.490", "-6.49", "+6.49", " 6.49", "6,49", "1e3.00", "six.49"] {
            assert!(text.parse::<Money>().is_err(), "{text:?} should not parse");
        }
    }

    #[test]
    fn test_parse_reports_field_name() {
        let err = Money::parse("total", "abc").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "total"));
    }

    #[test]
    fn test_parse_overflow() {
        let err = Money::parse("total", "99999999999999999999.00").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Overflow {
                field: "total".to_string()
            }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_receipt_string() {
        assert_eq!(Money::from_cents(1298).to_receipt_string(), "12.98");
        assert_eq!(Money::from_cents(5).to_receipt_string(), "0.05");
    }

    #[test]
    fn test_serde_uses_receipt_text() {
        let money: Money = serde_json::from_str("\"6.49\"").unwrap();
        assert_eq!(money.cents(), 649);
        assert_eq!(serde_json::to_string(&money).unwrap(), "\"6.49\"");
        assert!(serde_json::from_str::<Money>("6.49").is_err());
        assert!(serde_json::from_str::<Money>("\"6.5\"").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(b), None);
        assert_eq!(
            Money::from_cents(i64::MAX - 1).checked_add(Money::from_cents(1)),
            Some(Money::from_cents(i64::MAX))
        );
    }

    #[test]
    fn test_whole_dollars_and_multiples() {
        let quarter = Money::from_cents(25);
        assert!(Money::from_cents(3500).is_whole_dollars());
        assert!(Money::from_cents(3500).is_multiple_of(quarter));
        assert!(!Money::from_cents(1049).is_whole_dollars());
        assert!(!Money::from_cents(1049).is_multiple_of(quarter));
        assert!(Money::from_cents(1075).is_multiple_of(quarter));
        assert!(!Money::from_cents(1075).is_multiple_of(Money::zero()));
    }

    #[test]
    fn test_scale_bps_rounds_to_cent() {
        // 20% of $6.49 = $1.298 → $1.30
        assert_eq!(Money::from_cents(649).scale_bps(2000).cents(), 130);
        // 20% of $6.47 = $1.294 → $1.29
        assert_eq!(Money::from_cents(647).scale_bps(2000).cents(), 129);
        // 20% of $12.25 = $2.45 exactly
        assert_eq!(Money::from_cents(1225).scale_bps(2000).cents(), 245);
    }

    #[test]
    fn test_ceil_dollars() {
        assert_eq!(Money::from_cents(1).ceil_dollars(), 1);
        assert_eq!(Money::from_cents(100).ceil_dollars(), 1);
        assert_eq!(Money::from_cents(101).ceil_dollars(), 2);
        assert_eq!(Money::from_cents(-150).ceil_dollars(), -1);
    }
}
