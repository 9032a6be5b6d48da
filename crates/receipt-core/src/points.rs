//! # Points Module
//!
//! The points calculator: seven independent, additive rules applied to a
//! receipt that has already passed [`validate`](crate::validation::validate).
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Condition                                                Points        │
//! │  ───────────────────────────────────────────────────────  ────────────  │
//! │  letters and digits in retailer name                      +1 each       │
//! │  total has no cents                                       +50           │
//! │  total is a multiple of 0.25                              +25           │
//! │  every two items                                          +5 per pair   │
//! │  trimmed description length % 3 == 0                      ⌈price × 0.2⌉ │
//! │  day of purchase date is odd                              +6            │
//! │  purchase time 14:01 to 15:59                             +10           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use receipt_core::points::calculate;
//! use receipt_core::{Item, Money, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![
//!         Item::new("Mountain Dew 12PK", Money::from_cents(649)),
//!         Item::new("Mountain Dew 12PK", Money::from_cents(649)),
//!     ],
//!     total: Money::from_cents(1298),
//! };
//!
//! // 6 (retailer) + 5 (one pair) + 6 (odd day)
//! assert_eq!(calculate(&receipt), 17);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::money::Money;
use crate::types::{Item, PurchaseDate, PurchaseTime, Receipt};

/// Bonus for a total with no cents.
pub const ROUND_DOLLAR_POINTS: u64 = 50;

/// Bonus for a total that is a multiple of [`QUARTER`].
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// Points per two items.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Bonus for an odd purchase day.
pub const ODD_DAY_POINTS: u64 = 6;

/// Bonus for an afternoon purchase.
pub const AFTERNOON_POINTS: u64 = 10;

/// Step used by the quarter-multiple bonus.
pub const QUARTER: Money = Money::from_cents(25);

/// Description bonus multiplier in basis points (0.2).
pub const DESCRIPTION_RATE_BPS: u32 = 2000;

// =============================================================================
// Breakdown
// =============================================================================

/// Points earned by each rule for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PointsBreakdown {
    /// One per letter or digit in the retailer name.
    pub retailer_name: u64,
    /// Total has no cents.
    pub round_dollar: u64,
    /// Total is a multiple of 0.25.
    pub quarter_multiple: u64,
    /// Five per two items.
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    /// Purchased between 14:01 and 15:59.
    pub afternoon_window: u64,
}

impl PointsBreakdown {
    /// Sum of every rule.
    pub fn total(&self) -> u64 {
        self.retailer_name
            + self.round_dollar
            + self.quarter_multiple
            + self.item_pairs
            + self.item_descriptions
            + self.odd_day
            + self.afternoon_window
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Computes the point total for a validated receipt.
///
/// Pure and deterministic: the same receipt always scores the same.
pub fn calculate(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

/// Computes each rule's contribution for a validated receipt.
///
/// Malformed date or time text scores 0 for the day and time bonuses,
/// but such receipts should never get this far.
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar: round_dollar_points(receipt.total),
        quarter_multiple: quarter_multiple_points(receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt.items.iter().map(item_description_points).sum(),
        odd_day: PurchaseDate::parse(&receipt.purchase_date)
            .map(odd_day_points)
            .unwrap_or(0),
        afternoon_window: PurchaseTime::parse(&receipt.purchase_time)
            .map(afternoon_points)
            .unwrap_or(0),
    }
}

// =============================================================================
// Rules
// =============================================================================

/// One point per letter or digit. Spaces, `&` and `-` do not count.
///
/// Letters are the Unicode `L*` categories and digits are anything numeric,
/// so combining marks (vowel signs such as `\u{93e}`) score nothing.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|&c| is_letter_or_digit(c)).count() as u64
}

fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    ) || c.is_numeric()
}

/// 50 points when the total is a round dollar amount.
pub fn round_dollar_points(total: Money) -> u64 {
    if total.is_whole_dollars() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// 25 points when the total is a multiple of 0.25.
pub fn quarter_multiple_points(total: Money) -> u64 {
    if total.is_multiple_of(QUARTER) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// 5 points for every two items.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// When the trimmed description length is a positive multiple of 3,
/// `price × 0.2` rounded to the cent, then rounded up to a whole number.
///
/// ## Example
/// ```text
/// "Emils Cheese Pizza" (18 chars)   price 12.25
///       │
///       ▼
/// 12.25 × 0.2 = 2.45 ──► 2.45 ──► ⌈2.45⌉ = 3 points
/// ```
pub fn item_description_points(item: &Item) -> u64 {
    let length = item.short_description.trim().chars().count();
    if length == 0 || length % 3 != 0 {
        return 0;
    }

    let bonus = item.price.scale_bps(DESCRIPTION_RATE_BPS).ceil_dollars();
    u64::try_from(bonus).unwrap_or(0)
}

/// 6 points when the day of the month is odd.
pub fn odd_day_points(date: PurchaseDate) -> u64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// 10 points for a purchase between 14:01 and 15:59 inclusive.
///
/// 14:00 itself does not qualify while every minute of the 15:00 hour
/// does. This boundary is kept as-is even though it reads like
/// "after 2:00pm and before 4:00pm".
pub fn afternoon_points(time: PurchaseTime) -> u64 {
    let in_window = match time.hour() {
        14 => (1..=59).contains(&time.minute()),
        15 => true,
        _ => false,
    };

    if in_window {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn money(text: &str) -> Money {
        text.parse().unwrap()
    }

    fn time(text: &str) -> PurchaseTime {
        PurchaseTime::parse(text).unwrap()
    }

    fn date(text: &str) -> PurchaseDate {
        PurchaseDate::parse(text).unwrap()
    }

    fn receipt(retailer: &str, date: &str, time: &str, items: Vec<Item>, total: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items,
            total: money(total),
        }
    }

    #[test]
    fn test_retailer_name_points() {
        assert_eq!(retailer_name_points("Target"), 6);
        assert_eq!(retailer_name_points("M&M Corner Market"), 14);
        assert_eq!(retailer_name_points("Walgreens - 24"), 11);
        assert_eq!(retailer_name_points("&- "), 0);
    }

    #[test]
    fn test_retailer_name_skips_combining_marks() {
        assert_eq!(retailer_name_points("\u{93e}"), 0);
        // द + vowel sign े + व
        assert_eq!(retailer_name_points("\u{926}\u{947}\u{935}"), 2);
        assert_eq!(retailer_name_points("Café Ω ½"), 6);
    }

    #[test]
    fn test_total_rules() {
        assert_eq!(round_dollar_points(money("35.00")), 50);
        assert_eq!(quarter_multiple_points(money("35.00")), 25);

        assert_eq!(round_dollar_points(money("9.00")), 50);
        assert_eq!(quarter_multiple_points(money("9.00")), 25);

        assert_eq!(round_dollar_points(money("10.49")), 0);
        assert_eq!(quarter_multiple_points(money("10.49")), 0);

        assert_eq!(round_dollar_points(money("9.75")), 0);
        assert_eq!(quarter_multiple_points(money("9.75")), 25);

        assert_eq!(round_dollar_points(money("0.00")), 50);
        assert_eq!(quarter_multiple_points(money("0.00")), 25);
    }

    #[test]
    fn test_item_pair_points() {
        assert_eq!(item_pair_points(0), 0);
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_item_description_points() {
        // 9 chars, 6.49 × 0.2 = 1.298 → 1.30 → 2
        assert_eq!(item_description_points(&Item::new("Doritos 1", money("6.49"))), 2);
        // trimmed to 24 chars, 12.00 × 0.2 = 2.40 → 3
        assert_eq!(
            item_description_points(&Item::new("   Klarbrunn 12-PK 12 FL OZ  ", money("12.00"))),
            3
        );
        // 17 chars: not a multiple of 3
        assert_eq!(item_description_points(&Item::new("Mountain Dew 12PK", money("6.49"))), 0);
        // whole result stays whole: 5.00 × 0.2 = 1.00 → 1
        assert_eq!(item_description_points(&Item::new("abc", money("5.00"))), 1);
        // blank description is not a positive multiple of 3
        assert_eq!(item_description_points(&Item::new("   ", money("6.49"))), 0);
        assert_eq!(item_description_points(&Item::new("abc", money("0.00"))), 0);
    }

    #[test]
    fn test_odd_day_points() {
        assert_eq!(odd_day_points(date("2022-01-01")), 6);
        assert_eq!(odd_day_points(date("2022-01-02")), 0);
        assert_eq!(odd_day_points(date("2022-03-31")), 6);
    }

    #[test]
    fn test_afternoon_window_boundaries() {
        assert_eq!(afternoon_points(time("13:59")), 0);
        assert_eq!(afternoon_points(time("14:00")), 0);
        assert_eq!(afternoon_points(time("14:01")), 10);
        assert_eq!(afternoon_points(time("14:59")), 10);
        assert_eq!(afternoon_points(time("15:00")), 10);
        assert_eq!(afternoon_points(time("15:59")), 10);
        assert_eq!(afternoon_points(time("16:00")), 0);
        assert_eq!(afternoon_points(time("02:30")), 0);
    }

    #[test]
    fn test_target_two_items() {
        let r = receipt(
            "Target",
            "2022-01-01",
            "13:01",
            vec![
                Item::new("Mountain Dew 12PK", money("6.49")),
                Item::new("Mountain Dew 12PK", money("6.49")),
            ],
            "12.98",
        );

        assert!(crate::validation::validate(&r));
        let points = breakdown(&r);
        assert_eq!(
            points,
            PointsBreakdown {
                retailer_name: 6,
                item_pairs: 5,
                odd_day: 6,
                ..PointsBreakdown::default()
            }
        );
        assert_eq!(calculate(&r), 17);
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let r = receipt(
            "Target",
            "2022-01-01",
            "13:01",
            vec![
                Item::new("Mountain Dew 12PK", money("6.49")),
                Item::new("Emils Cheese Pizza", money("12.25")),
                Item::new("Knorr Creamy Chicken", money("1.26")),
                Item::new("Doritos Nacho Cheese", money("3.35")),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", money("12.00")),
            ],
            "35.35",
        );

        assert!(crate::validation::validate(&r));
        // 6 + 10 (two pairs) + 3 + 3 (descriptions) + 6 (odd day)
        assert_eq!(calculate(&r), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let gatorade = || Item::new("Gatorade", money("2.25"));
        let r = receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            vec![gatorade(), gatorade(), gatorade(), gatorade()],
            "9.00",
        );

        assert!(crate::validation::validate(&r));
        // 50 + 25 + 14 + 10 (two pairs) + 10 (afternoon)
        assert_eq!(calculate(&r), 109);
    }

    #[test]
    fn test_empty_items_score_no_item_points() {
        let r = receipt("Target", "2022-01-02", "10:00", vec![], "0.00");
        let points = breakdown(&r);
        assert_eq!(points.item_pairs, 0);
        assert_eq!(points.item_descriptions, 0);
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let r = receipt("Target", "2022-01-01", "14:30", vec![Item::new("abc", money("6.49"))], "6.49");
        assert_eq!(calculate(&r), calculate(&r));
    }

    #[test]
    fn test_malformed_date_time_scores_zero_for_those_rules() {
        let r = receipt("Target", "not-a-date", "later", vec![], "1.10");
        let points = breakdown(&r);
        assert_eq!(points.odd_day, 0);
        assert_eq!(points.afternoon_window, 0);
        assert_eq!(points.total(), 6);
    }
}
