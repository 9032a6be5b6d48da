use proptest::prelude::*;

use receipt_core::{breakdown, calculate, validate, Item, Money, Receipt};

fn item_strategy() -> impl Strategy<Value = Item> {
    ("[A-Za-z0-9 -]{1,30}", 0i64..100_000)
        .prop_map(|(description, cents)| Item::new(description, Money::from_cents(cents)))
}

fn receipt_strategy() -> impl Strategy<Value = Receipt> {
    (
        "[A-Za-z0-9 &-]{1,30}",
        (1i32..=9999, 1u32..=12, 1u32..=28),
        (0u32..24, 0u32..60),
        prop::collection::vec(item_strategy(), 0..12),
    )
        .prop_map(|(retailer, (year, month, day), (hour, minute), items)| {
            let total = Money::from_cents(items.iter().map(|item| item.price.cents()).sum());
            Receipt {
                retailer,
                purchase_date: format!("{year:04}-{month:02}-{day:02}"),
                purchase_time: format!("{hour:02}:{minute:02}"),
                items,
                total,
            }
        })
}

proptest! {
    #[test]
    fn consistent_receipts_validate(receipt in receipt_strategy()) {
        prop_assert!(validate(&receipt));
    }

    #[test]
    fn total_off_by_a_cent_is_rejected(receipt in receipt_strategy(), up in any::<bool>()) {
        let mut shifted = receipt.clone();
        let delta = if up { 1 } else { -1 };
        shifted.total = Money::from_cents(receipt.total.cents() + delta);
        prop_assert!(!validate(&shifted));
    }

    #[test]
    fn calculate_is_deterministic(receipt in receipt_strategy()) {
        prop_assert_eq!(calculate(&receipt), calculate(&receipt.clone()));
    }

    #[test]
    fn calculate_matches_breakdown(receipt in receipt_strategy()) {
        let points = breakdown(&receipt);
        prop_assert_eq!(calculate(&receipt), points.total());
        prop_assert!(points.retailer_name <= receipt.retailer.chars().count() as u64);
        prop_assert_eq!(points.item_pairs, (receipt.items.len() / 2) as u64 * 5);
    }

    #[test]
    fn empty_receipts_earn_no_item_points(mut receipt in receipt_strategy()) {
        receipt.items.clear();
        receipt.total = Money::zero();
        let points = breakdown(&receipt);
        prop_assert_eq!(points.item_pairs, 0);
        prop_assert_eq!(points.item_descriptions, 0);
    }
}
