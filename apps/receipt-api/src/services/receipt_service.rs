//! Receipt service implementation.
//!
//! Sequences the pure core functions and the store:
//!
//! ```text
//! process:  schema ──► validate ──► calculate ──► new id ──► store.put
//! points:   id check ──► store.get ──► points | NotFound
//! ```

use std::sync::Arc;

use chrono::Utc;
use receipt_core::validation::{validate_receipt_id, validate_schema};
use receipt_core::{calculate, validate_receipt, Receipt};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::store::{ReceiptStore, StoredReceipt};

/// Receipt service implementation.
#[derive(Clone)]
pub struct ReceiptService {
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptService {
    /// Create a new receipt service over a store.
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        ReceiptService { store }
    }

    /// Validates and scores a receipt, stores it, and returns its new id.
    pub fn process(&self, receipt: Receipt) -> ApiResult<String> {
        validate_schema(&receipt)?;
        validate_receipt(&receipt)?;

        let points = calculate(&receipt);
        let id = Uuid::new_v4().to_string();

        debug!(
            receipt_id = %id,
            retailer = %receipt.retailer,
            items = receipt.items.len(),
            total = %receipt.total,
            "Receipt validated"
        );

        self.store.put(
            id.clone(),
            StoredReceipt {
                receipt,
                points,
                processed_at: Utc::now(),
            },
        )?;

        info!(receipt_id = %id, points, "Receipt processed");
        Ok(id)
    }

    /// Returns the points stored for a receipt id.
    pub fn points(&self, id: &str) -> ApiResult<u64> {
        validate_receipt_id(id).map_err(ApiError::InvalidId)?;

        self.store
            .get(id)?
            .map(|stored| stored.points)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    /// Number of receipts processed so far.
    pub fn count(&self) -> ApiResult<usize> {
        Ok(self.store.count()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryReceiptStore;
    use receipt_core::{Item, Money, ValidationError};

    fn service() -> ReceiptService {
        ReceiptService::new(Arc::new(InMemoryReceiptStore::new()))
    }

    fn receipt(total: i64) -> Receipt {
        Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            items: vec![
                Item::new("Pepsi - 12-oz", Money::from_cents(125)),
                Item::new("Dasani", Money::from_cents(140)),
            ],
            total: Money::from_cents(total),
        }
    }

    #[test]
    fn test_process_then_points() {
        let service = service();
        let id = service.process(receipt(265)).unwrap();

        assert!(Uuid::parse_str(&id).is_ok());
        // 9 (retailer) + 5 (one pair) + 1 ("Dasani", 6 chars, 1.40 × 0.2 → 0.28 → 1)
        assert_eq!(service.points(&id).unwrap(), 15);
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_each_receipt_gets_a_new_id() {
        let service = service();
        let first = service.process(receipt(265)).unwrap();
        let second = service.process(receipt(265)).unwrap();
        assert_ne!(first, second);
        assert_eq!(service.count().unwrap(), 2);
    }

    #[test]
    fn test_invalid_receipt_is_not_stored() {
        let service = service();
        let err = service.process(receipt(266)).unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidReceipt(ValidationError::TotalMismatch { .. })
        ));
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_schema_violation_is_rejected() {
        let service = service();
        let mut bad = receipt(265);
        bad.retailer = "Walgreens!".to_string();
        assert!(matches!(
            service.process(bad),
            Err(ApiError::InvalidReceipt(ValidationError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn test_unknown_and_invalid_ids() {
        let service = service();
        assert!(matches!(service.points("missing"), Err(ApiError::NotFound(_))));
        assert!(matches!(service.points("has space"), Err(ApiError::InvalidId(_))));
    }
}
