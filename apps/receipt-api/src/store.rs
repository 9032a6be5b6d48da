//! # Receipt Store
//!
//! Key-value storage for processed receipts, keyed by receipt id.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ReceiptService                                                         │
//! │       │                                                                 │
//! │       │  store.put(id, StoredReceipt { receipt, points, .. })           │
//! │       │  store.get(id)                                                  │
//! │       ▼                                                                 │
//! │  dyn ReceiptStore                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemoryReceiptStore  ── RwLock<HashMap<String, StoredReceipt>>       │
//! │                                                                         │
//! │  Volatile: everything is gone when the process exits.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use receipt_core::Receipt;
use thiserror::Error;

/// A receipt together with the points it earned.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredReceipt {
    /// The receipt as submitted.
    pub receipt: Receipt,

    /// Points computed when the receipt was processed.
    pub points: u64,

    /// When the receipt was processed.
    pub processed_at: DateTime<Utc>,
}

/// Receipt store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock.
    #[error("receipt store lock poisoned")]
    LockPoisoned,

    /// The id is already taken.
    #[error("receipt {0} already exists")]
    Duplicate(String),
}

/// Storage for processed receipts.
pub trait ReceiptStore: Send + Sync {
    /// Stores a record under a fresh id.
    fn put(&self, id: String, record: StoredReceipt) -> Result<(), StoreError>;

    /// Looks up a record by id.
    fn get(&self, id: &str) -> Result<Option<StoredReceipt>, StoreError>;

    /// Number of stored receipts.
    fn count(&self) -> Result<usize, StoreError>;
}

/// Process-local [`ReceiptStore`] behind a single lock.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<String, StoredReceipt>>,
}

impl InMemoryReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, id: String, record: StoredReceipt) -> Result<(), StoreError> {
        let mut receipts = self.receipts.write().map_err(|_| StoreError::LockPoisoned)?;
        if receipts.contains_key(&id) {
            return Err(StoreError::Duplicate(id));
        }
        receipts.insert(id, record);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<StoredReceipt>, StoreError> {
        let receipts = self.receipts.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(receipts.get(id).cloned())
    }

    fn count(&self) -> Result<usize, StoreError> {
        let receipts = self.receipts.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(receipts.len())
    }
}
