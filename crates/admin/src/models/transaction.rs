//! Wallet and checkout transaction models.

use chrono::NaiveDateTime;
use serde::Serialize;

use retail_ops_core::{
    CustomerCode, Faceted, PaymentType, Price, Searchable, TransactionCode, TransactionStatus,
};

/// Display format for transaction and login timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A payment processed at the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Transaction code (e.g. `TXN001`).
    pub id: TransactionCode,
    /// Paying customer.
    pub customer_id: CustomerCode,
    pub amount: Price,
    pub payment_type: PaymentType,
    pub status: TransactionStatus,
    pub timestamp: NaiveDateTime,
    /// Number of items in the basket.
    pub items: u32,
}

impl Transaction {
    /// Timestamp formatted for the transaction log.
    #[must_use]
    pub fn display_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl Searchable for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer_id.as_str()]
    }
}

impl Faceted for Transaction {
    type Facet = TransactionStatus;

    fn facet(&self) -> TransactionStatus {
        self.status
    }
}
