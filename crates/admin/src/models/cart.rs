//! Digital cart session models.

use serde::Serialize;

use retail_ops_core::{CartCode, CartStatus, Faceted, Price, Searchable};

/// A live customer shopping session shown to floor staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitalCart {
    /// Cart code (e.g. `CART-247`).
    pub id: CartCode,
    /// Customer display name.
    pub customer: String,
    /// Where in the store the cart was last seen.
    pub location: String,
    /// Number of items scanned.
    pub items: u32,
    /// Running total.
    pub total: Price,
    /// Session length, as displayed.
    pub duration: String,
    /// Session state.
    pub status: CartStatus,
    /// Whether the customer pressed the help button.
    pub needs_assistance: bool,
    /// Time since last scan, as displayed.
    pub last_activity: String,
}

impl Searchable for DigitalCart {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.customer.as_str(), self.id.as_str()]
    }
}

impl Faceted for DigitalCart {
    type Facet = CartStatus;

    fn facet(&self) -> CartStatus {
        self.status
    }
}
