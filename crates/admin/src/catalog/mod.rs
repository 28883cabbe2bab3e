//! In-memory store records.
//!
//! The catalog is built once at startup and shared read-only between
//! requests. Nothing in the console writes back to it; actions only
//! acknowledge what they would have done.

mod seed;

use std::sync::Arc;

use crate::models::{
    Activity, CategoryPerformance, CustomerSegment, DietaryTrend, DigitalCart, InventoryItem,
    LiveMetric, LowStockAlert, NutritionHighlight, OverviewStat, ProductPerformance, QuickLink,
    StaffAccount, SupportTicket, Transaction,
};

/// Error building the catalog from its seed values.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid email in seed data: {0}")]
    Email(#[from] retail_ops_core::EmailError),
    #[error("invalid timestamp in seed data: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// All records the console displays.
#[derive(Debug, Clone)]
pub struct Catalog {
    inventory: Arc<[InventoryItem]>,
    carts: Arc<[DigitalCart]>,
    tickets: Arc<[SupportTicket]>,
    transactions: Arc<[Transaction]>,
    staff: Arc<[StaffAccount]>,
    alerts: Arc<[LowStockAlert]>,
    products: Arc<[ProductPerformance]>,
    live_metrics: Arc<[LiveMetric]>,
    categories: Arc<[CategoryPerformance]>,
    nutrition_highlights: Arc<[NutritionHighlight]>,
    dietary_trends: Arc<[DietaryTrend]>,
    segments: Arc<[CustomerSegment]>,
    overview: Arc<[OverviewStat]>,
    activities: Arc<[Activity]>,
    quick_links: Arc<[QuickLink]>,
}

impl Catalog {
    /// Build the catalog with the store's demo records.
    ///
    /// # Errors
    ///
    /// Returns an error if a seeded email or timestamp fails to parse.
    pub fn seeded() -> Result<Self, CatalogError> {
        Ok(Self {
            inventory: seed::inventory().into(),
            carts: seed::carts().into(),
            tickets: seed::tickets().into(),
            transactions: seed::transactions()?.into(),
            staff: seed::staff()?.into(),
            alerts: seed::alerts().into(),
            products: seed::products().into(),
            live_metrics: seed::live_metrics().into(),
            categories: CategoryPerformance::ranked(seed::CATEGORY_RANKING).into(),
            nutrition_highlights: seed::nutrition_highlights().into(),
            dietary_trends: seed::dietary_trends().into(),
            segments: seed::segments().into(),
            overview: seed::overview().into(),
            activities: seed::activities().into(),
            quick_links: seed::quick_links().into(),
        })
    }

    #[must_use]
    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    #[must_use]
    pub fn carts(&self) -> &[DigitalCart] {
        &self.carts
    }

    #[must_use]
    pub fn tickets(&self) -> &[SupportTicket] {
        &self.tickets
    }

    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    #[must_use]
    pub fn staff(&self) -> &[StaffAccount] {
        &self.staff
    }

    #[must_use]
    pub fn alerts(&self) -> &[LowStockAlert] {
        &self.alerts
    }

    #[must_use]
    pub fn products(&self) -> &[ProductPerformance] {
        &self.products
    }

    #[must_use]
    pub fn live_metrics(&self) -> &[LiveMetric] {
        &self.live_metrics
    }

    #[must_use]
    pub fn categories(&self) -> &[CategoryPerformance] {
        &self.categories
    }

    #[must_use]
    pub fn nutrition_highlights(&self) -> &[NutritionHighlight] {
        &self.nutrition_highlights
    }

    #[must_use]
    pub fn dietary_trends(&self) -> &[DietaryTrend] {
        &self.dietary_trends
    }

    #[must_use]
    pub fn segments(&self) -> &[CustomerSegment] {
        &self.segments
    }

    #[must_use]
    pub fn overview(&self) -> &[OverviewStat] {
        &self.overview
    }

    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    #[must_use]
    pub fn quick_links(&self) -> &[QuickLink] {
        &self.quick_links
    }

    // Lookups by printed code, ignoring case.

    #[must_use]
    pub fn find_inventory(&self, id: &str) -> Option<&InventoryItem> {
        self.inventory.iter().find(|item| item.id.matches(id))
    }

    #[must_use]
    pub fn find_cart(&self, id: &str) -> Option<&DigitalCart> {
        self.carts.iter().find(|cart| cart.id.matches(id))
    }

    #[must_use]
    pub fn find_ticket(&self, id: &str) -> Option<&SupportTicket> {
        self.tickets.iter().find(|ticket| ticket.id.matches(id))
    }

    #[must_use]
    pub fn find_transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id.matches(id))
    }

    /// Staff accounts are keyed by number; anything unparsable finds nothing.
    #[must_use]
    pub fn find_staff(&self, id: &str) -> Option<&StaffAccount> {
        let id = id.trim().parse::<retail_ops_core::StaffUserId>().ok()?;
        self.staff.iter().find(|account| account.id == id)
    }

    #[must_use]
    pub fn find_alert(&self, id: &str) -> Option<&LowStockAlert> {
        self.alerts.iter().find(|alert| alert.id.matches(id))
    }

    #[must_use]
    pub fn find_product(&self, id: &str) -> Option<&ProductPerformance> {
        self.products.iter().find(|product| product.id.matches(id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use retail_ops_core::{
        CartStatus, FacetFilter, SearchQuery, StockStatus, TransactionStatus, filter_records,
    };

    use super::*;

    fn catalog() -> Catalog {
        Catalog::seeded().unwrap()
    }

    #[test]
    fn test_seed_sizes() {
        let catalog = catalog();
        assert_eq!(catalog.inventory().len(), 4);
        assert_eq!(catalog.carts().len(), 4);
        assert_eq!(catalog.tickets().len(), 4);
        assert_eq!(catalog.transactions().len(), 5);
        assert_eq!(catalog.staff().len(), 4);
        assert_eq!(catalog.alerts().len(), 5);
        assert_eq!(catalog.products().len(), 5);
        assert_eq!(catalog.live_metrics().len(), 4);
        assert_eq!(catalog.categories().len(), 5);
        assert_eq!(catalog.overview().len(), 4);
        assert_eq!(catalog.activities().len(), 4);
        assert_eq!(catalog.quick_links().len(), 4);
    }

    #[test]
    fn test_bread_search_finds_only_whole_wheat_bread() {
        let catalog = catalog();
        let matched = filter_records(
            catalog.inventory(),
            &SearchQuery::new("bread"),
            &FacetFilter::All,
        );
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Whole Wheat Bread");
        assert_eq!(matched[0].status(), StockStatus::Out);
    }

    #[test]
    fn test_checking_out_filter_finds_cart_249() {
        let catalog = catalog();
        let matched = filter_records(
            catalog.carts(),
            &SearchQuery::default(),
            &FacetFilter::Only(CartStatus::CheckingOut),
        );
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id.as_str(), "CART-249");
    }

    #[test]
    fn test_failed_filter_finds_txn005() {
        let catalog = catalog();
        let matched = filter_records(
            catalog.transactions(),
            &SearchQuery::default(),
            &FacetFilter::Only(TransactionStatus::Failed),
        );
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id.as_str(), "TXN005");
    }

    #[test]
    fn test_inventory_statuses_derive_from_seed() {
        let catalog = catalog();
        let statuses: Vec<_> = catalog.inventory().iter().map(InventoryItem::status).collect();
        assert_eq!(
            statuses,
            vec![
                StockStatus::Low,
                StockStatus::Good,
                StockStatus::Out,
                StockStatus::Good
            ]
        );
    }

    #[test]
    fn test_lookups_ignore_case() {
        let catalog = catalog();
        assert!(catalog.find_inventory("wm003").is_some());
        assert!(catalog.find_cart("cart-248").is_some());
        assert!(catalog.find_ticket("SUP-004").is_some());
        assert!(catalog.find_transaction("txn001").is_some());
        assert!(catalog.find_alert("p005").is_some());
        assert!(catalog.find_product("P003").is_some());
        assert_eq!(catalog.find_staff("3").unwrap().name, "Mike Admin");
        assert!(catalog.find_staff("three").is_none());
        assert!(catalog.find_inventory("WM999").is_none());
    }

    #[test]
    fn test_staff_timestamps_parse() {
        let catalog = catalog();
        assert_eq!(catalog.staff()[0].display_last_login(), "2024-01-15 09:30");
        assert_eq!(
            catalog.transactions()[4].display_timestamp(),
            "2024-01-15 13:58"
        );
    }
}
