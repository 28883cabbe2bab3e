//! Inventory item domain models.

use serde::Serialize;

use retail_ops_core::{Faceted, Price, Searchable, Sku, StockStatus};

/// Per-serving nutrition facts printed on the shelf label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionFacts {
    /// Calories per serving.
    pub calories: u32,
    /// Protein, as printed (e.g. `1.3g`).
    pub protein: String,
    /// Carbohydrates, as printed.
    pub carbs: String,
    /// Fat, as printed.
    pub fat: String,
}

/// A product tracked on the inventory page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    /// Store SKU (e.g. `WM001`).
    pub id: Sku,
    /// Product name.
    pub name: String,
    /// Department.
    pub category: String,
    /// Shelf price.
    pub price: Price,
    /// Units on hand.
    pub stock: u32,
    /// Reorder threshold.
    pub min_stock: u32,
    /// UPC barcode.
    pub barcode: String,
    /// Nutrition label.
    pub nutrition: NutritionFacts,
}

impl InventoryItem {
    /// Stock status derived from `stock` and `min_stock`.
    #[must_use]
    pub const fn status(&self) -> StockStatus {
        StockStatus::from_levels(self.stock, self.min_stock)
    }

    /// Phosphor icon shown beside the unit count.
    #[must_use]
    pub const fn stock_icon(&self) -> &'static str {
        match self.status() {
            StockStatus::Out => "ph-warning-circle",
            StockStatus::Low => "ph-trend-down",
            StockStatus::Good => "ph-trend-up",
        }
    }
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str()]
    }
}

impl Faceted for InventoryItem {
    type Facet = StockStatus;

    fn facet(&self) -> StockStatus {
        self.status()
    }
}

/// Inventory item as exposed by the JSON API (status made explicit).
#[derive(Debug, Clone, Serialize)]
pub struct InventoryItemRecord<'a> {
    #[serde(flatten)]
    pub item: &'a InventoryItem,
    pub status: StockStatus,
}

impl<'a> From<&'a InventoryItem> for InventoryItemRecord<'a> {
    fn from(item: &'a InventoryItem) -> Self {
        Self {
            item,
            status: item.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(stock: u32, min_stock: u32) -> InventoryItem {
        InventoryItem {
            id: Sku::new("WM900"),
            name: "Test Item".to_string(),
            category: "Test".to_string(),
            price: Price::usd_cents(100),
            stock,
            min_stock,
            barcode: "000000000000".to_string(),
            nutrition: NutritionFacts {
                calories: 1,
                protein: "0g".to_string(),
                carbs: "0g".to_string(),
                fat: "0g".to_string(),
            },
        }
    }

    #[test]
    fn test_status_is_derived_from_levels() {
        assert_eq!(item(0, 15).status(), StockStatus::Out);
        assert_eq!(item(12, 20).status(), StockStatus::Low);
        assert_eq!(item(67, 30).status(), StockStatus::Good);
    }

    #[test]
    fn test_stock_icon_follows_status() {
        assert_eq!(item(0, 15).stock_icon(), "ph-warning-circle");
        assert_eq!(item(12, 20).stock_icon(), "ph-trend-down");
        assert_eq!(item(48, 25).stock_icon(), "ph-trend-up");
    }

    #[test]
    fn test_search_fields_are_name_and_sku() {
        let item = item(1, 1);
        assert_eq!(item.search_fields(), vec!["Test Item", "WM900"]);
    }
}
