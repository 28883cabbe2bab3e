//! Low-stock alert models.

use serde::Serialize;

use retail_ops_core::{AlertUrgency, Faceted, ProductCode, Searchable};

use crate::components::Tone;

/// How full the stock bar on an alert row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockBand {
    /// At or below a quarter of the minimum.
    Critical,
    /// At or below half of the minimum.
    Warning,
    Healthy,
}

impl StockBand {
    /// Band for a stock percentage in `0..=100`.
    #[must_use]
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage <= 25.0 {
            Self::Critical
        } else if percentage <= 50.0 {
            Self::Warning
        } else {
            Self::Healthy
        }
    }
}

/// A product that has dropped under its reorder threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockAlert {
    pub id: ProductCode,
    pub name: String,
    /// Units on hand.
    pub current_stock: u32,
    /// Units the shelf should hold.
    pub min_stock: u32,
    pub category: String,
    pub supplier: String,
    pub urgency: AlertUrgency,
}

impl LowStockAlert {
    /// `current / min * 100`, clamped to 100. A zero minimum counts as full.
    #[must_use]
    pub fn stock_percentage(&self) -> f64 {
        if self.min_stock == 0 {
            return 100.0;
        }
        (f64::from(self.current_stock) / f64::from(self.min_stock) * 100.0).min(100.0)
    }

    #[must_use]
    pub fn stock_band(&self) -> StockBand {
        StockBand::for_percentage(self.stock_percentage())
    }

    /// Colour of the stock bar.
    #[must_use]
    pub fn band_tone(&self) -> Tone {
        self.stock_band().into()
    }

    /// Percentage rounded for the bar's CSS width.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn bar_width(&self) -> u32 {
        self.stock_percentage().round() as u32
    }
}

impl Searchable for LowStockAlert {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.category.as_str(),
            self.supplier.as_str(),
        ]
    }
}

impl Faceted for LowStockAlert {
    type Facet = AlertUrgency;

    fn facet(&self) -> AlertUrgency {
        self.urgency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(current_stock: u32, min_stock: u32) -> LowStockAlert {
        LowStockAlert {
            id: ProductCode::new("P900"),
            name: "Test".to_string(),
            current_stock,
            min_stock,
            category: "Test".to_string(),
            supplier: "Test Supply".to_string(),
            urgency: AlertUrgency::Medium,
        }
    }

    #[test]
    fn test_stock_percentage_clamps_at_100() {
        assert!((alert(12, 50).stock_percentage() - 24.0).abs() < f64::EPSILON);
        assert!((alert(80, 40).stock_percentage() - 100.0).abs() < f64::EPSILON);
        assert!((alert(5, 0).stock_percentage() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stock_band_thresholds() {
        assert_eq!(alert(12, 50).stock_band(), StockBand::Critical);
        assert_eq!(alert(25, 100).stock_band(), StockBand::Critical);
        assert_eq!(alert(8, 25).stock_band(), StockBand::Warning);
        assert_eq!(alert(50, 100).stock_band(), StockBand::Warning);
        assert_eq!(alert(23, 40).stock_band(), StockBand::Healthy);
    }

    #[test]
    fn test_bar_width_rounds() {
        assert_eq!(alert(18, 45).bar_width(), 40);
        assert_eq!(alert(8, 25).bar_width(), 32);
    }
}
