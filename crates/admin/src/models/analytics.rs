//! Live product analytics models.

use serde::Serialize;

use retail_ops_core::{Faceted, Price, ProductCode, ProductMomentum, Searchable};

use super::trend::Trend;

/// Today's performance for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPerformance {
    pub id: ProductCode,
    pub name: String,
    pub category: String,
    /// Units sold today.
    pub sales: u32,
    /// Revenue today.
    pub revenue: Price,
    /// Change against the previous period.
    pub trend: Trend,
    pub momentum: ProductMomentum,
}

impl Searchable for ProductPerformance {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str(), self.id.as_str()]
    }
}

impl Faceted for ProductPerformance {
    type Facet = ProductMomentum;

    fn facet(&self) -> ProductMomentum {
        self.momentum
    }
}

/// A live store counter refreshed every hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveMetric {
    pub metric: String,
    pub value: String,
    /// Change from the last hour.
    pub change: Trend,
}

/// A row in the "top categories today" chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPerformance {
    pub category: String,
    /// Bar width in percent.
    pub width: u32,
    pub revenue: Price,
}

impl CategoryPerformance {
    /// Rank categories: position `i` gets a bar of `(n - i) * 20` percent and
    /// revenue of `5000 - 500 i` dollars.
    #[must_use]
    pub fn ranked(categories: &[&str]) -> Vec<Self> {
        let len = categories.len();
        categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let rank = u32::try_from(len - i).unwrap_or(0);
                let step = i64::try_from(i).unwrap_or(0);
                Self {
                    category: (*category).to_string(),
                    width: rank * 20,
                    revenue: Price::usd_cents((5000 - 500 * step) * 100),
                }
            })
            .collect()
    }
}
