//! Nutritional insight models.

use serde::Serialize;

use crate::components::badge::Tone;

use super::trend::{Trend, TrendDirection};

/// A product whose sales are driven by its nutrition profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionHighlight {
    pub name: String,
    pub category: String,
    pub sales: u32,
    pub growth: Trend,
    /// Headline nutrition tag (e.g. `High Protein`).
    pub nutrition: String,
}

impl NutritionHighlight {
    /// Anything not growing is drawn as trending down.
    #[must_use]
    pub fn is_trending_up(&self) -> bool {
        self.growth.direction() == TrendDirection::Up
    }
}

/// Share of shoppers following a diet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DietaryTrend {
    pub diet: String,
    /// Share of shoppers, in percent.
    pub percentage: u32,
    pub change: Trend,
    pub tone: Tone,
}

impl DietaryTrend {
    /// Badge tone for the change label: growth is success, the rest secondary.
    #[must_use]
    pub fn change_tone(&self) -> Tone {
        match self.change.direction() {
            TrendDirection::Up => Tone::Success,
            TrendDirection::Down | TrendDirection::Flat => Tone::Secondary,
        }
    }
}

/// A customer segment with its spending habits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSegment {
    pub segment: String,
    /// Customer count, as displayed.
    pub size: String,
    pub avg_spend: String,
    pub top_category: String,
    pub growth: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_trending() {
        let mut item = NutritionHighlight {
            name: "Quinoa".to_string(),
            category: "Grains".to_string(),
            sales: 534,
            growth: Trend::new("+45%"),
            nutrition: "Complete Protein".to_string(),
        };
        assert!(item.is_trending_up());
        item.growth = Trend::new("-5%");
        assert!(!item.is_trending_up());
    }

    #[test]
    fn test_diet_change_tone() {
        let diet = |change: &str| DietaryTrend {
            diet: "Keto".to_string(),
            percentage: 18,
            change: Trend::new(change),
            tone: Tone::Warning,
        };
        assert_eq!(diet("+3%").change_tone(), Tone::Success);
        assert_eq!(diet("-2%").change_tone(), Tone::Secondary);
    }
}
