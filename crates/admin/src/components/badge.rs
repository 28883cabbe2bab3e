//! Badge and tone helpers.
//!
//! Every status enum maps to a [`Tone`], and templates turn the tone into a
//! CSS class. Keeping the mapping here means the models only carry semantic
//! values.

use serde::Serialize;

use retail_ops_core::{
    AccountStatus, AlertUrgency, CartStatus, PaymentType, ProductMomentum, StaffRole, StockStatus,
    TicketPriority, TicketStatus, TransactionStatus,
};

use crate::models::{StockBand, TrendDirection};

/// Visual emphasis of a badge, card accent, or bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Info,
    Live,
    Muted,
}

impl Tone {
    /// CSS modifier class (`tone-success`).
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "tone-primary",
            Self::Secondary => "tone-secondary",
            Self::Success => "tone-success",
            Self::Warning => "tone-warning",
            Self::Destructive => "tone-destructive",
            Self::Info => "tone-info",
            Self::Live => "tone-live",
            Self::Muted => "tone-muted",
        }
    }
}

/// Anything that renders as a coloured badge.
pub trait Badge {
    fn tone(&self) -> Tone;
    fn badge_label(&self) -> &'static str;

    /// CSS class for the badge element.
    fn badge_class(&self) -> &'static str {
        self.tone().class()
    }
}

macro_rules! badge {
    ($ty:ty { $($variant:ident => $tone:ident),+ $(,)? }) => {
        impl Badge for $ty {
            fn tone(&self) -> Tone {
                match self {
                    $(Self::$variant => Tone::$tone,)+
                }
            }

            fn badge_label(&self) -> &'static str {
                self.label()
            }
        }
    };
}

badge!(StockStatus { Good => Success, Low => Warning, Out => Destructive });
badge!(CartStatus { Active => Success, CheckingOut => Warning, Assistance => Destructive });
badge!(TicketPriority { Low => Muted, Medium => Secondary, High => Warning, Urgent => Destructive });
badge!(TicketStatus { Open => Warning, InProgress => Secondary, Escalated => Destructive, Resolved => Success });
badge!(TransactionStatus { Completed => Success, Pending => Secondary, Processing => Primary, Failed => Destructive });
badge!(PaymentType { DigitalWallet => Primary, PreOrder => Secondary, QueuelessPickup => Success, DigitalCart => Muted });
badge!(StaffRole { Admin => Destructive, Manager => Primary, Staff => Secondary });
badge!(AccountStatus { Active => Success, Inactive => Secondary });
badge!(AlertUrgency { Critical => Destructive, High => Primary, Medium => Secondary });
badge!(ProductMomentum { Hot => Destructive, Trending => Primary, Rising => Success, Stable => Secondary });

impl From<TrendDirection> for Tone {
    fn from(direction: TrendDirection) -> Self {
        match direction {
            TrendDirection::Up => Self::Success,
            TrendDirection::Down => Self::Destructive,
            TrendDirection::Flat => Self::Muted,
        }
    }
}

impl From<StockBand> for Tone {
    fn from(band: StockBand) -> Self {
        match band {
            StockBand::Critical => Self::Destructive,
            StockBand::Warning => Self::Warning,
            StockBand::Healthy => Self::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badges() {
        assert_eq!(StockStatus::Out.badge_class(), "tone-destructive");
        assert_eq!(CartStatus::Assistance.tone(), Tone::Destructive);
        assert_eq!(TransactionStatus::Failed.badge_label(), "Failed");
        assert_eq!(AlertUrgency::Critical.tone(), Tone::Destructive);
    }

    #[test]
    fn test_trend_and_band_tones() {
        assert_eq!(Tone::from(TrendDirection::Up), Tone::Success);
        assert_eq!(Tone::from(TrendDirection::Down), Tone::Destructive);
        assert_eq!(Tone::from(TrendDirection::Flat), Tone::Muted);
        assert_eq!(Tone::from(StockBand::Warning).class(), "tone-warning");
    }
}
