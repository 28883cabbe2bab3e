//! Status enums for store records.
//!
//! Every enum here doubles as a filter facet: it has a stable URL key
//! (`checking-out`), a human label (`Checking Out`), and parses from either
//! form case-insensitively.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string names no variant of a status enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseStatusError {
    /// Which enum was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Define a status enum with URL keys, display labels, and parsing.
macro_rules! define_status {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => ($key:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $key)] $variant, )+
        }

        impl $name {
            /// All variants in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable key used in URLs and JSON.
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            /// Human-readable label.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl core::str::FromStr for $name {
            type Err = ParseStatusError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| s.eq_ignore_ascii_case(v.key()) || s.eq_ignore_ascii_case(v.label()))
                    .ok_or_else(|| ParseStatusError {
                        kind: $kind,
                        value: s.to_owned(),
                    })
            }
        }
    };
}

define_status! {
    /// Stock level of an inventory item relative to its reorder threshold.
    StockStatus as "stock status" {
        Good => ("good", "In Stock"),
        Low => ("low", "Low Stock"),
        Out => ("out", "Out of Stock"),
    }
}

impl StockStatus {
    /// Derive the status from the current count and the minimum threshold.
    ///
    /// ```rust
    /// # use retail_ops_core::StockStatus;
    /// assert_eq!(StockStatus::from_levels(0, 15), StockStatus::Out);
    /// assert_eq!(StockStatus::from_levels(12, 20), StockStatus::Low);
    /// assert_eq!(StockStatus::from_levels(20, 20), StockStatus::Good);
    /// ```
    #[must_use]
    pub const fn from_levels(stock: u32, min_stock: u32) -> Self {
        if stock == 0 {
            Self::Out
        } else if stock < min_stock {
            Self::Low
        } else {
            Self::Good
        }
    }
}

define_status! {
    /// Digital cart session state.
    CartStatus as "cart status" {
        Active => ("active", "Active"),
        CheckingOut => ("checking-out", "Checking Out"),
        Assistance => ("assistance", "Needs Help"),
    }
}

define_status! {
    /// Support ticket priority.
    TicketPriority as "ticket priority" {
        Low => ("low", "Low"),
        Medium => ("medium", "Medium"),
        High => ("high", "High"),
        Urgent => ("urgent", "Urgent"),
    }
}

define_status! {
    /// Support ticket workflow state.
    TicketStatus as "ticket status" {
        Open => ("open", "Open"),
        InProgress => ("in-progress", "In Progress"),
        Escalated => ("escalated", "Escalated"),
        Resolved => ("resolved", "Resolved"),
    }
}

define_status! {
    /// Channel a support ticket came in on.
    SupportChannel as "support channel" {
        Chat => ("chat", "chat"),
        Phone => ("phone", "phone"),
        Video => ("video", "video"),
    }
}

define_status! {
    /// Payment transaction state.
    TransactionStatus as "transaction status" {
        Completed => ("completed", "Completed"),
        Pending => ("pending", "Pending"),
        Processing => ("processing", "Processing"),
        Failed => ("failed", "Failed"),
    }
}

define_status! {
    /// How a transaction was paid or fulfilled.
    PaymentType as "payment type" {
        DigitalWallet => ("digital-wallet", "Digital Wallet"),
        PreOrder => ("pre-order", "Pre-order"),
        QueuelessPickup => ("queue-less-pickup", "Queue-less Pickup"),
        DigitalCart => ("digital-cart", "Digital Cart"),
    }
}

define_status! {
    /// Staff account role.
    StaffRole as "staff role" {
        Admin => ("admin", "Admin"),
        Manager => ("manager", "Manager"),
        Staff => ("staff", "Staff"),
    }
}

define_status! {
    /// Staff account state.
    AccountStatus as "account status" {
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
    }
}

define_status! {
    /// How soon a low-stock alert needs attention.
    AlertUrgency as "alert urgency" {
        Critical => ("critical", "Critical"),
        High => ("high", "High"),
        Medium => ("medium", "Medium"),
    }
}

define_status! {
    /// Sales momentum label on the product analytics page.
    ProductMomentum as "product momentum" {
        Hot => ("hot", "Hot"),
        Trending => ("trending", "Trending"),
        Rising => ("rising", "Rising"),
        Stable => ("stable", "Stable"),
    }
}

define_status! {
    /// Reporting window for the nutritional insights page.
    ReportPeriod as "report period" {
        SevenDays => ("7days", "Last 7 days"),
        ThirtyDays => ("30days", "Last 30 days"),
        NinetyDays => ("90days", "Last 90 days"),
        Year => ("year", "This year"),
    }
}

impl Default for ReportPeriod {
    fn default() -> Self {
        Self::ThirtyDays
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_from_levels() {
        assert_eq!(StockStatus::from_levels(12, 20), StockStatus::Low);
        assert_eq!(StockStatus::from_levels(48, 25), StockStatus::Good);
        assert_eq!(StockStatus::from_levels(0, 15), StockStatus::Out);
        assert_eq!(StockStatus::from_levels(0, 0), StockStatus::Out);
        assert_eq!(StockStatus::from_levels(5, 0), StockStatus::Good);
    }

    #[test]
    fn test_parse_accepts_key_and_label() {
        assert_eq!(
            "checking-out".parse::<CartStatus>().unwrap(),
            CartStatus::CheckingOut
        );
        assert_eq!(
            "Checking Out".parse::<CartStatus>().unwrap(),
            CartStatus::CheckingOut
        );
        assert_eq!(
            "FAILED".parse::<TransactionStatus>().unwrap(),
            TransactionStatus::Failed
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "shipped".parse::<TransactionStatus>().unwrap_err();
        assert_eq!(err.kind, "transaction status");
        assert_eq!(err.value, "shipped");
        assert_eq!(err.to_string(), "invalid transaction status: shipped");
    }

    #[test]
    fn test_display_is_url_key() {
        assert_eq!(TicketStatus::InProgress.to_string(), "in-progress");
        assert_eq!(PaymentType::QueuelessPickup.label(), "Queue-less Pickup");
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&StockStatus::Out).unwrap();
        assert_eq!(json, "\"out\"");
        let status: TicketStatus = serde_json::from_str("\"escalated\"").unwrap();
        assert_eq!(status, TicketStatus::Escalated);
    }

    #[test]
    fn test_report_period_default() {
        assert_eq!(ReportPeriod::default(), ReportPeriod::ThirtyDays);
        assert_eq!(ReportPeriod::ALL.len(), 4);
    }
}
