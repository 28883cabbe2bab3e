//! Domain models for the store operations console.
//!
//! Every list-page record implements [`retail_ops_core::Searchable`] and
//! [`retail_ops_core::Faceted`] so the pages and the JSON API share one
//! filter predicate.

pub mod alert;
pub mod analytics;
pub mod cart;
pub mod dashboard;
pub mod insights;
pub mod inventory;
pub mod staff;
pub mod ticket;
pub mod transaction;
pub mod trend;

pub use alert::{LowStockAlert, StockBand};
pub use analytics::{CategoryPerformance, LiveMetric, ProductPerformance};
pub use cart::DigitalCart;
pub use dashboard::{Activity, ActivityKind, OverviewStat, QuickLink};
pub use insights::{CustomerSegment, DietaryTrend, NutritionHighlight};
pub use inventory::{InventoryItem, InventoryItemRecord, NutritionFacts};
pub use staff::StaffAccount;
pub use ticket::SupportTicket;
pub use transaction::{TIMESTAMP_FORMAT, Transaction};
pub use trend::{Trend, TrendDirection};
