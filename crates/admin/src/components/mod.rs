//! Reusable view components shared by the page templates.

pub mod badge;
pub mod data_table;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use badge::{Badge, Tone};
pub use data_table::DataTableConfig;
pub use nav::{NOTIFICATION_COUNT, NavGroup, sidebar};
pub use stat_card::StatCard;
pub use toast::{StubAction, Toast, ToastResponse};
