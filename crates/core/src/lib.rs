//! Retail Ops Core - Shared types library.
//!
//! This crate provides common types used across all Retail Ops components:
//! - `admin` - Store operations panel (server-rendered dashboard)
//! - `cli` - Command-line tools for inspecting store data
//!
//! # Architecture
//!
//! The core crate contains only types, traits, and pure functions - no I/O,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for record codes, prices, emails, and statuses
//! - [`query`] - The search/filter predicate every listing page uses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod query;
pub mod types;

pub use query::{FacetFilter, Faceted, QueryError, SearchQuery, Searchable, filter_records};
pub use types::*;
