//! API route handlers for admin.
//!
//! Read-only JSON views of the list pages, sharing their query parameters.

pub mod records;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router.
pub fn router() -> Router<AppState> {
    Router::new().merge(records::router())
}
