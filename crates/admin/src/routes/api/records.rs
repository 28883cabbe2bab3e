//! Record listing API handlers.
//!
//! Each endpoint takes the same `q` and filter parameters as its page and
//! returns `{"items": [...], "total": N, "matched": M}`.

use std::fmt::Display;
use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::instrument;

use retail_ops_core::{Faceted, ParseStatusError, Searchable};

use crate::{
    error::AppError,
    models::InventoryItemRecord,
    routes::{ListQuery, Listing},
    state::AppState,
};

/// Build the records router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/inventory", get(inventory))
        .route("/api/carts", get(carts))
        .route("/api/tickets", get(tickets))
        .route("/api/transactions", get(transactions))
        .route("/api/users", get(users))
        .route("/api/alerts", get(alerts))
        .route("/api/analytics/products", get(products))
}

/// Response body for every listing endpoint.
#[derive(Debug, Serialize)]
pub struct ListResponse<R> {
    pub items: Vec<R>,
    pub total: usize,
    pub matched: usize,
}

/// Filter `records` and serialize the matches through `view`.
fn list_json<'a, T, R>(
    records: &'a [T],
    params: &ListQuery,
    view: impl Fn(&'a T) -> R,
) -> Result<Response, AppError>
where
    T: Searchable + Faceted,
    T::Facet: FromStr<Err = ParseStatusError> + Display,
    R: Serialize,
{
    let listing = Listing::from_query(records, params)?;
    let body = ListResponse {
        total: listing.total,
        matched: listing.matched(),
        items: listing.items.into_iter().map(view).collect(),
    };
    Ok(Json(body).into_response())
}

/// List inventory items, with their derived stock status.
///
/// # Errors
///
/// Returns `400` for an unknown `status`.
#[instrument(skip(state))]
pub async fn inventory(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Response, AppError> {
    list_json(state.catalog().inventory(), &params, InventoryItemRecord::from)
}

#[instrument(skip(state))]
pub async fn carts(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Response, AppError> {
    list_json(state.catalog().carts(), &params, |cart| cart)
}

#[instrument(skip(state))]
pub async fn tickets(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Response, AppError> {
    list_json(state.catalog().tickets(), &params, |ticket| ticket)
}

#[instrument(skip(state))]
pub async fn transactions(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Response, AppError> {
    list_json(state.catalog().transactions(), &params, |txn| txn)
}

#[instrument(skip(state))]
pub async fn users(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Response, AppError> {
    list_json(state.catalog().staff(), &params, |user| user)
}

#[instrument(skip(state))]
pub async fn alerts(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Response, AppError> {
    list_json(state.catalog().alerts(), &params, |alert| alert)
}

/// List product performance rows (`momentum` filters).
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Response, AppError> {
    list_json(state.catalog().products(), &params, |product| product)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::Value;

    use crate::routes::tests::get;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(uri).await;
        let value = serde_json::from_str(&body).unwrap_or(Value::Null);
        (status, value)
    }

    fn ids(value: &Value) -> Vec<String> {
        value["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_inventory_includes_status() {
        let (status, value) = get_json("/api/inventory?q=bread").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["total"], 4);
        assert_eq!(value["matched"], 1);
        assert_eq!(value["items"][0]["name"], "Whole Wheat Bread");
        assert_eq!(value["items"][0]["status"], "out");
    }

    #[tokio::test]
    async fn test_filters_match_pages() {
        let (_, value) = get_json("/api/carts?status=checking-out").await;
        assert_eq!(ids(&value), vec!["CART-249"]);

        let (_, value) = get_json("/api/transactions?status=failed").await;
        assert_eq!(ids(&value), vec!["TXN005"]);

        let (_, value) = get_json("/api/tickets?status=all&q=sarah").await;
        assert_eq!(ids(&value), vec!["SUP-001"]);

        let (_, value) = get_json("/api/alerts?urgency=high").await;
        assert_eq!(ids(&value), vec!["P002", "P005"]);

        let (_, value) = get_json("/api/analytics/products?momentum=hot").await;
        assert_eq!(ids(&value), vec!["P001", "P005"]);
    }

    #[tokio::test]
    async fn test_users_by_role() {
        let (status, value) = get_json("/api/users?role=manager").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["matched"], 1);
        assert_eq!(value["items"][0]["email"], "john.manager@walmart.com");
    }

    #[tokio::test]
    async fn test_unknown_filter_is_bad_request() {
        let (status, _) = get("/api/carts?status=abandoned").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
