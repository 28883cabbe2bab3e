//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! # Pages
//! GET  /                              - Dashboard overview
//! GET  /inventory                     - Inventory (q, status)
//! GET  /carts                         - Digital carts (q, status)
//! GET  /insights                      - Nutritional insights (period)
//! GET  /support                       - Support console (q, status)
//! GET  /support/{id}                  - Ticket dialog fragment
//! GET  /transactions                  - Transactions (q, status)
//! GET  /analytics                     - Product analytics
//! GET  /alerts                        - Low-stock alerts (q, urgency)
//! GET  /users                         - User management (q, role)
//!
//! # Actions (return a toast fragment, never change data)
//! POST /live-view
//! POST /inventory/{add|upload}
//! POST /inventory/{id}/{view|edit|delete}
//! POST /carts/refresh
//! POST /carts/{id}/{call|message}
//! POST /insights/export
//! POST /support/{id}/reply
//! POST /support/tools/{video-call|transfer|escalate|resolve}
//! POST /transactions/report
//! POST /transactions/{id}/view
//! POST /analytics/{refresh|report|price-alerts|inventory-impact|promotions}
//! POST /analytics/products/{id}/view
//! POST /alerts/refresh
//! POST /alerts/{id}/{reorder|resolve|ignore}
//! POST /users
//! POST /users/{id}/{view|edit|delete}
//!
//! # JSON
//! GET  /api/{inventory|carts|tickets|transactions|users|alerts}
//! GET  /api/analytics/products
//! ```
//!
//! Anything else falls through to [`not_found::not_found`].

use std::fmt::Display;
use std::str::FromStr;

use askama::Template;
use axum::{
    Router,
    response::Html,
    routing::{get, post},
};
use serde::Deserialize;

use retail_ops_core::{
    FacetFilter, Faceted, ParseStatusError, SearchQuery, Searchable, filter_records,
};

use crate::components::{NOTIFICATION_COUNT, NavGroup, sidebar};
use crate::error::AppError;
use crate::state::AppState;

pub mod alerts;
pub mod analytics;
pub mod api;
pub mod carts;
pub mod dashboard;
pub mod insights;
pub mod inventory;
pub mod not_found;
pub mod support;
pub mod transactions;
pub mod users;

/// Page routes as `(path, title)`, in sidebar order.
pub const PAGES: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/inventory", "Inventory Management"),
    ("/carts", "Digital Cart Monitor"),
    ("/insights", "Nutritional Insights"),
    ("/transactions", "Transaction & Wallet Logs"),
    ("/analytics", "Product Analytics"),
    ("/support", "Customer Support Console"),
    ("/users", "User Management"),
    ("/alerts", "Low Stock Alerts"),
];

/// Build the admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::dashboard))
        .route("/live-view", post(dashboard::live_view))
        // Inventory
        .route("/inventory", get(inventory::index))
        .route("/inventory/{tool}", post(inventory::tool))
        .route("/inventory/{id}/{action}", post(inventory::item_action))
        // Digital carts
        .route("/carts", get(carts::index))
        .route("/carts/refresh", post(carts::refresh))
        .route("/carts/{id}/{action}", post(carts::cart_action))
        // Nutritional insights
        .route("/insights", get(insights::index))
        .route("/insights/export", post(insights::export))
        // Customer support
        .route("/support", get(support::index))
        .route("/support/tools/{tool}", post(support::tool))
        .route("/support/{id}", get(support::ticket))
        .route("/support/{id}/reply", post(support::reply))
        // Transactions
        .route("/transactions", get(transactions::index))
        .route("/transactions/report", post(transactions::report))
        .route("/transactions/{id}/view", post(transactions::view))
        // Product analytics
        .route("/analytics", get(analytics::index))
        .route("/analytics/products/{id}/view", post(analytics::view_product))
        .route("/analytics/{action}", post(analytics::action))
        // Low-stock alerts
        .route("/alerts", get(alerts::index))
        .route("/alerts/refresh", post(alerts::refresh))
        .route("/alerts/{id}/{action}", post(alerts::alert_action))
        // User management
        .route("/users", get(users::index).post(users::add))
        .route("/users/{id}/{action}", post(users::user_action))
        // JSON
        .merge(api::router())
}

// =============================================================================
// Layout
// =============================================================================

/// Sidebar link with its highlight state resolved.
#[derive(Debug, Clone)]
pub struct NavLinkView {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub badge: Option<String>,
    pub live: bool,
    pub active: bool,
}

/// Sidebar group for templates.
#[derive(Debug, Clone)]
pub struct NavGroupView {
    pub title: &'static str,
    pub items: Vec<NavLinkView>,
}

impl NavGroupView {
    fn resolve(group: NavGroup, current_path: &str) -> Self {
        Self {
            title: group.title,
            items: group
                .items
                .into_iter()
                .map(|item| NavLinkView {
                    active: item.is_active(current_path),
                    badge: item.badge.map(|b| b.label()),
                    live: item.badge.is_some_and(|b| b.is_live()),
                    label: item.label,
                    href: item.href,
                    icon: item.icon,
                })
                .collect(),
        }
    }
}

/// Everything `base.html` needs: header, sidebar, and the current path.
#[derive(Debug, Clone)]
pub struct Shell {
    pub store_name: String,
    pub current_path: String,
    pub nav: Vec<NavGroupView>,
    pub notifications: u32,
}

impl Shell {
    #[must_use]
    pub fn new(state: &AppState, current_path: &str) -> Self {
        Self {
            store_name: state.config().store_name.clone(),
            current_path: current_path.to_string(),
            nav: sidebar()
                .into_iter()
                .map(|group| NavGroupView::resolve(group, current_path))
                .collect(),
            notifications: NOTIFICATION_COUNT,
        }
    }
}

/// Render a template, turning a render failure into a 500.
///
/// # Errors
///
/// Returns `AppError::Internal` if the template fails to render.
pub fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Template render error: {e}")))
}

// =============================================================================
// Listings
// =============================================================================

/// Query parameters shared by every list page and the JSON API.
///
/// The categorical filter is named after the column it filters
/// (`status`, `role`, `urgency`, `momentum`); `filter` works everywhere.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub filter: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
    pub urgency: Option<String>,
    pub momentum: Option<String>,
}

impl ListQuery {
    /// The filter value to apply. A column-named parameter wins over `filter`.
    #[must_use]
    pub fn facet(&self) -> Option<&str> {
        [
            &self.status,
            &self.role,
            &self.urgency,
            &self.momentum,
            &self.filter,
        ]
        .into_iter()
        .find_map(|value| value.as_deref())
    }
}

/// One page of filtered records.
#[derive(Debug)]
pub struct Listing<'a, T> {
    pub items: Vec<&'a T>,
    /// Size of the unfiltered collection.
    pub total: usize,
    /// Search input as typed.
    pub query: String,
    /// Active filter key (`all` when unrestricted).
    pub filter: String,
}

impl<'a, T> Listing<'a, T>
where
    T: Searchable + Faceted,
    T::Facet: FromStr<Err = ParseStatusError> + Display,
{
    /// Apply the search and filter parameters to `records`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for an unknown filter value.
    pub fn from_query(records: &'a [T], params: &ListQuery) -> Result<Self, AppError> {
        let query = SearchQuery::from_param(params.q.as_deref());
        let filter = FacetFilter::<T::Facet>::from_param(params.facet())?;

        Ok(Self {
            items: filter_records(records, &query, &filter),
            total: records.len(),
            query: query.raw().to_string(),
            filter: filter.key(),
        })
    }
}

impl<T> Listing<'_, T> {
    #[must_use]
    pub fn matched(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Actions
// =============================================================================

/// Define the verbs accepted in an action path segment.
///
/// An unknown verb is a `400 Bad Request`.
macro_rules! action_verbs {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Path segment for this verb.
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok(Self::$variant),)+
                    other => Err($crate::error::AppError::BadRequest(format!(
                        "Unknown action: {other}"
                    ))),
                }
            }
        }
    };
}

pub(crate) use action_verbs;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use crate::catalog::Catalog;
    use crate::config::AdminConfig;
    use crate::models::InventoryItem;

    use super::*;

    pub fn test_state() -> AppState {
        AppState::new(AdminConfig::default(), Catalog::seeded().unwrap())
    }

    /// Send one request through the full application router.
    pub async fn send(request: Request<Body>) -> (StatusCode, Option<String>, String) {
        let response = crate::app(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let trigger = response
            .headers()
            .get("HX-Trigger")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, trigger, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn get(uri: &str) -> (StatusCode, String) {
        let (status, _, body) = send(Request::get(uri).body(Body::empty()).unwrap()).await;
        (status, body)
    }

    pub async fn post(uri: &str) -> (StatusCode, Option<String>, String) {
        send(Request::post(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(uri: &str, form: &str) -> (StatusCode, Option<String>, String) {
        send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }

    #[test]
    fn test_shell_marks_one_active_link() {
        let shell = Shell::new(&test_state(), "/support");
        let active: Vec<_> = shell
            .nav
            .iter()
            .flat_map(|g| &g.items)
            .filter(|i| i.active)
            .map(|i| i.href)
            .collect();
        assert_eq!(active, vec!["/support"]);
        assert_eq!(shell.store_name, "Retail Operations");
        assert_eq!(shell.notifications, 3);
    }

    #[test]
    fn test_listing_applies_query_and_filter() {
        let catalog = Catalog::seeded().unwrap();
        let params = ListQuery {
            q: Some("DAIRY".to_string()),
            ..ListQuery::default()
        };
        let listing: Listing<'_, InventoryItem> =
            Listing::from_query(catalog.inventory(), &params).unwrap();
        assert_eq!(listing.total, 4);
        assert_eq!(listing.matched(), 0);
        assert!(listing.is_empty());

        let params = ListQuery {
            q: Some("milk".to_string()),
            filter: Some("good".to_string()),
            ..ListQuery::default()
        };
        let listing = Listing::from_query(catalog.inventory(), &params).unwrap();
        assert_eq!(listing.matched(), 1);
        assert_eq!(listing.filter, "good");
        assert_eq!(listing.query, "milk");
    }

    #[test]
    fn test_listing_rejects_unknown_filter() {
        let catalog = Catalog::seeded().unwrap();
        let params = ListQuery {
            filter: Some("discontinued".to_string()),
            ..ListQuery::default()
        };
        let err = Listing::from_query(catalog.inventory(), &params).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_column_parameter_wins_over_filter() {
        let params = ListQuery {
            filter: Some("good".to_string()),
            status: Some("out".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(params.facet(), Some("out"));
        assert_eq!(ListQuery::default().facet(), None);
    }

    #[tokio::test]
    async fn test_filter_and_column_parameter_together() {
        let (status, body) = get("/inventory?filter=good&status=out").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Whole Wheat Bread"));
        assert!(!body.contains("Whole Milk - 1 Gallon"));
    }

    #[tokio::test]
    async fn test_every_page_renders() {
        for (path, title) in PAGES {
            let (status, body) = get(path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(body.contains(title), "{path} is missing its title");
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
}
