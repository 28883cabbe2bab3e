//! Product analytics route handlers.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::instrument;

use crate::{
    components::{Badge, StubAction, Toast, ToastResponse, toast},
    error::AppError,
    models::{CategoryPerformance, LiveMetric, ProductPerformance},
    state::AppState,
};

use super::{Shell, action_verbs, render};

/// Product analytics page template.
#[derive(Template)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate<'a> {
    pub shell: Shell,
    pub metrics: &'a [LiveMetric],
    pub products: &'a [ProductPerformance],
    pub categories: &'a [CategoryPerformance],
}

/// Product analytics page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let catalog = state.catalog();

    render(&AnalyticsTemplate {
        shell: Shell::new(&state, "/analytics"),
        metrics: catalog.live_metrics(),
        products: catalog.products(),
        categories: catalog.categories(),
    })
}

action_verbs! {
    /// Page-level buttons on the analytics page.
    AnalyticsAction {
        Refresh => "refresh",
        Report => "report",
        PriceAlerts => "price-alerts",
        InventoryImpact => "inventory-impact",
        Promotions => "promotions",
    }
}

impl StubAction for AnalyticsAction {
    fn name(&self) -> &'static str {
        self.key()
    }

    fn toast(&self) -> Toast {
        match self {
            Self::Refresh => Toast::new("Data Refreshed", "Live analytics updated successfully"),
            Self::Report => Toast::new("Download Report", "Product analytics report downloaded"),
            Self::PriceAlerts => Toast::new("Price Alert", "Price monitoring activated"),
            Self::InventoryImpact => Toast::new("Inventory Check", "Checking inventory levels"),
            Self::Promotions => {
                Toast::new("Promotion Analysis", "Analyzing promotion effectiveness")
            }
        }
    }
}

/// Page-level action handler (toast only).
#[instrument]
pub async fn action(Path(action): Path<String>) -> Result<ToastResponse, AppError> {
    let action: AnalyticsAction = action.parse()?;

    tracing::info!(action = action.name(), "Analytics action requested");
    Ok(toast::respond(&action))
}

/// Eye button on a product row.
#[derive(Debug)]
pub struct ViewProduct<'a>(pub &'a ProductPerformance);

impl StubAction for ViewProduct<'_> {
    fn name(&self) -> &'static str {
        "view"
    }

    fn toast(&self) -> Toast {
        Toast::new(
            "Product Details",
            format!("Viewing detailed analytics for {}", self.0.id),
        )
    }
}

/// Product detail handler (toast only).
#[instrument(skip(state))]
pub async fn view_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ToastResponse, AppError> {
    let product = state
        .catalog()
        .find_product(&id)
        .ok_or_else(|| AppError::not_found("product", &id))?;
    let action = ViewProduct(product);

    tracing::info!(action = action.name(), product = %product.id, "Product analytics requested");
    Ok(toast::respond(&action))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::tests::{get, post};

    #[tokio::test]
    async fn test_analytics_page() {
        let (status, body) = get("/analytics").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Current Shoppers"));
        assert!(body.contains("Great Value Milk"));
        assert!(body.contains("$4761.23"));
        assert!(body.contains(r#"<meter class="category-bar" min="0" max="100" value="100">"#));
        assert!(body.contains("$5,000"));
        assert!(body.contains("$3,000"));
    }

    #[tokio::test]
    async fn test_page_actions() {
        for (path, text) in [
            ("/analytics/refresh", "Live analytics updated successfully"),
            ("/analytics/report", "Product analytics report downloaded"),
            ("/analytics/price-alerts", "Price monitoring activated"),
            ("/analytics/inventory-impact", "Checking inventory levels"),
            ("/analytics/promotions", "Analyzing promotion effectiveness"),
        ] {
            let (status, trigger, body) = post(path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(trigger.as_deref(), Some("toast"));
            assert!(body.contains(text), "{path}");
        }

        let (status, _, _) = post("/analytics/forecast").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_view_product() {
        let (status, _, body) = post("/analytics/products/P005/view").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Viewing detailed analytics for P005"));

        let (status, _, _) = post("/analytics/products/P999/view").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
