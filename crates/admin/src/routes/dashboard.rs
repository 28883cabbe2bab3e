//! Dashboard route handlers.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::{
    components::{StubAction, Toast, ToastResponse, toast},
    error::AppError,
    models::{Activity, OverviewStat, QuickLink},
    state::AppState,
};

use super::{Shell, render};

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub shell: Shell,
    pub stats: &'a [OverviewStat],
    pub activities: &'a [Activity],
    pub quick_links: &'a [QuickLink],
}

/// Dashboard page handler.
#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let catalog = state.catalog();
    render(&DashboardTemplate {
        shell: Shell::new(&state, "/"),
        stats: catalog.overview(),
        activities: catalog.activities(),
        quick_links: catalog.quick_links(),
    })
}

/// The header "Live View" button.
#[derive(Debug, Clone, Copy)]
pub struct LiveView;

impl StubAction for LiveView {
    fn name(&self) -> &'static str {
        "live-view"
    }

    fn toast(&self) -> Toast {
        Toast::new("Live View Activated", "Real-time monitoring is now active.")
    }
}

/// Switch the dashboard into live view (toast only).
#[instrument]
pub async fn live_view() -> ToastResponse {
    tracing::info!(action = LiveView.name(), "Live view requested");
    toast::respond(&LiveView)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::tests::{get, post};

    #[tokio::test]
    async fn test_dashboard_shows_overview() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Active Digital Carts"));
        assert!(body.contains("$45,321"));
        assert!(body.contains("Low stock alert: Organic Bananas (12 units remaining)"));
        assert!(body.contains("href=\"/carts\""));
    }

    #[tokio::test]
    async fn test_live_view_toast() {
        let (status, trigger, body) = post("/live-view").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(trigger.as_deref(), Some("toast"));
        assert!(body.contains("Live View Activated"));
        assert!(body.contains("Real-time monitoring is now active."));
    }
}
