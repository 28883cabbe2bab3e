//! Nutritional insights route handlers.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use retail_ops_core::{QueryError, ReportPeriod};

use crate::{
    components::{StatCard, StubAction, Toast, ToastResponse, Tone, toast},
    error::AppError,
    models::{CustomerSegment, DietaryTrend, NutritionHighlight},
    state::AppState,
};

use super::{Shell, render};

/// Query parameters for the insights page.
#[derive(Debug, Default, Deserialize)]
pub struct InsightsQuery {
    pub period: Option<String>,
}

impl InsightsQuery {
    /// The selected reporting window; blank means the default.
    fn period(&self) -> Result<ReportPeriod, AppError> {
        match self.period.as_deref().map(str::trim) {
            None | Some("") => Ok(ReportPeriod::default()),
            Some(value) => Ok(value.parse().map_err(QueryError::from)?),
        }
    }
}

/// Nutritional insights page template.
#[derive(Template)]
#[template(path = "insights.html")]
pub struct InsightsTemplate<'a> {
    pub shell: Shell,
    pub period: ReportPeriod,
    pub periods: &'static [ReportPeriod],
    pub stats: Vec<StatCard>,
    pub highlights: &'a [NutritionHighlight],
    pub diets: &'a [DietaryTrend],
    pub segments: &'a [CustomerSegment],
}

fn summary() -> Vec<StatCard> {
    vec![
        StatCard::new("Healthy Products", "847", "+23% growth")
            .icon("ph-apple-logo")
            .tone(Tone::Success),
        StatCard::new("Heart-Healthy Sales", "$24,389", "+18% vs last month")
            .icon("ph-heart")
            .tone(Tone::Destructive),
        StatCard::new("Diet-Focused Customers", "5,304", "+12% new this month")
            .icon("ph-target")
            .tone(Tone::Warning),
        StatCard::new("Nutrition Score Avg", "7.8/10", "+0.3 improvement").icon("ph-chart-bar"),
    ]
}

/// Nutritional insights page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<InsightsQuery>,
) -> Result<Html<String>, AppError> {
    let period = params.period()?;
    let catalog = state.catalog();

    render(&InsightsTemplate {
        shell: Shell::new(&state, "/insights"),
        period,
        periods: ReportPeriod::ALL,
        stats: summary(),
        highlights: catalog.nutrition_highlights(),
        diets: catalog.dietary_trends(),
        segments: catalog.segments(),
    })
}

/// The "Export Report" button.
#[derive(Debug, Clone, Copy)]
pub struct ExportReport;

impl StubAction for ExportReport {
    fn name(&self) -> &'static str {
        "export"
    }

    fn toast(&self) -> Toast {
        Toast::new("Export Started", "Downloading nutritional insights report...")
    }
}

/// Export the insights report (toast only).
#[instrument]
pub async fn export() -> ToastResponse {
    tracing::info!(action = ExportReport.name(), "Insights export requested");
    toast::respond(&ExportReport)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::routes::tests::{get, post};

    #[test]
    fn test_period_defaults_to_thirty_days() {
        let params = InsightsQuery::default();
        assert_eq!(params.period().unwrap(), ReportPeriod::ThirtyDays);

        let params = InsightsQuery {
            period: Some("year".to_string()),
        };
        assert_eq!(params.period().unwrap(), ReportPeriod::Year);
    }

    #[tokio::test]
    async fn test_insights_page() {
        let (status, body) = get("/insights?period=7days").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Quinoa"));
        assert!(body.contains("Mediterranean"));
        assert!(body.contains("Fitness Enthusiasts"));
        assert!(body.contains(r#"<option value="7days" selected>"#));
    }

    #[tokio::test]
    async fn test_unknown_period_is_bad_request() {
        let (status, _) = get("/insights?period=decade").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_toast() {
        let (status, trigger, body) = post("/insights/export").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(trigger.as_deref(), Some("toast"));
        assert!(body.contains("Export Started"));
    }
}
