//! Low-stock alert route handlers.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use tracing::instrument;

use crate::{
    components::{
        Badge, DataTableConfig, StatCard, StubAction, Toast, ToastResponse, Tone,
        data_table::alerts_table_config, toast,
    },
    error::AppError,
    models::LowStockAlert,
    state::AppState,
};

use super::{ListQuery, Listing, Shell, action_verbs, render};

/// Low-stock alerts page template.
#[derive(Template)]
#[template(path = "alerts.html")]
pub struct AlertsTemplate<'a> {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub table: DataTableConfig,
    pub listing: Listing<'a, LowStockAlert>,
}

fn summary() -> Vec<StatCard> {
    vec![
        StatCard::new("Critical Alerts", "8", "Immediate action required")
            .icon("ph-warning")
            .tone(Tone::Destructive),
        StatCard::new("High Priority", "15", "Reorder soon")
            .icon("ph-trend-down")
            .tone(Tone::Warning),
        StatCard::new("Medium Priority", "12", "Monitor closely")
            .icon("ph-package")
            .tone(Tone::Info),
        StatCard::new("Auto Reorders", "23", "Orders placed today")
            .icon("ph-check-circle")
            .tone(Tone::Success),
    ]
}

/// Low-stock alerts page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let listing = Listing::from_query(state.catalog().alerts(), &params)?;

    render(&AlertsTemplate {
        shell: Shell::new(&state, "/alerts"),
        stats: summary(),
        table: alerts_table_config(),
        listing,
    })
}

/// The header "Refresh Stock" button.
#[derive(Debug, Clone, Copy)]
pub struct RefreshStock;

impl StubAction for RefreshStock {
    fn name(&self) -> &'static str {
        "refresh"
    }

    fn toast(&self) -> Toast {
        Toast::new("Refresh", "Stock levels refreshed")
    }
}

/// Re-read stock levels (toast only).
#[instrument]
pub async fn refresh() -> ToastResponse {
    tracing::info!(action = RefreshStock.name(), "Stock refresh requested");
    toast::respond(&RefreshStock)
}

action_verbs! {
    /// Buttons on an alert row.
    AlertVerb {
        Reorder => "reorder",
        Resolve => "resolve",
        Ignore => "ignore",
    }
}

/// A button pressed on one alert.
#[derive(Debug)]
pub struct AlertAction<'a> {
    pub verb: AlertVerb,
    pub alert: &'a LowStockAlert,
}

impl StubAction for AlertAction<'_> {
    fn name(&self) -> &'static str {
        self.verb.key()
    }

    fn toast(&self) -> Toast {
        let id = &self.alert.id;
        match self.verb {
            AlertVerb::Reorder => {
                Toast::new("Reorder Initiated", format!("Reorder request sent for item {id}"))
            }
            AlertVerb::Resolve => Toast::new(
                "Alert Resolved",
                format!("Low stock alert for {id} marked as resolved"),
            ),
            AlertVerb::Ignore => {
                Toast::new("Alert Ignored", format!("Alert for {id} temporarily ignored"))
            }
        }
    }
}

/// Alert row action handler (toast only).
#[instrument(skip(state))]
pub async fn alert_action(
    State(state): State<AppState>,
    Path((id, verb)): Path<(String, String)>,
) -> Result<ToastResponse, AppError> {
    let alert = state
        .catalog()
        .find_alert(&id)
        .ok_or_else(|| AppError::not_found("alert", &id))?;
    let action = AlertAction {
        verb: verb.parse()?,
        alert,
    };

    tracing::info!(
        action = action.name(),
        product = %alert.id,
        supplier = %alert.supplier,
        "Alert action requested"
    );
    Ok(toast::respond(&action))
}
