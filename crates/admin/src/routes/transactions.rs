//! Transaction and wallet log route handlers.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use tracing::instrument;

use crate::{
    components::{
        Badge, DataTableConfig, StatCard, StubAction, Toast, ToastResponse,
        data_table::transactions_table_config, toast,
    },
    error::AppError,
    models::Transaction,
    state::AppState,
};

use super::{ListQuery, Listing, Shell, render};

/// Transactions page template.
#[derive(Template)]
#[template(path = "transactions.html")]
pub struct TransactionsTemplate<'a> {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub table: DataTableConfig,
    pub listing: Listing<'a, Transaction>,
}

fn summary() -> Vec<StatCard> {
    vec![
        StatCard::new("Total Transactions", "1,247", "+12% from yesterday").icon("ph-credit-card"),
        StatCard::new("Total Revenue", "$45,231.89", "+8.2% from yesterday")
            .icon("ph-currency-dollar"),
        StatCard::new("Digital Wallet", "78%", "Of total transactions").icon("ph-wallet"),
        StatCard::new("Processing Time", "2.3s", "Average processing").icon("ph-clock"),
    ]
}

/// Transactions page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let listing = Listing::from_query(state.catalog().transactions(), &params)?;

    render(&TransactionsTemplate {
        shell: Shell::new(&state, "/transactions"),
        stats: summary(),
        table: transactions_table_config(),
        listing,
    })
}

/// Transaction page buttons.
#[derive(Debug)]
pub enum TransactionAction<'a> {
    /// Header "Download Report".
    Report,
    /// Row eye button.
    View(&'a Transaction),
}

impl StubAction for TransactionAction<'_> {
    fn name(&self) -> &'static str {
        match self {
            Self::Report => "report",
            Self::View(_) => "view",
        }
    }

    fn toast(&self) -> Toast {
        match self {
            Self::Report => Toast::new("Download Report", "Transaction report downloaded"),
            Self::View(txn) => {
                Toast::new("View Transaction", format!("Viewing details for {}", txn.id))
            }
        }
    }
}

/// Download the transaction report (toast only).
#[instrument]
pub async fn report() -> ToastResponse {
    let action = TransactionAction::Report;
    tracing::info!(action = action.name(), "Transaction report requested");
    toast::respond(&action)
}

/// View one transaction (toast only).
#[instrument(skip(state))]
pub async fn view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ToastResponse, AppError> {
    let txn = state
        .catalog()
        .find_transaction(&id)
        .ok_or_else(|| AppError::not_found("transaction", &id))?;
    let action = TransactionAction::View(txn);

    tracing::info!(action = action.name(), transaction = %txn.id, "Transaction view requested");
    Ok(toast::respond(&action))
}
