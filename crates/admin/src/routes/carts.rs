//! Digital cart monitor route handlers.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use tracing::instrument;

use crate::{
    components::{
        Badge, DataTableConfig, StatCard, StubAction, Toast, ToastResponse, Tone,
        data_table::carts_table_config, toast,
    },
    error::AppError,
    models::DigitalCart,
    state::AppState,
};

use super::{ListQuery, Listing, Shell, action_verbs, render};

/// Digital carts page template.
#[derive(Template)]
#[template(path = "carts.html")]
pub struct CartsTemplate<'a> {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub table: DataTableConfig,
    pub listing: Listing<'a, DigitalCart>,
}

fn summary() -> Vec<StatCard> {
    vec![
        StatCard::new("Active Carts", "24", "+3 from last hour")
            .icon("ph-shopping-cart")
            .tone(Tone::Success),
        StatCard::new("Need Assistance", "5", "2 urgent")
            .icon("ph-warning-circle")
            .tone(Tone::Warning),
        StatCard::new("Avg Cart Value", "$67.89", "+12% vs yesterday").icon("ph-currency-dollar"),
        StatCard::new("Checkout Queue", "8", "Avg wait: 3m 45s").icon("ph-clock"),
    ]
}

/// Digital carts page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let listing = Listing::from_query(state.catalog().carts(), &params)?;

    render(&CartsTemplate {
        shell: Shell::new(&state, "/carts"),
        stats: summary(),
        table: carts_table_config(),
        listing,
    })
}

/// The header "Refresh" button.
#[derive(Debug, Clone, Copy)]
pub struct RefreshCarts;

impl StubAction for RefreshCarts {
    fn name(&self) -> &'static str {
        "refresh"
    }

    fn toast(&self) -> Toast {
        Toast::new("Refreshed", "Cart data updated successfully.")
    }
}

/// Reload cart data (toast only).
#[instrument]
pub async fn refresh() -> ToastResponse {
    tracing::info!(action = RefreshCarts.name(), "Cart refresh requested");
    toast::respond(&RefreshCarts)
}

action_verbs! {
    /// Ways to reach the shopper behind a cart.
    CartVerb {
        Call => "call",
        Message => "message",
    }
}

/// Contact the shopper of one cart.
#[derive(Debug)]
pub struct CartAction<'a> {
    pub verb: CartVerb,
    pub cart: &'a DigitalCart,
}

impl StubAction for CartAction<'_> {
    fn name(&self) -> &'static str {
        self.verb.key()
    }

    fn toast(&self) -> Toast {
        match self.verb {
            CartVerb::Call => {
                Toast::new("Call Started", format!("Calling {}...", self.cart.customer))
            }
            CartVerb::Message => Toast::new("Message Sent", "Response sent to customer."),
        }
    }
}

/// Row action handler (toast only).
#[instrument(skip(state))]
pub async fn cart_action(
    State(state): State<AppState>,
    Path((id, verb)): Path<(String, String)>,
) -> Result<ToastResponse, AppError> {
    let cart = state
        .catalog()
        .find_cart(&id)
        .ok_or_else(|| AppError::not_found("cart", &id))?;
    let action = CartAction {
        verb: verb.parse()?,
        cart,
    };

    tracing::info!(action = action.name(), cart = %cart.id, "Cart action requested");
    Ok(toast::respond(&action))
}
