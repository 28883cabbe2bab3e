//! Inventory management route handlers.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use tracing::instrument;

use crate::{
    components::{
        Badge, DataTableConfig, StatCard, StubAction, Toast, ToastResponse, Tone,
        data_table::inventory_table_config, toast,
    },
    error::AppError,
    models::InventoryItem,
    state::AppState,
};

use super::{ListQuery, Listing, Shell, action_verbs, render};

/// Inventory index page template.
#[derive(Template)]
#[template(path = "inventory.html")]
pub struct InventoryTemplate<'a> {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub table: DataTableConfig,
    pub listing: Listing<'a, InventoryItem>,
}

fn summary() -> Vec<StatCard> {
    vec![
        StatCard::new("Total Products", "1,247", "Across all departments").icon("ph-package"),
        StatCard::new("Low Stock", "12", "Below reorder threshold")
            .icon("ph-trend-down")
            .tone(Tone::Warning),
        StatCard::new("Out of Stock", "3", "Needs restocking")
            .icon("ph-warning-circle")
            .tone(Tone::Destructive),
        StatCard::new("Total Value", "$89,432", "At shelf price").icon("ph-currency-dollar"),
    ]
}

/// Inventory index page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let listing = Listing::from_query(state.catalog().inventory(), &params)?;

    render(&InventoryTemplate {
        shell: Shell::new(&state, "/inventory"),
        stats: summary(),
        table: inventory_table_config(),
        listing,
    })
}

action_verbs! {
    /// Row buttons on the inventory table.
    InventoryVerb {
        View => "view",
        Edit => "edit",
        Delete => "delete",
    }
}

/// A row button pressed for one product.
#[derive(Debug)]
pub struct InventoryAction<'a> {
    pub verb: InventoryVerb,
    pub item: &'a InventoryItem,
}

impl StubAction for InventoryAction<'_> {
    fn name(&self) -> &'static str {
        self.verb.key()
    }

    fn toast(&self) -> Toast {
        let item = self.item;
        match self.verb {
            InventoryVerb::View => Toast::new(
                "View Product",
                format!("Viewing details for {} ({})", item.name, item.id),
            ),
            InventoryVerb::Edit => Toast::new("Edit Product", format!("Editing {}", item.name)),
            InventoryVerb::Delete => {
                Toast::new("Delete Product", format!("{} removed from inventory", item.name))
                    .destructive()
            }
        }
    }
}

/// Row action handler (toast only).
#[instrument(skip(state))]
pub async fn item_action(
    State(state): State<AppState>,
    Path((id, verb)): Path<(String, String)>,
) -> Result<ToastResponse, AppError> {
    let item = state
        .catalog()
        .find_inventory(&id)
        .ok_or_else(|| AppError::not_found("product", &id))?;
    let action = InventoryAction {
        verb: verb.parse()?,
        item,
    };

    tracing::info!(action = action.name(), sku = %item.id, "Inventory action requested");
    Ok(toast::respond(&action))
}

action_verbs! {
    /// Header buttons on the inventory page.
    InventoryTool {
        Add => "add",
        Upload => "upload",
    }
}

impl StubAction for InventoryTool {
    fn name(&self) -> &'static str {
        self.key()
    }

    fn toast(&self) -> Toast {
        match self {
            Self::Add => Toast::new("Add Product", "Add product functionality activated"),
            Self::Upload => Toast::new(
                "Batch Upload",
                "Upload received. Products are not imported from CSV in this console.",
            ),
        }
    }
}

/// Header button handler (toast only; an uploaded file is never read).
#[instrument]
pub async fn tool(Path(tool): Path<String>) -> Result<ToastResponse, AppError> {
    let tool: InventoryTool = tool.parse()?;

    tracing::info!(action = tool.name(), "Inventory tool requested");
    Ok(toast::respond(&tool))
}
