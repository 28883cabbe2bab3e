//! Data table component types.
//!
//! These types describe the search box, filter pills, and columns of each
//! list page. The page templates render them through `partials/table_toolbar.html`.

use serde::Serialize;

use retail_ops_core::{
    AlertUrgency, CartStatus, StaffRole, StockStatus, TicketStatus, TransactionStatus,
};

/// Column definition for a data table.
#[derive(Debug, Clone, Serialize)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Right-align numeric columns.
    pub numeric: bool,
}

impl TableColumn {
    /// Create a new text column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            numeric: false,
        }
    }

    /// Create a right-aligned numeric column.
    #[must_use]
    pub fn numeric(key: &str, label: &str) -> Self {
        Self {
            numeric: true,
            ..Self::new(key, label)
        }
    }
}

/// Option for a select filter.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOption {
    /// Query-string value.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl FilterOption {
    /// Create a new filter option.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Filter definition for a data table.
#[derive(Debug, Clone, Serialize)]
pub struct TableFilter {
    /// Filter parameter key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Available options, `all` first.
    pub options: Vec<FilterOption>,
}

impl TableFilter {
    /// Create a select filter with an "All" option prepended.
    #[must_use]
    pub fn select(key: &str, label: &str, options: Vec<FilterOption>) -> Self {
        let mut all = vec![FilterOption::new(retail_ops_core::query::ALL_KEY, "All")];
        all.extend(options);
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options: all,
        }
    }
}

/// Build filter options from a status enum's variants.
macro_rules! facet_options {
    ($ty:ty) => {
        <$ty>::ALL
            .iter()
            .map(|v| FilterOption::new(v.key(), v.label()))
            .collect::<Vec<_>>()
    };
}

/// Configuration for a data table.
#[derive(Debug, Clone, Serialize)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Page the toolbar form submits to.
    pub action: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Filter definitions.
    pub filters: Vec<TableFilter>,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Icon for empty state.
    pub empty_icon: String,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: Option<String>,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str, action: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            action: action.to_string(),
            columns: vec![],
            filters: vec![],
            search_placeholder: "Search...".to_string(),
            empty_icon: "ph-list".to_string(),
            empty_title: "No items found".to_string(),
            empty_description: None,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, icon: &str, title: &str, description: Option<&str>) -> Self {
        self.empty_icon = icon.to_string();
        self.empty_title = title.to_string();
        self.empty_description = description.map(ToString::to_string);
        self
    }

    /// The filter key of the first filter, used as the query parameter name.
    #[must_use]
    pub fn filter_key(&self) -> &str {
        self.filters.first().map_or("", |f| f.key.as_str())
    }
}

/// Build the inventory table configuration.
#[must_use]
pub fn inventory_table_config() -> DataTableConfig {
    DataTableConfig::new("inventory", "/inventory")
        .column(TableColumn::new("product", "Product"))
        .column(TableColumn::new("category", "Category"))
        .column(TableColumn::numeric("price", "Price"))
        .column(TableColumn::numeric("stock", "Stock"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("nutrition", "Nutrition"))
        .column(TableColumn::new("actions", "Actions"))
        .filter(TableFilter::select(
            "status",
            "Status",
            facet_options!(StockStatus),
        ))
        .search_placeholder("Search products by name or SKU...")
        .empty_state(
            "ph-package",
            "No products found",
            Some("Try adjusting your search or filters"),
        )
}

/// Build the digital carts table configuration.
#[must_use]
pub fn carts_table_config() -> DataTableConfig {
    DataTableConfig::new("carts", "/carts")
        .column(TableColumn::new("cart", "Cart"))
        .column(TableColumn::new("customer", "Customer"))
        .column(TableColumn::new("location", "Location"))
        .column(TableColumn::numeric("items", "Items"))
        .column(TableColumn::numeric("total", "Total"))
        .column(TableColumn::new("duration", "Duration"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("actions", "Actions"))
        .filter(TableFilter::select(
            "status",
            "Status",
            facet_options!(CartStatus),
        ))
        .search_placeholder("Search by customer name or cart ID...")
        .empty_state("ph-shopping-cart", "No active carts", None)
}

/// Build the support ticket table configuration.
#[must_use]
pub fn tickets_table_config() -> DataTableConfig {
    DataTableConfig::new("tickets", "/support")
        .column(TableColumn::new("ticket", "Ticket"))
        .column(TableColumn::new("customer", "Customer"))
        .column(TableColumn::new("subject", "Subject"))
        .column(TableColumn::new("priority", "Priority"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("channel", "Channel"))
        .column(TableColumn::new("updated", "Last Response"))
        .filter(TableFilter::select(
            "status",
            "Status",
            facet_options!(TicketStatus),
        ))
        .search_placeholder("Search tickets by ID, customer, or subject...")
        .empty_state("ph-headphones", "No tickets found", None)
}

/// Build the transactions table configuration.
#[must_use]
pub fn transactions_table_config() -> DataTableConfig {
    DataTableConfig::new("transactions", "/transactions")
        .column(TableColumn::new("transaction", "Transaction ID"))
        .column(TableColumn::new("customer", "Customer"))
        .column(TableColumn::numeric("amount", "Amount"))
        .column(TableColumn::new("type", "Type"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("timestamp", "Timestamp"))
        .column(TableColumn::numeric("items", "Items"))
        .column(TableColumn::new("actions", "Actions"))
        .filter(TableFilter::select(
            "status",
            "Status",
            facet_options!(TransactionStatus),
        ))
        .search_placeholder("Search by transaction ID or customer...")
        .empty_state("ph-wallet", "No transactions found", None)
}

/// Build the staff accounts table configuration.
#[must_use]
pub fn users_table_config() -> DataTableConfig {
    DataTableConfig::new("users", "/users")
        .column(TableColumn::new("user", "User"))
        .column(TableColumn::new("role", "Role"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("last_login", "Last Login"))
        .column(TableColumn::new("actions", "Actions"))
        .filter(TableFilter::select("role", "Role", facet_options!(StaffRole)))
        .search_placeholder("Search users by name, email, or role...")
        .empty_state("ph-users", "No users found", None)
}

/// Build the low-stock alert list configuration.
#[must_use]
pub fn alerts_table_config() -> DataTableConfig {
    DataTableConfig::new("alerts", "/alerts")
        .filter(TableFilter::select(
            "urgency",
            "Urgency",
            facet_options!(AlertUrgency),
        ))
        .search_placeholder("Search by product name, category, or supplier...")
        .empty_state("ph-check-circle", "No low stock alerts", None)
}
