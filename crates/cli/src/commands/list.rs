//! Print matching store records as JSON.
//!
//! # Usage
//!
//! ```bash
//! retail-ops-cli list inventory --query milk
//! retail-ops-cli list carts --filter checking-out
//! retail-ops-cli list users --filter manager
//! ```
//!
//! Matching uses the same search and filter predicate as the web console.

use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use retail_ops_admin::catalog::Catalog;
use retail_ops_admin::models::InventoryItemRecord;
use retail_ops_core::{
    FacetFilter, Faceted, ParseStatusError, SearchQuery, Searchable, filter_records,
};

use super::{CommandError, emit};

/// Record collections that can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Inventory,
    Carts,
    Tickets,
    Transactions,
    Users,
    Alerts,
}

/// Filter one collection and encode the matches as pretty JSON.
fn render<'a, T, R>(
    records: &'a [T],
    query: Option<&str>,
    filter: Option<&str>,
    view: impl Fn(&'a T) -> R,
) -> Result<String, CommandError>
where
    T: Searchable + Faceted,
    T::Facet: FromStr<Err = ParseStatusError>,
    R: Serialize,
{
    let query = SearchQuery::from_param(query);
    let filter = FacetFilter::<T::Facet>::from_param(filter)?;
    let matches: Vec<R> = filter_records(records, &query, &filter)
        .into_iter()
        .map(view)
        .collect();

    tracing::debug!(total = records.len(), matched = matches.len(), "Records filtered");
    Ok(serde_json::to_string_pretty(&matches)?)
}

/// Select the records of `kind` as JSON text.
///
/// # Errors
///
/// Returns an error if `filter` names no status of that collection.
pub fn records_json(
    catalog: &Catalog,
    kind: RecordKind,
    query: Option<&str>,
    filter: Option<&str>,
) -> Result<String, CommandError> {
    match kind {
        RecordKind::Inventory => {
            render(catalog.inventory(), query, filter, InventoryItemRecord::from)
        }
        RecordKind::Carts => render(catalog.carts(), query, filter, |cart| cart),
        RecordKind::Tickets => render(catalog.tickets(), query, filter, |ticket| ticket),
        RecordKind::Transactions => render(catalog.transactions(), query, filter, |txn| txn),
        RecordKind::Users => render(catalog.staff(), query, filter, |user| user),
        RecordKind::Alerts => render(catalog.alerts(), query, filter, |alert| alert),
    }
}

/// Run the `list` command.
///
/// # Errors
///
/// Returns an error if the catalog fails to load, the filter is invalid, or
/// stdout cannot be written.
pub fn run(kind: RecordKind, query: Option<&str>, filter: Option<&str>) -> Result<(), CommandError> {
    let catalog = Catalog::seeded()?;
    let json = records_json(&catalog, kind, query, filter)?;
    emit(&json)
}
