//! Print the console's page routes.

use retail_ops_admin::routes::PAGES;

use super::{CommandError, emit};

/// Format the page table, one `path  title` line per page.
#[must_use]
pub fn route_table() -> String {
    let width = PAGES.iter().map(|(path, _)| path.len()).max().unwrap_or(0);
    PAGES
        .iter()
        .map(|(path, title)| format!("{path:<width$}  {title}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the `routes` command.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run() -> Result<(), CommandError> {
    emit(&route_table())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_lists_every_page() {
        let table = route_table();
        assert_eq!(table.lines().count(), PAGES.len());
        assert!(table.starts_with("/              Dashboard"));
        assert!(table.contains("/alerts        Low Stock Alerts"));
    }
}
