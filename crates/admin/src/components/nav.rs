//! Sidebar navigation.

use serde::Serialize;

/// Count or status pill shown next to a sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavBadge {
    Count(u32),
    Live,
}

impl NavBadge {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Count(n) => n.to_string(),
            Self::Live => "live".to_string(),
        }
    }

    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }
}

/// A sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    /// Phosphor icon class.
    pub icon: &'static str,
    pub badge: Option<NavBadge>,
}

impl NavItem {
    const fn new(label: &'static str, href: &'static str, icon: &'static str) -> Self {
        Self {
            label,
            href,
            icon,
            badge: None,
        }
    }

    const fn badge(mut self, badge: NavBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Whether this link is highlighted for `current_path`.
    ///
    /// The dashboard is active only on `/`; other links are active on their
    /// own path and anything beneath it.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.href == "/" {
            current_path == "/"
        } else {
            current_path.starts_with(self.href)
        }
    }
}

/// A labelled group of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

/// Unread notifications shown on the header bell.
pub const NOTIFICATION_COUNT: u32 = 3;

/// The console sidebar, top to bottom.
#[must_use]
pub fn sidebar() -> Vec<NavGroup> {
    vec![
        NavGroup {
            title: "Main",
            items: vec![
                NavItem::new("Dashboard", "/", "ph-house"),
                NavItem::new("Inventory", "/inventory", "ph-package").badge(NavBadge::Count(12)),
                NavItem::new("Digital Carts", "/carts", "ph-shopping-cart").badge(NavBadge::Live),
                NavItem::new("Nutritional Insights", "/insights", "ph-chart-bar"),
                NavItem::new("Recommendations", "/recommendations", "ph-trend-up"),
                NavItem::new("Transactions", "/transactions", "ph-wallet"),
            ],
        },
        NavGroup {
            title: "Support",
            items: vec![
                NavItem::new("Customer Support", "/support", "ph-headphones")
                    .badge(NavBadge::Count(5)),
                NavItem::new("User Management", "/users", "ph-users"),
                NavItem::new("System Settings", "/settings", "ph-gear"),
            ],
        },
        NavGroup {
            title: "Alerts",
            items: vec![
                NavItem::new("Low Stock Alerts", "/alerts", "ph-warning").badge(NavBadge::Count(3)),
                NavItem::new("Security", "/security", "ph-shield"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(href: &str) -> NavItem {
        sidebar()
            .into_iter()
            .flat_map(|group| group.items)
            .find(|item| item.href == href)
            .unwrap_or_else(|| panic!("no sidebar item for {href}"))
    }

    #[test]
    fn test_dashboard_active_only_on_root() {
        let dashboard = item("/");
        assert!(dashboard.is_active("/"));
        assert!(!dashboard.is_active("/inventory"));
        assert!(!dashboard.is_active("/nope"));
    }

    #[test]
    fn test_prefix_match_for_other_items() {
        let support = item("/support");
        assert!(support.is_active("/support"));
        assert!(support.is_active("/support/SUP-001"));
        assert!(!support.is_active("/"));
        assert!(!support.is_active("/users"));
    }

    #[test]
    fn test_sidebar_layout() {
        let groups = sidebar();
        let titles: Vec<_> = groups.iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Main", "Support", "Alerts"]);
        assert_eq!(groups[0].items.len(), 6);
        assert_eq!(groups[1].items.len(), 3);
        assert_eq!(groups[2].items.len(), 2);
        assert_eq!(item("/carts").badge, Some(NavBadge::Live));
        assert_eq!(item("/inventory").badge.map(NavBadge::label).as_deref(), Some("12"));
    }
}
