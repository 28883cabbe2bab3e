//! Dashboard overview models.

use serde::Serialize;

use crate::components::badge::Tone;

use super::trend::Trend;

/// Headline figure on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewStat {
    pub title: String,
    pub value: String,
    pub change: Trend,
    pub tone: Tone,
    /// Phosphor icon class.
    pub icon: &'static str,
}

impl OverviewStat {
    /// Live stats get a pulsing indicator next to the change badge.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.tone == Tone::Live
    }

    /// Badge tone for the change label.
    #[must_use]
    pub const fn badge_tone(&self) -> Tone {
        match self.tone {
            Tone::Success => Tone::Success,
            Tone::Warning => Tone::Warning,
            _ => Tone::Secondary,
        }
    }
}

/// Which subsystem produced an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Inventory,
    Cart,
    Transaction,
    Recommendation,
}

/// An entry in the recent activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub message: String,
    /// Relative time, as displayed.
    pub time: String,
    pub tone: Tone,
}

impl Activity {
    /// Colour of the dot beside the entry; anything neutral is primary.
    #[must_use]
    pub const fn dot_tone(&self) -> Tone {
        match self.tone {
            Tone::Success => Tone::Success,
            Tone::Warning => Tone::Warning,
            _ => Tone::Primary,
        }
    }
}

/// Shortcut tile linking to another page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    pub href: String,
    pub label: String,
    /// Phosphor icon class.
    pub icon: &'static str,
}
