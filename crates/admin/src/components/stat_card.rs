//! Summary cards shown above each page's main content.

use serde::Serialize;

use super::badge::Tone;

/// One headline figure with a caption underneath.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub caption: String,
    /// Phosphor icon class.
    pub icon: String,
    pub tone: Tone,
}

impl StatCard {
    #[must_use]
    pub fn new(title: &str, value: &str, caption: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            caption: caption.to_string(),
            icon: "ph-chart-line".to_string(),
            tone: Tone::Primary,
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = icon.to_string();
        self
    }

    #[must_use]
    pub const fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}
