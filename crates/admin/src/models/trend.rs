//! Signed change labels such as `+12%` or `-3%`.

use std::fmt;

use serde::Serialize;

use crate::components::Tone;

/// Direction a change label points in, taken from its leading sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// A change label exactly as shown on a card (`+23`, `-4%`, `+0.3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trend(String);

impl Trend {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `+` is up, `-` is down, anything else is flat.
    #[must_use]
    pub fn direction(&self) -> TrendDirection {
        match self.0.trim_start().chars().next() {
            Some('+') => TrendDirection::Up,
            Some('-') => TrendDirection::Down,
            _ => TrendDirection::Flat,
        }
    }

    /// Text colour for the label.
    #[must_use]
    pub fn tone(&self) -> Tone {
        self.direction().into()
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Trend {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_follows_leading_sign() {
        assert_eq!(Trend::from("+12%").direction(), TrendDirection::Up);
        assert_eq!(Trend::from("-3%").direction(), TrendDirection::Down);
        assert_eq!(Trend::from("0%").direction(), TrendDirection::Flat);
        assert_eq!(Trend::from("").direction(), TrendDirection::Flat);
    }

    #[test]
    fn test_tone_follows_direction() {
        assert_eq!(Trend::from("+22%").tone(), Tone::Success);
        assert_eq!(Trend::from("-4%").tone(), Tone::Destructive);
        assert_eq!(Trend::from("12").tone(), Tone::Muted);
    }
}
