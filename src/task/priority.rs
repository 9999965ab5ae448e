//! Task priority levels and their display colors.

use serde::{Deserialize, Serialize};

/// Hex color for high-priority flags.
const HIGH_COLOR: &str = "#f44336";
/// Hex color for medium-priority flags.
const MEDIUM_COLOR: &str = "#ff9800";
/// Hex color for low-priority flags.
const LOW_COLOR: &str = "#4caf50";
/// Neutral hex color for values that name no known priority.
const NEUTRAL_COLOR: &str = "#cccccc";

/// Urgency level of a task.
///
/// Serialized as lowercase English; deserialization also accepts the
/// Portuguese names carried by early seed data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Needs attention first.
    #[serde(alias = "alta")]
    High,
    /// Everyday urgency; the default for new tasks.
    #[default]
    #[serde(alias = "media", alias = "média")]
    Medium,
    /// Can wait.
    #[serde(alias = "baixa")]
    Low,
}

impl Priority {
    /// Parses a priority name, accepting English and Portuguese forms.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "high" | "alta" => Some(Self::High),
            "medium" | "media" | "média" => Some(Self::Medium),
            "low" | "baixa" => Some(Self::Low),
            _ => None,
        }
    }

    /// The lowercase English name, as shown in lists and exports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// The hex color used for this priority's flag.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::High => HIGH_COLOR,
            Self::Medium => MEDIUM_COLOR,
            Self::Low => LOW_COLOR,
        }
    }
}

/// Maps a raw priority value to its flag color.
///
/// Unrecognized values map to a neutral gray rather than an error so the
/// view can always render something.
#[must_use]
pub fn priority_color(value: &str) -> &'static str {
    Priority::parse(value).map_or(NEUTRAL_COLOR, Priority::color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_names() {
        assert_eq!(Priority::parse("high"), Some(Priority::High));
        assert_eq!(Priority::parse("medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
    }

    #[test]
    fn parses_portuguese_names() {
        assert_eq!(Priority::parse("alta"), Some(Priority::High));
        assert_eq!(Priority::parse("media"), Some(Priority::Medium));
        assert_eq!(Priority::parse("média"), Some(Priority::Medium));
        assert_eq!(Priority::parse("baixa"), Some(Priority::Low));
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(Priority::parse("  HIGH "), Some(Priority::High));
        assert_eq!(Priority::parse("Baixa"), Some(Priority::Low));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(Priority::parse(""), None);
    }

    #[test]
    fn defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn colors_match_the_palette() {
        assert_eq!(priority_color("alta"), "#f44336");
        assert_eq!(priority_color("high"), "#f44336");
        assert_eq!(priority_color("media"), "#ff9800");
        assert_eq!(priority_color("medium"), "#ff9800");
        assert_eq!(priority_color("baixa"), "#4caf50");
        assert_eq!(priority_color("low"), "#4caf50");
    }

    #[test]
    fn unknown_values_get_the_neutral_color() {
        assert_eq!(priority_color("unknown"), "#cccccc");
        assert_eq!(priority_color(""), "#cccccc");
    }

    #[test]
    fn serde_uses_lowercase_english() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");
        let back: Priority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(back, Priority::High);
    }

    #[test]
    fn serde_accepts_portuguese_aliases() {
        let high: Priority = serde_json::from_str("\"alta\"").unwrap();
        assert_eq!(high, Priority::High);
        let low: Priority = serde_json::from_str("\"baixa\"").unwrap();
        assert_eq!(low, Priority::Low);
    }
}
