use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mood::MoodType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Pattern,
    Trend,
    Concern,
    Strength,
}

impl InsightKind {
    /// Same spelling as the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            InsightKind::Pattern => "pattern",
            InsightKind::Trend => "trend",
            InsightKind::Concern => "concern",
            InsightKind::Strength => "strength",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A derived, never-persisted observation over a window of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentInsight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub confidence: f64,
    pub actionable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Frequency, direction and regularity of one mood in the recent window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalPattern {
    pub dominant_mood: MoodType,
    /// Share of recent entries carrying this mood, in `[0, 1]`.
    pub frequency: f64,
    pub trend: Trend,
    /// Regularity of the interval between occurrences, in `[0, 1]`.
    pub consistency: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<String>,
}
