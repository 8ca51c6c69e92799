//! Slicing patterns and the INVEST checklist shown alongside them.

use serde::{Deserialize, Serialize};

/// Color tag the presentation layer uses for a pattern badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternColor {
    Yellow,
    Blue,
    Green,
    Pink,
    Purple,
    Orange,
}

/// A named strategy for splitting an epic into stories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlicingPattern {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Icon reference resolved by the presentation layer.
    pub icon: String,
    pub color: PatternColor,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl SlicingPattern {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        color: PatternColor,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            color,
            tips: Vec::new(),
        }
    }

    /// Append a tip, keeping insertion order.
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }
}

/// One letter of the INVEST acronym.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestCriterion {
    pub letter: char,
    pub name: String,
    pub description: String,
}

impl InvestCriterion {
    pub fn new(letter: char, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            letter,
            name: name.into(),
            description: description.into(),
        }
    }
}
