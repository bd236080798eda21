//! Card Entity
//!
//! A single task tile on the board.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Session-unique card identifier, displayed as `card-N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u32);

impl CardId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw counter value, used as the drag payload
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// Card priority, shown as a colored badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Form value and badge CSS class
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Unknown values fall back to `Low`, the first option of the form
    pub fn from_str(s: &str) -> Self {
        match s {
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Low,
        }
    }

    /// Text inside the card badge
    pub fn badge_text(&self) -> &'static str {
        match self {
            Priority::Low => "Baixa prioridade",
            Priority::Medium => "Média prioridade",
            Priority::High => "Alta prioridade",
        }
    }

    /// Text of the option in the creation form selector
    pub fn option_label(&self) -> &'static str {
        match self {
            Priority::Low => "Baixa Prioridade",
            Priority::Medium => "Média Prioridade",
            Priority::High => "Alta Prioridade",
        }
    }
}

/// A task card as displayed on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub priority: Priority,
}

impl Card {
    pub fn new(id: CardId, title: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            title: title.into(),
            priority,
        }
    }
}
