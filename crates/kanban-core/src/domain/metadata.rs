//! Card Metadata
//!
//! Comments, attachments and stage kept for each card id.

use serde::{Deserialize, Serialize};

use super::Stage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    /// Display-formatted creation time
    #[serde(alias = "date")]
    pub timestamp: String,
}

impl Comment {
    pub fn new(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Auxiliary data of one card. Both sequences are append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMetadata {
    pub comments: Vec<Comment>,
    pub attachments: Vec<String>,
    /// Column holding the card; `None` for a record materialized by lookup alone
    #[serde(default)]
    pub stage: Option<Stage>,
}

impl CardMetadata {
    pub fn in_stage(stage: Stage) -> Self {
        Self {
            stage: Some(stage),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.attachments.is_empty()
    }
}
