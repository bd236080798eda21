//! Board Configuration
//!
//! Seed cards and display labels. The default reproduces the four fixed
//! cards the board ships with.

use std::collections::HashSet;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::domain::{CardId, CardMetadata, Comment, Priority, Stage};
use crate::error::ConfigError;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Texts shown in the card detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Author shown on every comment
    pub author: String,
    pub no_comments: String,
    pub no_attachments: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            author: "Usuário".to_string(),
            no_comments: "Nenhum comentário ainda.".to_string(),
            no_attachments: "Nenhum anexo.".to_string(),
        }
    }
}

/// A card present when the board loads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCard {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub priority: Priority,
    pub stage: Stage,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl SeedCard {
    pub fn metadata(&self) -> CardMetadata {
        CardMetadata {
            comments: self.comments.clone(),
            attachments: self.attachments.clone(),
            stage: Some(self.stage),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Cards in column order; within a column, top first
    pub seed: Vec<SeedCard>,
    pub labels: Labels,
    /// chrono format string for new comment timestamps
    pub timestamp_format: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            labels: Labels::default(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl BoardConfig {
    /// Empty board with default labels
    pub fn empty() -> Self {
        Self {
            seed: Vec::new(),
            ..Default::default()
        }
    }

    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for card in &self.seed {
            if !seen.insert(card.id) {
                return Err(ConfigError::DuplicateCardId(card.id));
            }
            if card.title.trim().is_empty() {
                return Err(ConfigError::EmptySeedTitle(card.id));
            }
        }
        if !is_valid_timestamp_format(&self.timestamp_format) {
            return Err(ConfigError::InvalidTimestampFormat(self.timestamp_format.clone()));
        }
        Ok(())
    }

    /// Highest seeded id; new cards are numbered above it
    pub fn highest_seed_id(&self) -> u32 {
        self.seed.iter().map(|card| card.id.get()).max().unwrap_or(0)
    }
}

/// True when every chrono specifier in `format` is recognized
pub fn is_valid_timestamp_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

fn default_seed() -> Vec<SeedCard> {
    vec![
        SeedCard {
            id: CardId::new(1),
            title: "Reunião de kickoff com o cliente".to_string(),
            priority: Priority::High,
            stage: Stage::Backlog,
            comments: vec![
                Comment::new("Precisamos marcar reunião com o cliente.", "15/01/2026 09:30"),
                Comment::new("Já enviei o e-mail.", "15/01/2026 10:15"),
            ],
            attachments: vec!["Briefing.pdf".to_string()],
        },
        SeedCard {
            id: CardId::new(2),
            title: "Criar protótipo das telas".to_string(),
            priority: Priority::Medium,
            stage: Stage::Todo,
            comments: Vec::new(),
            attachments: Vec::new(),
        },
        SeedCard {
            id: CardId::new(3),
            title: "Implementar login com JWT".to_string(),
            priority: Priority::High,
            stage: Stage::Doing,
            comments: vec![
                Comment::new("API de autenticação está dando erro 500.", "14/01/2026 16:20"),
                Comment::new("Corrigido. Era uma variável de ambiente.", "14/01/2026 17:00"),
                Comment::new("Testando com JWT agora.", "15/01/2026 08:00"),
                Comment::new("Tudo ok no ambiente local.", "15/01/2026 11:00"),
                Comment::new("Subindo para homologação.", "15/01/2026 11:30"),
            ],
            attachments: vec!["Log_Erro.txt".to_string(), "Print_Erro.png".to_string()],
        },
        SeedCard {
            id: CardId::new(4),
            title: "Configurar ambiente de desenvolvimento".to_string(),
            priority: Priority::Low,
            stage: Stage::Done,
            comments: vec![Comment::new("Ambiente configurado com Docker.", "10/01/2026 14:00")],
            attachments: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let config = BoardConfig::default();
        assert_eq!(config.seed.len(), 4);
        assert_eq!(config.highest_seed_id(), 4);
        assert!(config.validate().is_ok());
        assert_eq!(config.seed[2].metadata().comments.len(), 5);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let json = r#"{
            "seed": [
                { "id": 10, "title": "Deploy", "stage": "doing",
                  "comments": [{ "text": "Soon", "date": "01/02/2026 10:00" }] }
            ]
        }"#;
        let config = BoardConfig::from_json(json).unwrap();

        assert_eq!(config.highest_seed_id(), 10);
        assert_eq!(config.seed[0].priority, Priority::Low);
        assert_eq!(config.seed[0].comments[0].timestamp, "01/02/2026 10:00");
        assert_eq!(config.labels, Labels::default());
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"{ "seed": [
            { "id": 1, "title": "A", "stage": "todo" },
            { "id": 1, "title": "B", "stage": "done" }
        ] }"#;
        assert!(matches!(
            BoardConfig::from_json(json),
            Err(ConfigError::DuplicateCardId(id)) if id == CardId::new(1)
        ));
    }

    #[test]
    fn test_from_json_rejects_blank_title_and_bad_json() {
        let json = r#"{ "seed": [{ "id": 1, "title": "  ", "stage": "todo" }] }"#;
        assert!(matches!(BoardConfig::from_json(json), Err(ConfigError::EmptySeedTitle(_))));
        assert!(matches!(BoardConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_json_rejects_unknown_timestamp_specifier() {
        let json = r#"{ "timestamp_format": "%Q" }"#;
        assert!(matches!(
            BoardConfig::from_json(json),
            Err(ConfigError::InvalidTimestampFormat(format)) if format == "%Q"
        ));
        assert!(BoardConfig::from_json(r#"{ "timestamp_format": "%Y-%m-%d %H:%M" }"#).is_ok());
    }

    #[test]
    fn test_round_trips_through_serde_json() {
        let config = BoardConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(BoardConfig::from_json(&json).unwrap(), config);
    }
}
