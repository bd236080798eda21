//! Workflow Stages
//!
//! The fixed, ordered set of board columns.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Backlog,
    Todo,
    Doing,
    Done,
}

impl Stage {
    /// Columns in board order, left to right
    pub const ALL: [Stage; 4] = [Stage::Backlog, Stage::Todo, Stage::Doing, Stage::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Backlog => "backlog",
            Stage::Todo => "todo",
            Stage::Doing => "doing",
            Stage::Done => "done",
        }
    }

    /// Column heading
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Backlog => "Backlog",
            Stage::Todo => "A Fazer",
            Stage::Doing => "Fazendo",
            Stage::Done => "Concluído",
        }
    }

    /// Position of the column on the board
    pub fn index(&self) -> usize {
        match self {
            Stage::Backlog => 0,
            Stage::Todo => 1,
            Stage::Doing => 2,
            Stage::Done => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
