//! Board View-Model
//!
//! The columns and card tiles the display layer renders. Tiles are created,
//! removed and reparented only through the controller.

use crate::domain::{Card, CardId, Stage};

/// A card tile with its two visible counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub card: Card,
    pub comment_count: usize,
    pub attachment_count: usize,
}

impl CardView {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            comment_count: 0,
            attachment_count: 0,
        }
    }

    pub fn id(&self) -> CardId {
        self.card.id
    }
}

/// One workflow stage container, tiles in display order (top first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub stage: Stage,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Column>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board with one column per stage
    pub fn new() -> Self {
        Self {
            columns: Stage::ALL
                .iter()
                .map(|&stage| Column { stage, cards: Vec::new() })
                .collect(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, stage: Stage) -> &Column {
        &self.columns[stage.index()]
    }

    fn column_mut(&mut self, stage: Stage) -> &mut Column {
        &mut self.columns[stage.index()]
    }

    /// Locate a tile: its column and index within the column
    fn position(&self, id: CardId) -> Option<(Stage, usize)> {
        self.columns.iter().find_map(|column| {
            column
                .cards
                .iter()
                .position(|view| view.id() == id)
                .map(|index| (column.stage, index))
        })
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    pub fn stage_of(&self, id: CardId) -> Option<Stage> {
        self.position(id).map(|(stage, _)| stage)
    }

    pub fn find(&self, id: CardId) -> Option<&CardView> {
        self.position(id)
            .map(|(stage, index)| &self.column(stage).cards[index])
    }

    fn find_mut(&mut self, id: CardId) -> Option<&mut CardView> {
        let (stage, index) = self.position(id)?;
        Some(&mut self.column_mut(stage).cards[index])
    }

    pub fn title_of(&self, id: CardId) -> Option<&str> {
        self.find(id).map(|view| view.card.title.as_str())
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|column| column.cards.len()).sum()
    }

    /// Put a tile at the top of a column
    pub fn prepend(&mut self, stage: Stage, view: CardView) {
        self.column_mut(stage).cards.insert(0, view);
    }

    /// Put a tile at the bottom of a column
    pub fn append(&mut self, stage: Stage, view: CardView) {
        self.column_mut(stage).cards.push(view);
    }

    pub fn remove(&mut self, id: CardId) -> Option<CardView> {
        let (stage, index) = self.position(id)?;
        Some(self.column_mut(stage).cards.remove(index))
    }

    /// Move a tile to the bottom of `to`. Returns the column it left.
    pub fn reparent(&mut self, id: CardId, to: Stage) -> Option<Stage> {
        let (from, index) = self.position(id)?;
        let view = self.column_mut(from).cards.remove(index);
        self.append(to, view);
        Some(from)
    }

    /// Update a tile's visible counters. Returns false if the tile is gone.
    pub fn set_counters(&mut self, id: CardId, comments: usize, attachments: usize) -> bool {
        match self.find_mut(id) {
            Some(view) => {
                view.comment_count = comments;
                view.attachment_count = attachments;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;

    fn tile(id: u32) -> CardView {
        CardView::new(Card::new(CardId::new(id), format!("Card {}", id), Priority::Low))
    }

    fn ids(board: &Board, stage: Stage) -> Vec<u32> {
        board.column(stage).cards.iter().map(|v| v.id().get()).collect()
    }

    #[test]
    fn test_prepend_puts_tile_on_top() {
        let mut board = Board::new();
        board.append(Stage::Todo, tile(1));
        board.prepend(Stage::Todo, tile(2));
        assert_eq!(ids(&board, Stage::Todo), [2, 1]);
    }

    #[test]
    fn test_reparent_moves_to_bottom_of_target() {
        let mut board = Board::new();
        board.append(Stage::Doing, tile(1));
        board.append(Stage::Done, tile(2));

        assert_eq!(board.reparent(CardId::new(1), Stage::Done), Some(Stage::Doing));
        assert!(board.column(Stage::Doing).cards.is_empty());
        assert_eq!(ids(&board, Stage::Done), [2, 1]);
        assert_eq!(board.reparent(CardId::new(42), Stage::Done), None);
    }

    #[test]
    fn test_reparent_within_same_column() {
        let mut board = Board::new();
        board.append(Stage::Todo, tile(1));
        board.append(Stage::Todo, tile(2));

        assert_eq!(board.reparent(CardId::new(1), Stage::Todo), Some(Stage::Todo));
        assert_eq!(ids(&board, Stage::Todo), [2, 1]);
    }

    #[test]
    fn test_remove_and_counters() {
        let mut board = Board::new();
        board.append(Stage::Backlog, tile(1));

        assert!(board.set_counters(CardId::new(1), 3, 1));
        assert_eq!(board.find(CardId::new(1)).map(|v| v.comment_count), Some(3));

        assert!(board.remove(CardId::new(1)).is_some());
        assert!(!board.contains(CardId::new(1)));
        assert!(!board.set_counters(CardId::new(1), 0, 0));
        assert_eq!(board.card_count(), 0);
    }
}
