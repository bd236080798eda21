//! Detail and Counter Rendering
//!
//! Projects a metadata record into display fragments. Reads the store only.

use crate::board::Board;
use crate::config::Labels;
use crate::domain::{CardId, CardMetadata};

/// One comment line in the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    pub author: String,
    pub timestamp: String,
    pub text: String,
}

/// A list that shows a placeholder when it has no entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<T> {
    Placeholder(String),
    Entries(Vec<T>),
}

impl<T> Section<T> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Section::Placeholder(_))
    }

    pub fn entries(&self) -> &[T] {
        match self {
            Section::Placeholder(_) => &[],
            Section::Entries(entries) => entries,
        }
    }
}

/// Content of the card detail modal: comments first, then attachments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFragment {
    pub comments: Section<CommentEntry>,
    pub attachments: Section<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    labels: Labels,
}

impl Renderer {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn render_detail(&self, metadata: &CardMetadata) -> DetailFragment {
        let comments = if metadata.comments.is_empty() {
            Section::Placeholder(self.labels.no_comments.clone())
        } else {
            Section::Entries(
                metadata
                    .comments
                    .iter()
                    .map(|comment| CommentEntry {
                        author: self.labels.author.clone(),
                        timestamp: comment.timestamp.clone(),
                        text: comment.text.clone(),
                    })
                    .collect(),
            )
        };

        let attachments = if metadata.attachments.is_empty() {
            Section::Placeholder(self.labels.no_attachments.clone())
        } else {
            Section::Entries(metadata.attachments.clone())
        };

        DetailFragment { comments, attachments }
    }

    /// Sync the tile's counters with the record. False if the tile is gone.
    pub fn render_counters(&self, board: &mut Board, id: CardId, metadata: &CardMetadata) -> bool {
        board.set_counters(id, metadata.comments.len(), metadata.attachments.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CardView;
    use crate::domain::{Card, Comment, Priority, Stage};

    #[test]
    fn test_empty_record_renders_placeholders() {
        let fragment = Renderer::default().render_detail(&CardMetadata::default());

        assert_eq!(fragment.comments, Section::Placeholder("Nenhum comentário ainda.".to_string()));
        assert_eq!(fragment.attachments, Section::Placeholder("Nenhum anexo.".to_string()));
    }

    #[test]
    fn test_entries_follow_record_order() {
        let metadata = CardMetadata {
            comments: vec![Comment::new("first", "t1"), Comment::new("second", "t2")],
            attachments: vec!["Briefing.pdf".to_string()],
            stage: None,
        };
        let fragment = Renderer::default().render_detail(&metadata);

        let comments = fragment.comments.entries();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].author, "Usuário");
        assert_eq!(comments[0].timestamp, "t1");
        assert_eq!(comments[1].text, "second");
        assert_eq!(fragment.attachments.entries(), ["Briefing.pdf".to_string()]);
    }

    #[test]
    fn test_render_counters_updates_tile() {
        let id = CardId::new(1);
        let mut board = Board::new();
        board.append(Stage::Todo, CardView::new(Card::new(id, "T", Priority::Low)));

        let metadata = CardMetadata {
            comments: vec![Comment::new("c", "t")],
            attachments: vec!["a".to_string(), "b".to_string()],
            stage: Some(Stage::Todo),
        };
        assert!(Renderer::default().render_counters(&mut board, id, &metadata));

        let view = board.find(id).unwrap();
        assert_eq!((view.comment_count, view.attachment_count), (1, 2));
    }
}
