//! In-Memory Card Store
//!
//! Maps card ids to their metadata. Lookups never fail: a missing id is
//! "no data yet" and materializes an empty record.

use std::collections::HashMap;

use crate::domain::{CardId, CardMetadata, Comment, Stage};
use crate::error::Rejected;

#[derive(Debug, Clone, Default)]
pub struct CardStore {
    records: HashMap<CardId, CardMetadata>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the record for `id`, creating an empty one on a miss
    pub fn get(&mut self, id: CardId) -> &CardMetadata {
        self.records.entry(id).or_default()
    }

    /// Read without materializing
    pub fn peek(&self, id: CardId) -> Option<&CardMetadata> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the record for `id` (seeding and card creation)
    pub fn insert(&mut self, id: CardId, metadata: CardMetadata) {
        self.records.insert(id, metadata);
    }

    /// Remove the record. Deleting an unknown id is a no-op.
    pub fn delete(&mut self, id: CardId) -> bool {
        self.records.remove(&id).is_some()
    }

    /// Append a comment; whitespace-only text is rejected and the text is
    /// stored trimmed. Returns the new comment count.
    pub fn append_comment(&mut self, id: CardId, text: &str, timestamp: impl Into<String>) -> Result<usize, Rejected> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Rejected::EmptyComment);
        }
        let record = self.records.entry(id).or_default();
        record.comments.push(Comment::new(text, timestamp));
        Ok(record.comments.len())
    }

    /// Append a filename as-is. Returns the new attachment count.
    pub fn append_attachment(&mut self, id: CardId, filename: impl Into<String>) -> usize {
        let record = self.records.entry(id).or_default();
        record.attachments.push(filename.into());
        record.attachments.len()
    }

    pub fn set_stage(&mut self, id: CardId, stage: Stage) {
        self.records.entry(id).or_default().stage = Some(stage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: CardId = CardId::new(9);

    #[test]
    fn test_get_materializes_empty_record() {
        let mut store = CardStore::new();
        assert!(store.peek(X).is_none());

        let record = store.get(X);
        assert!(record.comments.is_empty());
        assert!(record.attachments.is_empty());
        assert!(store.contains(X));
    }

    #[test]
    fn test_get_after_delete_is_fresh() {
        let mut store = CardStore::new();
        store.append_comment(X, "hello", "now").unwrap();
        store.append_attachment(X, "a.txt");
        store.set_stage(X, Stage::Doing);

        assert!(store.delete(X));
        assert_eq!(store.get(X), &CardMetadata::default());
        assert_eq!(store.get(CardId::new(1000)), &CardMetadata::default());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = CardStore::new();
        assert!(!store.delete(X));
        store.get(X);
        assert!(store.delete(X));
        assert!(!store.delete(X));
        assert!(store.is_empty());
    }

    #[test]
    fn test_blank_comment_is_rejected() {
        let mut store = CardStore::new();
        for text in ["", " ", "\n\t  "] {
            assert_eq!(store.append_comment(X, text, "t"), Err(Rejected::EmptyComment));
        }
        assert_eq!(store.get(X).comments.len(), 0);
    }

    #[test]
    fn test_comment_is_trimmed() {
        let mut store = CardStore::new();
        assert_eq!(store.append_comment(X, "  Looks good \n", "t"), Ok(1));
        assert_eq!(store.get(X).comments[0].text, "Looks good");
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut store = CardStore::new();
        store.append_comment(X, "A", "t1").unwrap();
        store.append_comment(X, "B", "t2").unwrap();
        store.append_attachment(X, "a.pdf");
        store.append_attachment(X, "b.pdf");
        store.append_attachment(X, "a.pdf");

        let record = store.get(X);
        let texts: Vec<&str> = record.comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["A", "B"]);
        assert_eq!(record.attachments, ["a.pdf", "b.pdf", "a.pdf"]);
    }
}
