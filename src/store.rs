//! Comment store - owns the comment list and applies every mutation
//! as a whole-list snapshot replacement.
//!
//! Readers hold `Arc` snapshots; a mutation never touches a snapshot
//! that has already been handed out.

use std::sync::Arc;

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::models::{Comment, Reply, SortType};

/// Immutable view of the comment list at one instant
pub type Snapshot = Arc<Vec<Comment>>;

/// Reasons a store operation left the list unchanged
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("comment text is empty")]
    EmptyInput,
    #[error("no comment with id {0}")]
    NotFound(u64),
    #[error("Cannot add reply. Maximum depth reached.")]
    MaxDepthReached { id: u64 },
}

impl StoreError {
    /// Only a full reply list is reported to the user; the rest are no-ops
    pub fn is_user_visible(&self) -> bool {
        matches!(self, StoreError::MaxDepthReached { .. })
    }
}

/// In-memory comment store
#[derive(Debug, Clone)]
pub struct CommentStore {
    comments: Snapshot,
    next_id: u64,
}

impl Default for CommentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentStore {
    pub fn new() -> Self {
        CommentStore {
            comments: Arc::new(Vec::new()),
            next_id: 1,
        }
    }

    /// Current snapshot, cheap to clone and safe to keep
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.comments)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn get(&self, id: u64) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Post a new top-level comment stamped with the current time
    pub fn post_comment(&mut self, text: &str) -> Result<u64, StoreError> {
        self.post_comment_at(text, Local::now())
    }

    /// Post a new top-level comment with an explicit timestamp
    pub fn post_comment_at(
        &mut self,
        text: &str,
        timestamp: DateTime<Local>,
    ) -> Result<u64, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyInput);
        }

        let id = self.next_id;
        let mut next = self.comments.to_vec();
        next.push(Comment::new(id, text, timestamp));
        self.replace(next);
        self.next_id += 1;
        Ok(id)
    }

    /// Remove a comment along with its replies.
    /// `NotFound` is informational; callers treat it as a no-op.
    pub fn delete_comment(&mut self, id: u64) -> Result<Comment, StoreError> {
        let index = self.position(id)?;
        let mut next = self.comments.to_vec();
        let removed = next.remove(index);
        self.replace(next);
        Ok(removed)
    }

    /// Append a reply, returning its id within the parent comment.
    /// Reply text is taken as-is, empty included.
    pub fn add_reply(&mut self, id: u64, text: &str) -> Result<u64, StoreError> {
        let index = self.position(id)?;
        if !self.comments[index].accepts_replies() {
            return Err(StoreError::MaxDepthReached { id });
        }

        let mut next = self.comments.to_vec();
        let comment = &mut next[index];
        let reply_id = comment.replies.len() as u64 + 1;
        comment.replies.push(Reply {
            id: reply_id,
            text: text.to_string(),
        });
        self.replace(next);
        Ok(reply_id)
    }

    /// Flip the starred flag, returning the new value
    pub fn toggle_star(&mut self, id: u64) -> Result<bool, StoreError> {
        let index = self.position(id)?;
        let mut next = self.comments.to_vec();
        let comment = &mut next[index];
        comment.starred = !comment.starred;
        let starred = comment.starred;
        self.replace(next);
        Ok(starred)
    }

    /// Derived ordering of the current list. Sorts are stable, so
    /// comments with equal keys keep their insertion order.
    pub fn sorted_view(&self, sort: SortType) -> Vec<Comment> {
        let mut view = self.comments.to_vec();
        match sort {
            SortType::Latest => view.sort_by(|a, b| b.id.cmp(&a.id)),
            SortType::Oldest => view.sort_by(|a, b| a.id.cmp(&b.id)),
            SortType::MostReplies => view.sort_by(|a, b| b.reply_count().cmp(&a.reply_count())),
            SortType::LeastReplies => view.sort_by(|a, b| a.reply_count().cmp(&b.reply_count())),
            SortType::None => {}
        }
        view
    }

    fn position(&self, id: u64) -> Result<usize, StoreError> {
        self.comments
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn replace(&mut self, next: Vec<Comment>) {
        self.comments = Arc::new(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_DEPTH_MESSAGE, MAX_REPLIES};
    use chrono::TimeZone;

    fn store_with(texts: &[&str]) -> CommentStore {
        let mut store = CommentStore::new();
        for text in texts {
            store.post_comment(text).unwrap();
        }
        store
    }

    fn ids(view: &[Comment]) -> Vec<u64> {
        view.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_post_appends_unstarred_comment() {
        let mut store = CommentStore::new();
        let id = store.post_comment("Hello").unwrap();
        assert_eq!(id, 1);
        assert_eq!(store.len(), 1);

        let comment = store.get(1).unwrap();
        assert_eq!(comment.text, "Hello");
        assert!(!comment.starred);
        assert!(comment.replies.is_empty());
    }

    #[test]
    fn test_post_keeps_text_as_supplied() {
        let mut store = CommentStore::new();
        store.post_comment("  padded ").unwrap();
        assert_eq!(store.get(1).unwrap().text, "  padded ");
    }

    #[test]
    fn test_post_blank_is_rejected() {
        let mut store = store_with(&["first"]);
        let before = store.snapshot();

        assert_eq!(store.post_comment(""), Err(StoreError::EmptyInput));
        assert_eq!(store.post_comment("   "), Err(StoreError::EmptyInput));
        assert_eq!(store.post_comment("\t\n"), Err(StoreError::EmptyInput));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_post_uses_given_timestamp() {
        let mut store = CommentStore::new();
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        store.post_comment_at("Hello", at).unwrap();
        assert_eq!(store.get(1).unwrap().timestamp, at);
    }

    #[test]
    fn test_delete_removes_single_comment() {
        let mut store = store_with(&["a", "b", "c"]);
        let removed = store.delete_comment(2).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(ids(store.comments()), vec![1, 3]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.delete_comment(42), Err(StoreError::NotFound(42)));
        assert_eq!(store.len(), 1);

        let mut empty = CommentStore::new();
        assert!(empty.delete_comment(1).is_err());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = store_with(&["a", "b"]);
        store.delete_comment(1).unwrap();
        let id = store.post_comment("c").unwrap();
        assert_eq!(id, 3);
        assert_eq!(ids(store.comments()), vec![2, 3]);
    }

    #[test]
    fn test_reply_ids_follow_reply_count() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.add_reply(1, "x"), Ok(1));
        assert_eq!(store.add_reply(1, "y"), Ok(2));
        let replies = &store.get(1).unwrap().replies;
        assert_eq!(replies[1], Reply { id: 2, text: "y".into() });
    }

    #[test]
    fn test_fourth_reply_reaches_max_depth() {
        let mut store = store_with(&["a"]);
        for _ in 0..MAX_REPLIES {
            store.add_reply(1, "Hi").unwrap();
        }
        let before = store.snapshot();

        let err = store.add_reply(1, "X").unwrap_err();
        assert_eq!(err, StoreError::MaxDepthReached { id: 1 });
        assert!(err.is_user_visible());
        assert_eq!(err.to_string(), MAX_DEPTH_MESSAGE);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_reply_to_missing_comment() {
        let mut store = store_with(&["a"]);
        let err = store.add_reply(7, "Hi").unwrap_err();
        assert_eq!(err, StoreError::NotFound(7));
        assert!(!err.is_user_visible());
    }

    #[test]
    fn test_empty_reply_is_accepted() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.add_reply(1, ""), Ok(1));
        assert_eq!(store.get(1).unwrap().replies[0].text, "");
    }

    #[test]
    fn test_toggle_star_is_its_own_inverse() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(store.toggle_star(2), Ok(true));
        assert_eq!(store.toggle_star(2), Ok(false));
        assert!(!store.get(2).unwrap().starred);
        assert!(!store.get(1).unwrap().starred);
        assert_eq!(store.toggle_star(9), Err(StoreError::NotFound(9)));
    }

    #[test]
    fn test_snapshots_are_not_mutated() {
        let mut store = store_with(&["a"]);
        let before = store.snapshot();

        store.toggle_star(1).unwrap();
        store.add_reply(1, "r").unwrap();
        store.post_comment("b").unwrap();

        assert_eq!(before.len(), 1);
        assert!(!before[0].starred);
        assert!(before[0].replies.is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_sorted_view_by_id() {
        let store = store_with(&["a", "b", "c"]);
        assert_eq!(ids(&store.sorted_view(SortType::Latest)), vec![3, 2, 1]);
        assert_eq!(ids(&store.sorted_view(SortType::Oldest)), vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_view_by_replies_is_stable() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        store.add_reply(2, "r").unwrap();
        store.add_reply(2, "r").unwrap();
        store.add_reply(4, "r").unwrap();

        assert_eq!(ids(&store.sorted_view(SortType::MostReplies)), vec![2, 4, 1, 3]);
        assert_eq!(ids(&store.sorted_view(SortType::LeastReplies)), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_sorted_view_unknown_keeps_insertion_order() {
        let mut store = store_with(&["a", "b", "c"]);
        store.delete_comment(1).unwrap();
        store.post_comment("d").unwrap();

        assert_eq!(ids(&store.sorted_view(SortType::from("bogus"))), vec![2, 3, 4]);
        assert_eq!(ids(&store.sorted_view(SortType::None)), vec![2, 3, 4]);
    }

    #[test]
    fn test_sorted_view_leaves_store_order() {
        let store = store_with(&["a", "b"]);
        let _ = store.sorted_view(SortType::Latest);
        assert_eq!(ids(store.comments()), vec![1, 2]);
    }

    #[test]
    fn test_comment_lifecycle() {
        let mut store = CommentStore::new();
        store.post_comment("Hello").unwrap();
        assert_eq!(store.comments().len(), 1);

        for _ in 0..3 {
            store.add_reply(1, "Hi").unwrap();
        }
        let reply_ids: Vec<u64> = store.get(1).unwrap().replies.iter().map(|r| r.id).collect();
        assert_eq!(reply_ids, vec![1, 2, 3]);

        assert!(matches!(
            store.add_reply(1, "X"),
            Err(StoreError::MaxDepthReached { id: 1 })
        ));
        assert_eq!(store.get(1).unwrap().replies.len(), 3);

        store.toggle_star(1).unwrap();
        assert!(store.get(1).unwrap().starred);

        store.delete_comment(1).unwrap();
        assert!(store.is_empty());
    }
}
