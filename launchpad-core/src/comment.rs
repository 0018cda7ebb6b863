//! Chat thread for the token currently on screen.
//!
//! Comments are append-only and live only as long as the thread; a new
//! thread is opened whenever the detail view moves to another token.

use chrono::Utc;
use tracing::debug;

use crate::types::Comment;

/// Error types for comment submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentError {
    /// Comment text was empty or whitespace
    #[error("Comment text is empty")]
    EmptyText,
}

/// Append-only comment list scoped to one token.
#[derive(Debug, Clone)]
pub struct CommentThread {
    token_id: String,
    comments: Vec<Comment>,
}

impl CommentThread {
    /// Open an empty thread for `token_id`.
    pub fn new(token_id: impl Into<String>) -> Self {
        Self {
            token_id: token_id.into(),
            comments: Vec::new(),
        }
    }

    /// Token this thread belongs to.
    pub fn token_id(&self) -> &str {
        &self.token_id
    }

    /// Post a comment written by `user`.
    pub fn post(&mut self, user: impl Into<String>, text: impl Into<String>) -> Result<&Comment, CommentError> {
        self.push(user.into(), text.into(), false)
    }

    /// Post a comment produced by the text generator.
    pub fn post_ai(&mut self, user: impl Into<String>, text: impl Into<String>) -> Result<&Comment, CommentError> {
        self.push(user.into(), text.into(), true)
    }

    fn push(&mut self, user: String, text: String, is_ai: bool) -> Result<&Comment, CommentError> {
        if text.trim().is_empty() {
            return Err(CommentError::EmptyText);
        }

        let comment = Comment {
            id: uuid::Uuid::new_v4().to_string(),
            token_id: self.token_id.clone(),
            user,
            text,
            timestamp: Utc::now(),
            is_ai,
        };
        debug!(token_id = %self.token_id, comment_id = %comment.id, is_ai, "Comment posted");

        self.comments.push(comment);
        Ok(&self.comments[self.comments.len() - 1])
    }

    /// Comments in posting order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Comment bodies in posting order, as fed to sentiment analysis.
    pub fn texts(&self) -> Vec<String> {
        self.comments.iter().map(|c| c.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_and_texts() {
        let mut thread = CommentThread::new("1");
        thread.post("You", "to the moon").unwrap();
        thread.post_ai("Analyst", "cautiously bullish").unwrap();

        assert_eq!(thread.len(), 2);
        assert_eq!(thread.texts(), vec!["to the moon", "cautiously bullish"]);
        assert!(!thread.comments()[0].is_ai);
        assert!(thread.comments()[1].is_ai);
        assert!(thread.comments().iter().all(|c| c.token_id == "1"));
    }

    #[test]
    fn test_empty_comment_rejected() {
        let mut thread = CommentThread::new("1");
        assert_eq!(thread.post("You", "   ").unwrap_err(), CommentError::EmptyText);
        assert!(thread.is_empty());
    }
}
