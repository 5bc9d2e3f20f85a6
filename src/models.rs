use chrono::{DateTime, Local};
use serde::Deserialize;

use crate::constants::MAX_REPLIES;

/// A reply attached to a comment. Replies cannot be replied to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    /// Unique within the parent comment only
    pub id: u64,
    pub text: String,
}

/// A top-level comment
#[derive(Clone, Debug, PartialEq)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub starred: bool,
    pub timestamp: DateTime<Local>,
    pub replies: Vec<Reply>,
}

impl Comment {
    pub fn new(id: u64, text: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Comment {
            id,
            text: text.into(),
            starred: false,
            timestamp,
            replies: Vec::new(),
        }
    }

    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }

    /// Whether another reply still fits under the depth limit
    pub fn accepts_replies(&self) -> bool {
        self.replies.len() < MAX_REPLIES
    }

    pub fn formatted_timestamp(&self, format: &str) -> String {
        self.timestamp.format(format).to_string()
    }
}

/// Ordering applied to the comment list when rendering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SortType {
    #[default]
    None,
    Latest,
    Oldest,
    MostReplies,
    LeastReplies,
}

impl SortType {
    pub const ALL: [SortType; 5] = [
        SortType::None,
        SortType::Latest,
        SortType::Oldest,
        SortType::MostReplies,
        SortType::LeastReplies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortType::None => "",
            SortType::Latest => "latest",
            SortType::Oldest => "oldest",
            SortType::MostReplies => "mostReplies",
            SortType::LeastReplies => "leastReplies",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortType::None => "None",
            SortType::Latest => "Latest",
            SortType::Oldest => "Oldest",
            SortType::MostReplies => "Most Replies",
            SortType::LeastReplies => "Least Replies",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SortType::None => 0,
            SortType::Latest => 1,
            SortType::Oldest => 2,
            SortType::MostReplies => 3,
            SortType::LeastReplies => 4,
        }
    }

    pub fn next(&self) -> SortType {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> SortType {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Unknown values fall back to insertion order
impl From<&str> for SortType {
    fn from(value: &str) -> Self {
        match value {
            "latest" => SortType::Latest,
            "oldest" => SortType::Oldest,
            "mostReplies" => SortType::MostReplies,
            "leastReplies" => SortType::LeastReplies,
            _ => SortType::None,
        }
    }
}

impl From<String> for SortType {
    fn from(value: String) -> Self {
        SortType::from(value.as_str())
    }
}

/// View settings owned by the caller and passed into rendering,
/// kept out of the store itself
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewOptions {
    pub sort: SortType,
    pub show_timestamps: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            sort: SortType::None,
            show_timestamps: true,
        }
    }
}
