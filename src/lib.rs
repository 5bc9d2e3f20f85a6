//! # Comment Board TUI
//!
//! A small in-memory comment board for the terminal.
//!
//! ## Features
//! - Post, delete and star comments
//! - One level of replies, at most three per comment
//! - Sort by recency or reply count
//! - Toggle timestamp visibility
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine owning the comment store)

pub mod constants;
pub mod models;
pub mod store;
pub mod config;
pub mod ui;
pub mod messages;
pub mod app;

// Re-export commonly used types
pub use models::{Comment, Reply, SortType, ViewOptions};
pub use store::{CommentStore, Snapshot, StoreError};
pub use config::Config;
pub use messages::{UiEvent, RenderState};
pub use app::{AppState, AppActor};
