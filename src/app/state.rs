//! App state - pure data structure with no I/O logic

use std::collections::HashMap;

use crate::config::Config;
use crate::messages::ui_events::{Focus, InputMode};
use crate::messages::RenderState;
use crate::models::{Comment, ViewOptions};
use crate::store::CommentStore;

/// Main application state - the comment store plus everything the
/// UI needs that the store must not know about
pub struct AppState {
    pub store: CommentStore,

    // View settings
    pub view: ViewOptions,
    pub timestamp_format: String,

    // UI state
    pub focus: Focus,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Composer
    pub input: String,

    // Comment list
    pub selected: usize,
    /// Pending reply text keyed by comment id
    pub reply_drafts: HashMap<u64, String>,

    // Popups
    pub show_help: bool,
    pub notification: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            store: CommentStore::new(),
            view: config.view_options(),
            timestamp_format: config.timestamp_format.clone(),
            focus: Focus::Composer,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            input: String::new(),
            selected: 0,
            reply_drafts: HashMap::new(),
            show_help: false,
            notification: None,
        }
    }

    /// Comments in the order they are displayed
    pub fn visible_comments(&self) -> Vec<Comment> {
        self.store.sorted_view(self.view.sort)
    }

    /// Id of the comment under the selection cursor
    pub fn selected_comment_id(&self) -> Option<u64> {
        self.visible_comments().get(self.selected).map(|c| c.id)
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.focus {
            Focus::Composer => &self.input,
            Focus::Comments => self
                .selected_comment_id()
                .and_then(|id| self.reply_drafts.get(&id))
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// Get mutable reference to current input field, or None when the
    /// list has nothing selected
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Composer => Some(&mut self.input),
            Focus::Comments => {
                let id = self.selected_comment_id()?;
                Some(self.reply_drafts.entry(id).or_default())
            }
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let comments = self.visible_comments();
        let reply_draft = comments
            .get(self.selected)
            .and_then(|c| self.reply_drafts.get(&c.id))
            .cloned()
            .unwrap_or_default();

        RenderState {
            comments,
            view: self.view,
            timestamp_format: self.timestamp_format.clone(),
            focus: self.focus,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            input: self.input.clone(),
            selected: self.selected,
            reply_draft,
            show_help: self.show_help,
            notification: self.notification.clone(),
        }
    }
}
