//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::DEFAULT_TIMESTAMP_FORMAT;
use crate::messages::ui_events::{Focus, InputMode};
use crate::models::{Comment, ViewOptions};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Comments in display order
    pub comments: Vec<Comment>,
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
    /// Reply draft for the selected comment
    pub reply_draft: String,

    // Popups
    pub show_help: bool,
    pub notification: Option<String>,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            comments: Vec::new(),
            view: ViewOptions::default(),
            timestamp_format: String::from(DEFAULT_TIMESTAMP_FORMAT),
            focus: Focus::Composer,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            input: String::new(),
            selected: 0,
            reply_draft: String::new(),
            show_help: false,
            notification: None,
        }
    }
}
