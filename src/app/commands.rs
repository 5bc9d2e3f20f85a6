//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::{Focus, InputMode};

impl AppState {
    // ========================
    // Focus and selection
    // ========================

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
        self.input_mode = InputMode::Normal;
    }

    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.store.len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.focus == Focus::Comments && self.selected_comment_id().is_none() {
            return;
        }
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let Some(input) = self.current_input_mut() else {
            return;
        };
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let Some(input) = self.current_input_mut() else {
                return;
            };
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    /// Enter in editing mode: post from the composer, reply from the list
    pub fn submit(&mut self) {
        match self.focus {
            Focus::Composer => self.post_comment(),
            Focus::Comments => self.submit_reply(),
        }
    }

    // ========================
    // Comment actions
    // ========================

    pub fn post_comment(&mut self) {
        match self.store.post_comment(&self.input) {
            Ok(id) => {
                tracing::info!(id, "Comment posted");
                self.input.clear();
                self.cursor_position = 0;
                self.input_mode = InputMode::Normal;
            }
            Err(e) => tracing::debug!(error = %e, "Post ignored"),
        }
    }

    /// Reply to the selected comment. The draft is consumed whether or
    /// not the reply is accepted.
    pub fn submit_reply(&mut self) {
        let Some(id) = self.selected_comment_id() else {
            return;
        };
        let text = self.reply_drafts.remove(&id).unwrap_or_default();
        self.cursor_position = 0;
        self.input_mode = InputMode::Normal;

        match self.store.add_reply(id, &text) {
            Ok(reply_id) => tracing::info!(id, reply_id, "Reply added"),
            Err(e) if e.is_user_visible() => {
                tracing::warn!(id, error = %e, "Reply rejected");
                self.notification = Some(e.to_string());
            }
            Err(e) => tracing::debug!(id, error = %e, "Reply ignored"),
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_comment_id() else {
            return;
        };
        match self.store.delete_comment(id) {
            Ok(_) => {
                tracing::info!(id, "Comment deleted");
                self.reply_drafts.remove(&id);
                self.clamp_selection();
            }
            Err(e) => tracing::debug!(id, error = %e, "Delete ignored"),
        }
    }

    pub fn toggle_star_selected(&mut self) {
        let Some(id) = self.selected_comment_id() else {
            return;
        };
        match self.store.toggle_star(id) {
            Ok(starred) => tracing::info!(id, starred, "Star toggled"),
            Err(e) => tracing::debug!(id, error = %e, "Star ignored"),
        }
    }

    // ========================
    // View options
    // ========================

    pub fn next_sort(&mut self) {
        self.view.sort = self.view.sort.next();
        self.selected = 0;
    }

    pub fn prev_sort(&mut self) {
        self.view.sort = self.view.sort.prev();
        self.selected = 0;
    }

    pub fn toggle_timestamps(&mut self) {
        self.view.show_timestamps = !self.view.show_timestamps;
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}
