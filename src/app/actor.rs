//! App actor - message loop processing UI events

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{RenderState, UiEvent};

/// App actor that owns the state and applies UI events one at a time
pub struct AppActor {
    state: AppState,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(state: AppState, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor { state, render_tx }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        while let Some(event) = ui_rx.recv().await {
            if self.handle_ui_event(event) {
                tracing::info!("Quit requested");
                break;
            }
            let _ = self.render_tx.send(self.state.to_render_state());
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Focus and selection
            UiEvent::ToggleFocus => self.state.toggle_focus(),
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),

            // Input editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),
            UiEvent::Submit => self.state.submit(),

            // Comment actions
            UiEvent::DeleteComment => self.state.delete_selected(),
            UiEvent::ToggleStar => self.state.toggle_star_selected(),

            // View options
            UiEvent::NextSort => self.state.next_sort(),
            UiEvent::PrevSort => self.state.prev_sort(),
            UiEvent::ToggleTimestamps => self.state.toggle_timestamps(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),
            UiEvent::DismissNotification => self.state.dismiss_notification(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ui_events::Focus;

    #[tokio::test]
    async fn test_actor_renders_after_each_event() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let actor = AppActor::new(AppState::default(), render_tx);

        for event in [
            UiEvent::StartEditing,
            UiEvent::CharInput('H'),
            UiEvent::CharInput('i'),
            UiEvent::Submit,
            UiEvent::ToggleFocus,
            UiEvent::ToggleStar,
            UiEvent::Quit,
        ] {
            ui_tx.send(event).unwrap();
        }
        actor.run(ui_rx).await;

        let mut states = Vec::new();
        while let Ok(state) = render_rx.try_recv() {
            states.push(state);
        }
        // Initial state plus one per event before Quit
        assert_eq!(states.len(), 7);

        let last = states.last().unwrap();
        assert_eq!(last.focus, Focus::Comments);
        assert_eq!(last.comments.len(), 1);
        assert_eq!(last.comments[0].text, "Hi");
        assert!(last.comments[0].starred);
    }
}
